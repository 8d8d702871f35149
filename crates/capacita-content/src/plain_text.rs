//! Plain-text extraction for full-text search.

use crate::document::TrainingDocument;

/// Section titles and every block's readable text, one entry per line, with
/// no structural markers. Media URLs are left out; captions are kept.
pub fn plain_text(document: &TrainingDocument) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for section in &document.sections {
        if !section.title.trim().is_empty() {
            lines.push(section.title.trim());
        }
        for block in &section.blocks {
            lines.extend(
                block
                    .kind
                    .text_lines()
                    .into_iter()
                    .map(str::trim)
                    .filter(|line| !line.is_empty()),
            );
        }
    }
    lines.join("\n")
}
