use capacita_core::constants::{
    CHECKED_MARK, DIVIDER_LINE, IMAGE_MARKER, LIST_BULLET, SECTION_SEPARATOR,
    SECTION_TITLE_PREFIX, UNCHECKED_MARK, VIDEO_MARKER,
};

use crate::block::BlockKind;
use crate::document::TrainingDocument;
use crate::section::TrainingSection;

pub(super) fn serialize_document(document: &TrainingDocument) -> String {
    document
        .sections
        .iter()
        .map(serialize_section)
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

fn serialize_section(section: &TrainingSection) -> String {
    let body = section
        .blocks
        .iter()
        .filter_map(|block| serialize_block(&block.kind))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{SECTION_TITLE_PREFIX}{}\n\n{body}", section.title)
}

/// Text form of one block, or `None` when it has nothing to contribute.
fn serialize_block(kind: &BlockKind) -> Option<String> {
    if !kind.has_content() {
        return None;
    }
    let text = match kind {
        BlockKind::Text { content, .. } | BlockKind::Quote { content } => content.clone(),
        BlockKind::Heading { content, level, .. } => {
            // A heading is one line in the flattened form.
            let line = content.lines().map(str::trim).collect::<Vec<_>>().join(" ");
            format!("{} {line}", "#".repeat(usize::from(level.get())))
        }
        BlockKind::Image {
            media_url, caption, ..
        } => media_marker(IMAGE_MARKER, media_url.as_deref(), caption.as_deref())?,
        BlockKind::Video {
            media_url, caption, ..
        } => media_marker(VIDEO_MARKER, media_url.as_deref(), caption.as_deref())?,
        BlockKind::Divider => DIVIDER_LINE.to_string(),
        BlockKind::List { list_items } => list_items
            .iter()
            .filter(|item| !item.trim().is_empty())
            .map(|item| format!("{LIST_BULLET} {item}"))
            .collect::<Vec<_>>()
            .join("\n"),
        BlockKind::Checklist { check_items } => check_items
            .iter()
            .filter(|item| !item.text.trim().is_empty())
            .map(|item| {
                let mark = if item.checked { CHECKED_MARK } else { UNCHECKED_MARK };
                format!("{mark} {}", item.text)
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Some(text)
}

/// `[Imagem: caption-or-url]`; the caption wins when present.
fn media_marker(marker: &str, media_url: Option<&str>, caption: Option<&str>) -> Option<String> {
    let url = media_url.filter(|u| !u.trim().is_empty())?;
    let label = caption.filter(|c| !c.trim().is_empty()).unwrap_or(url);
    Some(format!("{marker} {label}]"))
}
