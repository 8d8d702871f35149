//! Flattened text parser.
//!
//! Two passes: the text is first split into section chunks, then each chunk
//! is scanned line by line. Lines that are not structural accumulate in a
//! running-text buffer that is flushed as one text block whenever a
//! structural line (or the end of the chunk) is reached.
//!
//! A `---` line separates sections only when the next non-blank line opens a
//! new section (`## `). Anywhere else it is a divider block. A divider block
//! directly followed by a level-2 heading flattens to the same text as a
//! section break, so it is read back as one.

use capacita_core::constants::{DIVIDER_LINE, IMAGE_MARKER, SECTION_TITLE_PREFIX, VIDEO_MARKER};

use super::ConverterOptions;
use crate::block::{BlockKind, BlockType, ContentBlock};
use crate::document::TrainingDocument;
use crate::section::TrainingSection;

const H1_PREFIX: &str = "# ";
const H3_PREFIX: &str = "### ";

pub(super) fn parse_text(text: &str, options: &ConverterOptions) -> TrainingDocument {
    if text.trim().is_empty() {
        return TrainingDocument::placeholder_titled(&options.default_section_title);
    }

    let sections = split_sections(text)
        .into_iter()
        .enumerate()
        .map(|(index, lines)| parse_chunk(&lines, index + 1, options))
        .collect();
    TrainingDocument::new(sections)
}

fn is_divider(line: &str) -> bool {
    line.trim() == DIVIDER_LINE
}

fn split_sections(text: &str) -> Vec<Vec<&str>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut chunks = vec![Vec::new()];

    for (index, line) in lines.iter().enumerate() {
        let opens_section = is_divider(line)
            && lines[index + 1..]
                .iter()
                .find(|next| !next.trim().is_empty())
                .is_some_and(|next| next.starts_with(SECTION_TITLE_PREFIX));

        if opens_section {
            chunks.push(Vec::new());
        } else if let Some(current) = chunks.last_mut() {
            current.push(*line);
        }
    }
    chunks
}

/// Accumulates one chunk's blocks.
struct ChunkBuilder {
    blocks: Vec<ContentBlock>,
    running: Vec<String>,
}

impl ChunkBuilder {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            running: Vec::new(),
        }
    }

    fn flush(&mut self) {
        if self.running.is_empty() {
            return;
        }
        let joined = self.running.join("\n");
        self.running.clear();
        let content = joined.trim();
        if !content.is_empty() {
            self.push(BlockKind::text(content));
        }
    }

    fn push(&mut self, kind: BlockKind) {
        self.blocks.push(ContentBlock::new(kind));
    }

    /// Flush pending text, then push a structural block.
    fn push_structural(&mut self, kind: BlockKind) {
        self.flush();
        self.push(kind);
    }
}

fn parse_chunk(lines: &[&str], ordinal: usize, options: &ConverterOptions) -> TrainingSection {
    let mut title: Option<String> = None;
    let mut builder = ChunkBuilder::new();

    for &line in lines {
        if let Some(rest) = line.strip_prefix(SECTION_TITLE_PREFIX) {
            builder.flush();
            let rest = rest.trim();
            if !rest.is_empty() {
                title = Some(rest.to_string());
            }
        } else if let Some(rest) = line.strip_prefix(H3_PREFIX) {
            builder.push_structural(BlockKind::heading(3, rest.trim()));
        } else if let Some(rest) = line.strip_prefix(H1_PREFIX) {
            builder.push_structural(BlockKind::heading(1, rest.trim()));
        } else if line.starts_with(IMAGE_MARKER) {
            let media_url = bracket_contents(line, IMAGE_MARKER);
            builder.push_structural(media_block(BlockType::Image, media_url));
        } else if line.starts_with(VIDEO_MARKER) {
            let media_url = bracket_contents(line, VIDEO_MARKER);
            builder.push_structural(media_block(BlockType::Video, media_url));
        } else if is_divider(line) {
            builder.push_structural(BlockKind::Divider);
        } else {
            builder.running.push(line.to_string());
        }
    }
    builder.flush();

    let mut blocks = builder.blocks;
    if blocks.is_empty() {
        blocks.push(ContentBlock::empty(BlockType::Text));
    }

    let title =
        title.unwrap_or_else(|| format!("{} {ordinal}", options.untitled_section_prefix));
    TrainingSection::with_blocks(title, blocks)
}

/// Text between the marker and the closing bracket, trimmed.
fn bracket_contents(line: &str, marker: &str) -> Option<String> {
    let rest = line.get(marker.len()..)?.trim_end();
    let inner = rest.strip_suffix(']').unwrap_or(rest).trim();
    (!inner.is_empty()).then(|| inner.to_string())
}

fn media_block(ty: BlockType, media_url: Option<String>) -> BlockKind {
    let mut kind = BlockKind::empty(ty);
    if let BlockKind::Image { media_url: url, .. } | BlockKind::Video { media_url: url, .. } =
        &mut kind
    {
        *url = media_url;
    }
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_requires_following_title() {
        let chunks = split_sections("## A\n\ntexto\n\n---\n\nmais\n\n---\n\n## B\n\nfim");
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].contains(&"---"));
        assert_eq!(chunks[1].last(), Some(&"fim"));
    }

    #[test]
    fn bracket_contents_tolerates_missing_bracket() {
        assert_eq!(
            bracket_contents("[Imagem: https://cdn/a.png]", IMAGE_MARKER).as_deref(),
            Some("https://cdn/a.png")
        );
        assert_eq!(
            bracket_contents("[Imagem: foto", IMAGE_MARKER).as_deref(),
            Some("foto")
        );
        assert_eq!(bracket_contents("[Imagem:]", IMAGE_MARKER), None);
    }
}
