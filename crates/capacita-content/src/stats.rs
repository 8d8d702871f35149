//! Document statistics shown on the training card.

use serde::{Deserialize, Serialize};

use capacita_core::config::ContentConfig;

use crate::block::BlockType;
use crate::document::TrainingDocument;
use crate::plain_text::plain_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub sections: usize,
    pub blocks: usize,
    pub words: usize,
    /// Image and video blocks with a media URL set.
    pub media: usize,
    /// Reading time rounded up to whole minutes; 0 for a document without words.
    pub reading_minutes: u32,
}

impl DocumentStats {
    pub fn compute(document: &TrainingDocument, words_per_minute: u32) -> Self {
        let words = plain_text(document).split_whitespace().count();
        let media = document
            .blocks()
            .filter(|b| b.block_type().is_media() && b.kind.media_url().is_some())
            .count();
        Self {
            sections: document.section_count(),
            blocks: document.block_count(),
            words,
            media,
            reading_minutes: reading_minutes(words, words_per_minute),
        }
    }

    pub fn from_config(document: &TrainingDocument, config: &ContentConfig) -> Self {
        Self::compute(document, config.effective_words_per_minute())
    }

    /// Counts per block type, in [`BlockType::ALL`] order.
    pub fn by_type(document: &TrainingDocument) -> Vec<(BlockType, usize)> {
        BlockType::ALL
            .into_iter()
            .map(|ty| (ty, document.blocks().filter(|b| b.block_type() == ty).count()))
            .collect()
    }
}

fn reading_minutes(words: usize, words_per_minute: u32) -> u32 {
    if words == 0 {
        return 0;
    }
    let wpm = words_per_minute.max(1) as usize;
    u32::try_from(words.div_ceil(wpm)).unwrap_or(u32::MAX)
}
