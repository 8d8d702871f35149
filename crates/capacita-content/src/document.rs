//! The training document: an ordered list of sections.

use serde::{Deserialize, Serialize};

use capacita_core::constants::DEFAULT_SECTION_TITLE;

use crate::block::ContentBlock;
use crate::ids::{BlockId, SectionId};
use crate::section::TrainingSection;

/// A training's structured content. Serializes as a plain JSON array of
/// sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingDocument {
    pub sections: Vec<TrainingSection>,
}

impl TrainingDocument {
    pub fn new(sections: Vec<TrainingSection>) -> Self {
        Self { sections }
    }

    /// One `Conteúdo Principal` section holding one empty text block.
    pub fn placeholder() -> Self {
        Self::placeholder_titled(DEFAULT_SECTION_TITLE)
    }

    pub fn placeholder_titled(title: &str) -> Self {
        Self {
            sections: vec![TrainingSection::new(title)],
        }
    }

    pub fn section(&self, id: &SectionId) -> Option<&TrainingSection> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn section_mut(&mut self, id: &SectionId) -> Option<&mut TrainingSection> {
        self.sections.iter_mut().find(|s| &s.id == id)
    }

    pub(crate) fn section_index(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    /// `(section index, block index)` of a block.
    pub(crate) fn locate_block(&self, id: &BlockId) -> Option<(usize, usize)> {
        self.sections
            .iter()
            .enumerate()
            .find_map(|(si, section)| section.block_index(id).map(|bi| (si, bi)))
    }

    pub fn find_block(&self, id: &BlockId) -> Option<&ContentBlock> {
        self.locate_block(id)
            .map(|(si, bi)| &self.sections[si].blocks[bi])
    }

    /// Section that contains the block.
    pub fn section_of(&self, id: &BlockId) -> Option<&TrainingSection> {
        self.locate_block(id).map(|(si, _)| &self.sections[si])
    }

    pub fn blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.sections.iter().flat_map(|s| s.blocks.iter())
    }

    pub fn block_count(&self) -> usize {
        self.sections.iter().map(TrainingSection::len).sum()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
