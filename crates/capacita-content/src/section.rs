//! Training sections: a titled, ordered run of blocks.

use serde::{Deserialize, Serialize};

use crate::block::{BlockType, ContentBlock};
use crate::editor::InsertPosition;
use crate::ids::{BlockId, SectionId};

/// A titled section of a training. Block order is list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSection {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

impl TrainingSection {
    /// A new section seeded with one empty text block, the state the editor
    /// shows after "add section".
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_blocks(title, vec![ContentBlock::empty(BlockType::Text)])
    }

    pub fn with_blocks(title: impl Into<String>, blocks: Vec<ContentBlock>) -> Self {
        Self {
            id: SectionId::generate(),
            title: title.into(),
            blocks,
        }
    }

    pub fn block_index(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn block(&self, id: &BlockId) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    /// Insert a fresh block of `ty`. A reference block that is not in this
    /// section degrades to appending at the end.
    pub fn insert_block(&mut self, position: InsertPosition, ty: BlockType) -> BlockId {
        let block = ContentBlock::empty(ty);
        let id = block.id.clone();
        let index = match &position {
            InsertPosition::After(after) => self
                .block_index(after)
                .map(|i| i + 1)
                .unwrap_or(self.blocks.len()),
            InsertPosition::End => self.blocks.len(),
        };
        self.blocks.insert(index, block);
        id
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
