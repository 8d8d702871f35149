//! Editor operations over a [`TrainingDocument`].
//!
//! Every operation is total: an unknown id is a logged no-op, never an error,
//! matching what the browser editor expects when it races a stale id.

use serde::{Deserialize, Serialize};

use crate::block::{Align, BlockKind, BlockType, CheckItem, HeadingLevel};
use crate::document::TrainingDocument;
use crate::ids::{BlockId, SectionId};
use crate::section::TrainingSection;

/// Where a new block goes inside its section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertPosition {
    /// Directly after the given block; at the end if it is not in the section.
    After(BlockId),
    End,
}

impl InsertPosition {
    pub fn after(id: Option<BlockId>) -> Self {
        id.map_or(InsertPosition::End, InsertPosition::After)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// What `delete_block` actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeleteOutcome {
    Removed,
    /// The block was the only one in its section, so it was emptied instead.
    Cleared,
    NotFound,
}

/// Partial update for a block. Fields that the block's variant does not
/// carry are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockPatch {
    pub content: Option<String>,
    pub level: Option<HeadingLevel>,
    pub align: Option<Align>,
    /// An empty string clears the media URL.
    pub media_url: Option<String>,
    /// An empty string clears the caption.
    pub caption: Option<String>,
    pub list_items: Option<Vec<String>>,
    pub check_items: Option<Vec<CheckItem>>,
}

impl BlockPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl BlockKind {
    /// Merge the fields of `patch` that this variant carries.
    pub fn apply_patch(&mut self, patch: &BlockPatch) {
        if let Some(value) = patch.align {
            self.set_align(value);
        }
        match self {
            BlockKind::Text { content, .. } | BlockKind::Quote { content } => {
                if let Some(value) = &patch.content {
                    content.clone_from(value);
                }
            }
            BlockKind::Heading { content, level, .. } => {
                if let Some(value) = &patch.content {
                    content.clone_from(value);
                }
                if let Some(value) = patch.level {
                    *level = value;
                }
            }
            BlockKind::Image {
                media_url, caption, ..
            }
            | BlockKind::Video {
                media_url, caption, ..
            } => {
                if let Some(value) = &patch.media_url {
                    *media_url = non_empty(value);
                }
                if let Some(value) = &patch.caption {
                    *caption = non_empty(value);
                }
            }
            BlockKind::Divider => {}
            BlockKind::List { list_items } => {
                if let Some(items) = &patch.list_items {
                    list_items.clone_from(items);
                }
            }
            BlockKind::Checklist { check_items } => {
                if let Some(items) = &patch.check_items {
                    check_items.clone_from(items);
                }
            }
        }
    }
}

/// Swap `items[index]` with its neighbour in `direction`.
/// Returns false at the boundaries.
fn swap_with_neighbour<T>(items: &mut [T], index: usize, direction: Direction) -> bool {
    let target = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => Some(index + 1).filter(|&i| i < items.len()),
    };
    match target {
        Some(target) => {
            items.swap(index, target);
            true
        }
        None => false,
    }
}

impl TrainingDocument {
    /// Append a new section seeded with one empty text block.
    pub fn add_section(&mut self, title: impl Into<String>) -> SectionId {
        let section = TrainingSection::new(title);
        let id = section.id.clone();
        self.sections.push(section);
        id
    }

    pub fn rename_section(&mut self, id: &SectionId, title: impl Into<String>) -> bool {
        match self.section_mut(id) {
            Some(section) => {
                section.title = title.into();
                true
            }
            None => {
                tracing::trace!(section = %id, "rename: unknown section");
                false
            }
        }
    }

    /// Remove a section. The last remaining section is never removed.
    pub fn remove_section(&mut self, id: &SectionId) -> bool {
        if self.sections.len() <= 1 {
            tracing::trace!(section = %id, "remove: refusing to drop the last section");
            return false;
        }
        match self.section_index(id) {
            Some(index) => {
                self.sections.remove(index);
                true
            }
            None => {
                tracing::trace!(section = %id, "remove: unknown section");
                false
            }
        }
    }

    /// Insert a fresh block of `ty` into a section. `None` if the section
    /// does not exist.
    pub fn insert_block(
        &mut self,
        section_id: &SectionId,
        position: InsertPosition,
        ty: BlockType,
    ) -> Option<BlockId> {
        match self.section_mut(section_id) {
            Some(section) => Some(section.insert_block(position, ty)),
            None => {
                tracing::trace!(section = %section_id, "insert: unknown section");
                None
            }
        }
    }

    /// Merge `patch` into a block. Unknown ids are a silent no-op.
    pub fn update_block(&mut self, id: &BlockId, patch: &BlockPatch) -> bool {
        match self.block_mut(id) {
            Some(kind) => {
                kind.apply_patch(patch);
                true
            }
            None => {
                tracing::trace!(block = %id, "update: unknown block");
                false
            }
        }
    }

    /// Convert a block to another type in place, keeping its id.
    pub fn change_block_type(&mut self, id: &BlockId, ty: BlockType) -> bool {
        match self.block_mut(id) {
            Some(kind) => {
                *kind = kind.converted_to(ty);
                true
            }
            None => {
                tracing::trace!(block = %id, "change type: unknown block");
                false
            }
        }
    }

    /// Delete a block. The sole block of a section is cleared instead, so a
    /// section always keeps at least one block.
    pub fn delete_block(&mut self, id: &BlockId) -> DeleteOutcome {
        let Some((si, bi)) = self.locate_block(id) else {
            tracing::trace!(block = %id, "delete: unknown block");
            return DeleteOutcome::NotFound;
        };
        let section = &mut self.sections[si];
        if section.blocks.len() == 1 {
            section.blocks[bi].kind.clear();
            DeleteOutcome::Cleared
        } else {
            section.blocks.remove(bi);
            DeleteOutcome::Removed
        }
    }

    /// Swap a block with its neighbour inside its section. No-op at the
    /// section boundaries; blocks never cross sections.
    pub fn move_block(&mut self, id: &BlockId, direction: Direction) -> bool {
        let Some((si, bi)) = self.locate_block(id) else {
            tracing::trace!(block = %id, "move: unknown block");
            return false;
        };
        swap_with_neighbour(&mut self.sections[si].blocks, bi, direction)
    }

    pub fn move_section(&mut self, id: &SectionId, direction: Direction) -> bool {
        let Some(index) = self.section_index(id) else {
            tracing::trace!(section = %id, "move: unknown section");
            return false;
        };
        swap_with_neighbour(&mut self.sections, index, direction)
    }

    fn block_mut(&mut self, id: &BlockId) -> Option<&mut BlockKind> {
        let (si, bi) = self.locate_block(id)?;
        Some(&mut self.sections[si].blocks[bi].kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_respects_boundaries() {
        let mut items = [1, 2, 3];
        assert!(!swap_with_neighbour(&mut items, 0, Direction::Up));
        assert!(!swap_with_neighbour(&mut items, 2, Direction::Down));
        assert!(swap_with_neighbour(&mut items, 1, Direction::Down));
        assert_eq!(items, [1, 3, 2]);
    }

    #[test]
    fn empty_strings_clear_media_fields() {
        let mut kind = BlockKind::image("https://cdn/a.png");
        kind.apply_patch(&BlockPatch {
            media_url: Some(String::new()),
            ..BlockPatch::default()
        });
        assert_eq!(kind.media_url(), None);
    }

    #[test]
    fn direction_parse() {
        assert_eq!(Direction::parse("UP"), Some(Direction::Up));
        assert_eq!(Direction::parse("sideways"), None);
    }
}
