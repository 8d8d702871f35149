//! # capacita-content
//!
//! Training content for the Capacita portal.
//! Holds the section/block document model edited in the browser, the
//! editor operations over it, the flattened-text converter used for storage
//! and search, and the markdown-lite preview renderer.

pub mod block;
pub mod converter;
pub mod document;
pub mod editor;
pub mod ids;
pub mod markdown;
pub mod plain_text;
pub mod section;
pub mod stats;

pub use block::{Align, BlockKind, BlockType, CheckItem, ContentBlock, HeadingLevel};
pub use converter::{parse_text, serialize_document, ConverterOptions, TextConverter};
pub use document::TrainingDocument;
pub use editor::{BlockPatch, DeleteOutcome, Direction, InsertPosition};
pub use ids::{BlockId, SectionId};
pub use markdown::{render_markdown, MarkdownRenderer, RenderOptions};
pub use plain_text::plain_text;
pub use section::TrainingSection;
pub use stats::DocumentStats;
