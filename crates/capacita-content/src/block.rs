//! Content blocks: the typed units a training section is made of.
//!
//! A block is an id plus a [`BlockKind`]. On the wire the two are flattened
//! into one object tagged by `"type"`, with camelCase payload fields, which is
//! the shape the web editor already consumes:
//!
//! ```json
//! { "id": "…", "type": "heading", "content": "Boas-vindas", "level": 1, "align": "center" }
//! ```

use serde::{Deserialize, Serialize};

use crate::ids::BlockId;

/// Horizontal alignment of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Heading level, always within 1..=3.
///
/// Out-of-range values are clamped rather than rejected, so a stale client
/// sending `level: 5` still gets a valid heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const H1: Self = Self(1);
    pub const H2: Self = Self(2);
    pub const H3: Self = Self(3);

    pub fn new(level: u8) -> Self {
        Self(level.clamp(1, 3))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::H2
    }
}

impl From<u8> for HeadingLevel {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl From<i64> for HeadingLevel {
    fn from(level: i64) -> Self {
        Self(level.clamp(1, 3) as u8)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

/// One entry of a checklist block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckItem {
    pub text: String,
    pub checked: bool,
}

impl CheckItem {
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }
}

/// Discriminant of a block, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Text,
    Heading,
    Image,
    Video,
    Divider,
    Quote,
    List,
    Checklist,
}

impl BlockType {
    pub const ALL: [BlockType; 8] = [
        BlockType::Text,
        BlockType::Heading,
        BlockType::Image,
        BlockType::Video,
        BlockType::Divider,
        BlockType::Quote,
        BlockType::List,
        BlockType::Checklist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Text => "text",
            BlockType::Heading => "heading",
            BlockType::Image => "image",
            BlockType::Video => "video",
            BlockType::Divider => "divider",
            BlockType::Quote => "quote",
            BlockType::List => "list",
            BlockType::Checklist => "checklist",
        }
    }

    /// Parse the wire name of a block type. Case-insensitive.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(name))
    }

    /// Whether blocks of this type carry a single text payload.
    pub fn is_textual(self) -> bool {
        matches!(self, BlockType::Text | BlockType::Heading | BlockType::Quote)
    }

    pub fn is_media(self) -> bool {
        matches!(self, BlockType::Image | BlockType::Video)
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific payload of a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum BlockKind {
    Text {
        #[serde(default)]
        content: String,
        #[serde(default)]
        align: Align,
    },
    Heading {
        #[serde(default)]
        content: String,
        #[serde(default)]
        level: HeadingLevel,
        #[serde(default)]
        align: Align,
    },
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(default)]
        align: Align,
    },
    Video {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(default)]
        align: Align,
    },
    Divider,
    Quote {
        #[serde(default)]
        content: String,
    },
    List {
        #[serde(default)]
        list_items: Vec<String>,
    },
    Checklist {
        #[serde(default)]
        check_items: Vec<CheckItem>,
    },
}

impl BlockKind {
    /// A fresh block of `ty` with the defaults the editor expects: heading
    /// level 2, one empty list item, one unchecked empty checklist item.
    pub fn empty(ty: BlockType) -> Self {
        match ty {
            BlockType::Text => BlockKind::Text {
                content: String::new(),
                align: Align::Left,
            },
            BlockType::Heading => BlockKind::Heading {
                content: String::new(),
                level: HeadingLevel::H2,
                align: Align::Left,
            },
            BlockType::Image => BlockKind::Image {
                media_url: None,
                caption: None,
                align: Align::Left,
            },
            BlockType::Video => BlockKind::Video {
                media_url: None,
                caption: None,
                align: Align::Left,
            },
            BlockType::Divider => BlockKind::Divider,
            BlockType::Quote => BlockKind::Quote {
                content: String::new(),
            },
            BlockType::List => BlockKind::List {
                list_items: vec![String::new()],
            },
            BlockType::Checklist => BlockKind::Checklist {
                check_items: vec![CheckItem::default()],
            },
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        BlockKind::Text {
            content: content.into(),
            align: Align::Left,
        }
    }

    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        BlockKind::Heading {
            content: content.into(),
            level: HeadingLevel::new(level),
            align: Align::Left,
        }
    }

    pub fn image(media_url: impl Into<String>) -> Self {
        BlockKind::Image {
            media_url: Some(media_url.into()),
            caption: None,
            align: Align::Left,
        }
    }

    pub fn video(media_url: impl Into<String>) -> Self {
        BlockKind::Video {
            media_url: Some(media_url.into()),
            caption: None,
            align: Align::Left,
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockKind::Text { .. } => BlockType::Text,
            BlockKind::Heading { .. } => BlockType::Heading,
            BlockKind::Image { .. } => BlockType::Image,
            BlockKind::Video { .. } => BlockType::Video,
            BlockKind::Divider => BlockType::Divider,
            BlockKind::Quote { .. } => BlockType::Quote,
            BlockKind::List { .. } => BlockType::List,
            BlockKind::Checklist { .. } => BlockType::Checklist,
        }
    }

    /// The single text payload of text, heading and quote blocks.
    pub fn content(&self) -> Option<&str> {
        match self {
            BlockKind::Text { content, .. }
            | BlockKind::Heading { content, .. }
            | BlockKind::Quote { content } => Some(content),
            _ => None,
        }
    }

    pub fn align(&self) -> Option<Align> {
        match self {
            BlockKind::Text { align, .. }
            | BlockKind::Heading { align, .. }
            | BlockKind::Image { align, .. }
            | BlockKind::Video { align, .. } => Some(*align),
            _ => None,
        }
    }

    pub fn media_url(&self) -> Option<&str> {
        match self {
            BlockKind::Image { media_url, .. } | BlockKind::Video { media_url, .. } => {
                media_url.as_deref()
            }
            _ => None,
        }
    }

    /// All human-readable text the block carries, in display order.
    pub fn text_lines(&self) -> Vec<&str> {
        match self {
            BlockKind::Text { content, .. }
            | BlockKind::Heading { content, .. }
            | BlockKind::Quote { content } => vec![content.as_str()],
            BlockKind::Image { caption, .. } | BlockKind::Video { caption, .. } => {
                caption.as_deref().into_iter().collect()
            }
            BlockKind::Divider => Vec::new(),
            BlockKind::List { list_items } => list_items.iter().map(String::as_str).collect(),
            BlockKind::Checklist { check_items } => {
                check_items.iter().map(|item| item.text.as_str()).collect()
            }
        }
    }

    /// Whether the block contributes anything to the flattened text.
    /// Dividers always do; media only once a URL is set.
    pub fn has_content(&self) -> bool {
        match self {
            BlockKind::Text { content, .. }
            | BlockKind::Heading { content, .. }
            | BlockKind::Quote { content } => !content.trim().is_empty(),
            BlockKind::Image { media_url, .. } | BlockKind::Video { media_url, .. } => media_url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty()),
            BlockKind::Divider => true,
            BlockKind::List { list_items } => list_items.iter().any(|i| !i.trim().is_empty()),
            BlockKind::Checklist { check_items } => {
                check_items.iter().any(|i| !i.text.trim().is_empty())
            }
        }
    }

    /// Empty the payload in place. Heading level and alignment survive.
    pub fn clear(&mut self) {
        match self {
            BlockKind::Text { content, .. }
            | BlockKind::Heading { content, .. }
            | BlockKind::Quote { content } => content.clear(),
            BlockKind::Image {
                media_url, caption, ..
            }
            | BlockKind::Video {
                media_url, caption, ..
            } => {
                *media_url = None;
                *caption = None;
            }
            BlockKind::Divider => {}
            BlockKind::List { list_items } => *list_items = vec![String::new()],
            BlockKind::Checklist { check_items } => *check_items = vec![CheckItem::default()],
        }
    }

    /// Convert to another variant, carrying over whatever the two share:
    /// text between textual and list-like blocks (one line per item), media
    /// fields between image and video, and alignment.
    pub fn converted_to(&self, ty: BlockType) -> BlockKind {
        if self.block_type() == ty {
            return self.clone();
        }

        let mut target = BlockKind::empty(ty);
        let lines: Vec<String> = match self {
            BlockKind::Image { .. } | BlockKind::Video { .. } | BlockKind::Divider => Vec::new(),
            other => other
                .text_lines()
                .into_iter()
                .flat_map(str::lines)
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        };

        match &mut target {
            BlockKind::Text { content, .. }
            | BlockKind::Heading { content, .. }
            | BlockKind::Quote { content } => *content = lines.join("\n"),
            BlockKind::List { list_items } if !lines.is_empty() => *list_items = lines,
            BlockKind::Checklist { check_items } if !lines.is_empty() => {
                *check_items = lines
                    .into_iter()
                    .map(|text| CheckItem::new(text, false))
                    .collect();
            }
            BlockKind::Image {
                media_url, caption, ..
            }
            | BlockKind::Video {
                media_url, caption, ..
            } => {
                if let BlockKind::Image {
                    media_url: url,
                    caption: cap,
                    ..
                }
                | BlockKind::Video {
                    media_url: url,
                    caption: cap,
                    ..
                } = self
                {
                    media_url.clone_from(url);
                    caption.clone_from(cap);
                }
            }
            _ => {}
        }

        if let Some(align) = self.align() {
            target.set_align(align);
        }
        target
    }

    pub(crate) fn set_align(&mut self, value: Align) {
        match self {
            BlockKind::Text { align, .. }
            | BlockKind::Heading { align, .. }
            | BlockKind::Image { align, .. }
            | BlockKind::Video { align, .. } => *align = value,
            _ => {}
        }
    }
}

/// A block of a training section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: BlockId,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl ContentBlock {
    /// A block with a freshly generated id.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: BlockId::generate(),
            kind,
        }
    }

    /// A fresh block of `ty` with type-appropriate empty defaults.
    pub fn empty(ty: BlockType) -> Self {
        Self::new(BlockKind::empty(ty))
    }

    pub fn block_type(&self) -> BlockType {
        self.kind.block_type()
    }
}
