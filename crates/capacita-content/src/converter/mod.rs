//! Flattened text ⇄ block document conversion.
//!
//! Training content is stored as a single text column. The format is a thin
//! markdown-ish dialect: `## ` section titles, `#`/`###` headings, bracketed
//! media markers, `---` dividers and section separators. The conversion is
//! lossy (lists and quotes come back as text, captions as media URLs); see
//! [`parse`] for the exact rules.

mod parse;
mod serialize;

use capacita_core::config::ContentConfig;
use capacita_core::constants::{DEFAULT_SECTION_TITLE, UNTITLED_SECTION_PREFIX};

use crate::document::TrainingDocument;

/// Titles the converter fills in when the text does not carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Title of the placeholder section produced for blank input.
    pub default_section_title: String,
    /// Prefix of the `"<prefix> N"` title given to untitled sections.
    pub untitled_section_prefix: String,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            default_section_title: DEFAULT_SECTION_TITLE.to_string(),
            untitled_section_prefix: UNTITLED_SECTION_PREFIX.to_string(),
        }
    }
}

impl From<&ContentConfig> for ConverterOptions {
    fn from(config: &ContentConfig) -> Self {
        Self {
            default_section_title: config.effective_default_section_title().to_string(),
            untitled_section_prefix: config.effective_untitled_section_prefix().to_string(),
        }
    }
}

/// Converter between [`TrainingDocument`] and its flattened text form.
#[derive(Debug, Clone, Default)]
pub struct TextConverter {
    options: ConverterOptions,
}

impl TextConverter {
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(ConverterOptions::from(config))
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Flatten a document to text.
    pub fn serialize(&self, document: &TrainingDocument) -> String {
        let text = serialize::serialize_document(document);
        tracing::debug!(
            sections = document.section_count(),
            blocks = document.block_count(),
            bytes = text.len(),
            "serialized training document"
        );
        text
    }

    /// Parse flattened text back into sections and blocks. Never fails.
    pub fn parse(&self, text: &str) -> TrainingDocument {
        let document = parse::parse_text(text, &self.options);
        tracing::debug!(
            sections = document.section_count(),
            blocks = document.block_count(),
            bytes = text.len(),
            "parsed flattened text"
        );
        document
    }

    /// The document shown for blank content.
    pub fn placeholder(&self) -> TrainingDocument {
        TrainingDocument::placeholder_titled(&self.options.default_section_title)
    }
}

/// [`TextConverter::serialize`] with default options.
pub fn serialize_document(document: &TrainingDocument) -> String {
    TextConverter::default().serialize(document)
}

/// [`TextConverter::parse`] with default options.
pub fn parse_text(text: &str) -> TrainingDocument {
    TextConverter::default().parse(text)
}
