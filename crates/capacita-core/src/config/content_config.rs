//! Content editing and conversion configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Title of the placeholder section produced from empty text. Default: "Conteúdo Principal".
    pub default_section_title: Option<String>,
    /// Prefix for untitled sections. Default: "Seção".
    pub untitled_section_prefix: Option<String>,
    /// Reading speed for duration estimates. Default: 200.
    pub words_per_minute: Option<u32>,
}

impl ContentConfig {
    pub fn effective_default_section_title(&self) -> &str {
        self.default_section_title
            .as_deref()
            .unwrap_or(constants::DEFAULT_SECTION_TITLE)
    }

    pub fn effective_untitled_section_prefix(&self) -> &str {
        self.untitled_section_prefix
            .as_deref()
            .unwrap_or(constants::UNTITLED_SECTION_PREFIX)
    }

    pub fn effective_words_per_minute(&self) -> u32 {
        self.words_per_minute
            .unwrap_or(constants::DEFAULT_WORDS_PER_MINUTE)
    }
}
