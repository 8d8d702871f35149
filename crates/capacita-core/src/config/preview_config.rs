//! Markdown preview configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreviewConfig {
    /// Run the HTML sanitizer after rendering. Default: true.
    pub sanitize: Option<bool>,
    /// Render links with `target="_blank"`. Default: true.
    pub links_new_tab: Option<bool>,
}

impl PreviewConfig {
    pub fn effective_sanitize(&self) -> bool {
        self.sanitize.unwrap_or(true)
    }

    pub fn effective_links_new_tab(&self) -> bool {
        self.links_new_tab.unwrap_or(true)
    }
}
