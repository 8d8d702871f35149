//! Top-level Capacita configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BillingConfig, ContentConfig, PreviewConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "capacita.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CAPACITA_*`)
/// 3. Project config (`capacita.toml` in project root)
/// 4. User config (`~/.capacita/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CapacitaConfig {
    pub content: ContentConfig,
    pub billing: BillingConfig,
    pub preview: PreviewConfig,
}

/// Explicit overrides, typically supplied by the host application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub annual_discount_enabled: Option<bool>,
    pub annual_discount_percent: Option<u32>,
    pub catalog_ttl_seconds: Option<u64>,
    pub sanitize_preview: Option<bool>,
}

impl CapacitaConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        tracing::debug!(root = %root.display(), "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CapacitaConfig) -> Result<(), ConfigError> {
        if let Some(percent) = config.billing.annual_discount_percent {
            if percent > 100 {
                return Err(ConfigError::ValidationFailed {
                    field: "billing.annual_discount_percent".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }
        if config.billing.catalog_ttl_seconds == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "billing.catalog_ttl_seconds".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.content.words_per_minute == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "content.words_per_minute".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(title) = &config.content.default_section_title {
            if title.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "content.default_section_title".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CapacitaConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CapacitaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut CapacitaConfig, other: &CapacitaConfig) {
        // Content
        if other.content.default_section_title.is_some() {
            base.content.default_section_title = other.content.default_section_title.clone();
        }
        if other.content.untitled_section_prefix.is_some() {
            base.content.untitled_section_prefix = other.content.untitled_section_prefix.clone();
        }
        if other.content.words_per_minute.is_some() {
            base.content.words_per_minute = other.content.words_per_minute;
        }

        // Billing
        if other.billing.annual_discount_enabled.is_some() {
            base.billing.annual_discount_enabled = other.billing.annual_discount_enabled;
        }
        if other.billing.annual_discount_percent.is_some() {
            base.billing.annual_discount_percent = other.billing.annual_discount_percent;
        }
        if other.billing.catalog_ttl_seconds.is_some() {
            base.billing.catalog_ttl_seconds = other.billing.catalog_ttl_seconds;
        }
        if other.billing.currency.is_some() {
            base.billing.currency = other.billing.currency.clone();
        }

        // Preview
        if other.preview.sanitize.is_some() {
            base.preview.sanitize = other.preview.sanitize;
        }
        if other.preview.links_new_tab.is_some() {
            base.preview.links_new_tab = other.preview.links_new_tab;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CAPACITA_<SECTION>_<FIELD>`, e.g. `CAPACITA_CONTENT_WORDS_PER_MINUTE`.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut CapacitaConfig) {
        if let Ok(val) = std::env::var("CAPACITA_CONTENT_DEFAULT_SECTION_TITLE") {
            config.content.default_section_title = Some(val);
        }
        if let Ok(val) = std::env::var("CAPACITA_CONTENT_UNTITLED_SECTION_PREFIX") {
            config.content.untitled_section_prefix = Some(val);
        }
        if let Ok(val) = std::env::var("CAPACITA_CONTENT_WORDS_PER_MINUTE") {
            if let Ok(v) = val.parse::<u32>() {
                config.content.words_per_minute = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAPACITA_BILLING_ANNUAL_DISCOUNT_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.billing.annual_discount_enabled = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAPACITA_BILLING_ANNUAL_DISCOUNT_PERCENT") {
            if let Ok(v) = val.parse::<u32>() {
                config.billing.annual_discount_percent = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAPACITA_BILLING_CATALOG_TTL_SECONDS") {
            if let Ok(v) = val.parse::<u64>() {
                config.billing.catalog_ttl_seconds = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAPACITA_BILLING_CURRENCY") {
            config.billing.currency = Some(val);
        }
        if let Ok(val) = std::env::var("CAPACITA_PREVIEW_SANITIZE") {
            if let Ok(v) = val.parse::<bool>() {
                config.preview.sanitize = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAPACITA_PREVIEW_LINKS_NEW_TAB") {
            if let Ok(v) = val.parse::<bool>() {
                config.preview.links_new_tab = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut CapacitaConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.annual_discount_enabled {
            config.billing.annual_discount_enabled = Some(v);
        }
        if let Some(v) = overrides.annual_discount_percent {
            config.billing.annual_discount_percent = Some(v);
        }
        if let Some(v) = overrides.catalog_ttl_seconds {
            config.billing.catalog_ttl_seconds = Some(v);
        }
        if let Some(v) = overrides.sanitize_preview {
            config.preview.sanitize = Some(v);
        }
    }
}

/// Returns the user config path: `~/.capacita/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".capacita").join("config.toml"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
