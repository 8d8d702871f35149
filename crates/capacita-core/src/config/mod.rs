//! Configuration system for Capacita.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod billing_config;
pub mod capacita_config;
pub mod content_config;
pub mod preview_config;

pub use billing_config::BillingConfig;
pub use capacita_config::{CapacitaConfig, ConfigOverrides};
pub use content_config::ContentConfig;
pub use preview_config::PreviewConfig;
