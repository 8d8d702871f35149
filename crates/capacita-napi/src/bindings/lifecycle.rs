//! Lifecycle bindings: initialize, status, configuration.

use napi_derive::napi;
use std::path::PathBuf;

use crate::conversions::document_types::to_json;
use crate::runtime::{self, RuntimeOptions};

/// Initialize the Capacita runtime.
///
/// Must be called before the config-dependent content functions and the
/// plan catalog functions.
/// `config_toml`: optional TOML configuration string.
/// `plans_path`: optional JSON plan catalog (built-in plans when null).
/// `project_root`: optional directory with `capacita.toml`, used when no
/// TOML string is given.
#[napi]
pub fn capacita_initialize(
    config_toml: Option<String>,
    plans_path: Option<String>,
    project_root: Option<String>,
) -> napi::Result<()> {
    runtime::initialize(RuntimeOptions {
        config_toml,
        project_root: project_root.map(PathBuf::from),
        plans_path: plans_path.map(PathBuf::from),
    })
}

#[napi]
pub fn capacita_is_initialized() -> bool {
    runtime::is_initialized()
}

/// The resolved configuration as JSON.
#[napi]
pub fn capacita_config() -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    to_json(&rt.config)
}
