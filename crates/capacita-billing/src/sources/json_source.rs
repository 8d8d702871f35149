use std::path::{Path, PathBuf};

use capacita_core::errors::CatalogError;

use super::PlanSource;
use crate::plan::Plan;

/// Plans read from a JSON array on disk, re-read on every fetch.
#[derive(Debug, Clone)]
pub struct JsonPlanSource {
    path: PathBuf,
}

impl JsonPlanSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanSource for JsonPlanSource {
    fn name(&self) -> &str {
        "json"
    }

    fn fetch_plans(&self) -> Result<Vec<Plan>, CatalogError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            CatalogError::SourceUnavailable {
                source_name: format!("json:{}", self.path.display()),
                message: e.to_string(),
            }
        })?;
        serde_json::from_str(&raw).map_err(|e| CatalogError::InvalidData {
            message: format!("{}: {e}", self.path.display()),
        })
    }
}
