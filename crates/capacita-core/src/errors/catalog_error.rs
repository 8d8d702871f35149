//! Plan catalog errors.

use super::error_code::{self, CapacitaErrorCode};

/// Errors raised by plan sources and the plan catalog.
///
/// `Clone` because the catalog cache shares loader failures between callers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Plan source {source_name} unavailable: {message}")]
    SourceUnavailable { source_name: String, message: String },

    #[error("Invalid plan data: {message}")]
    InvalidData { message: String },

    #[error("Plan not found: {id}")]
    PlanNotFound { id: String },
}

impl CapacitaErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PlanNotFound { .. } => error_code::PLAN_NOT_FOUND,
            _ => error_code::CATALOG_ERROR,
        }
    }
}
