//! Top-level error aggregating subsystem errors.

use super::error_code::{self, CapacitaErrorCode};
use super::{CatalogError, ConfigError};

#[derive(Debug, thiserror::Error)]
pub enum CapacitaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid document: {reason}")]
    InvalidDocument { reason: String },

    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },
}

impl CapacitaErrorCode for CapacitaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::InvalidDocument { .. } => error_code::INVALID_DOCUMENT,
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
        }
    }
}

pub type CapacitaResult<T> = Result<T, CapacitaError>;
