//! Error handling for Capacita.
//! One error enum per subsystem, `thiserror` only.

pub mod capacita_error;
pub mod catalog_error;
pub mod config_error;
pub mod error_code;

pub use capacita_error::{CapacitaError, CapacitaResult};
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::CapacitaErrorCode;
