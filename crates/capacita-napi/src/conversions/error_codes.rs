//! Capacita errors → `napi::Error` with structured `[ERROR_CODE] message` strings.
//!
//! The TS client parses the code from the message prefix.

use napi::Status;

use capacita_core::errors::{CapacitaError, CapacitaErrorCode};

pub use capacita_core::errors::error_code::{
    ALREADY_INITIALIZED, CATALOG_ERROR, CONFIG_ERROR, INIT_ERROR, INVALID_ARGUMENT,
    INVALID_DOCUMENT, PLAN_NOT_FOUND, RUNTIME_NOT_INITIALIZED,
};

/// Convert any error carrying a Capacita code to a NAPI error.
pub fn to_napi_error(err: impl std::fmt::Display + CapacitaErrorCode) -> napi::Error {
    napi::Error::new(Status::GenericFailure, err.coded_message())
}

pub fn runtime_not_initialized() -> napi::Error {
    napi::Error::new(
        Status::GenericFailure,
        format!(
            "[{RUNTIME_NOT_INITIALIZED}] Capacita runtime not initialized. \
             Call capacitaInitialize() first."
        ),
    )
}

pub fn already_initialized() -> napi::Error {
    napi::Error::new(
        Status::GenericFailure,
        format!("[{ALREADY_INITIALIZED}] Capacita runtime already initialized"),
    )
}

pub fn invalid_argument(name: &str, reason: impl std::fmt::Display) -> napi::Error {
    to_napi_error(CapacitaError::InvalidArgument {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

pub fn invalid_document(reason: impl std::fmt::Display) -> napi::Error {
    to_napi_error(CapacitaError::InvalidDocument {
        reason: reason.to_string(),
    })
}
