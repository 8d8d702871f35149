//! Stable error codes shared with the TypeScript layer.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const PLAN_NOT_FOUND: &str = "PLAN_NOT_FOUND";
pub const INVALID_DOCUMENT: &str = "INVALID_DOCUMENT";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const INIT_ERROR: &str = "INIT_ERROR";
pub const ALREADY_INITIALIZED: &str = "ALREADY_INITIALIZED";
pub const RUNTIME_NOT_INITIALIZED: &str = "RUNTIME_NOT_INITIALIZED";

/// Maps an error to its stable code.
pub trait CapacitaErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message`, the format used at the NAPI boundary.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}
