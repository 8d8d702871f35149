//! All NAPI-exported functions, grouped by domain.

pub mod billing;
pub mod content;
pub mod lifecycle;
