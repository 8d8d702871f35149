//! Rust ↔ JS conversions for the binding layer.

pub mod document_types;
pub mod error_codes;
