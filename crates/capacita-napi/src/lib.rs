//! # capacita-napi
//!
//! NAPI-RS v3 bindings for the Capacita web application.
//!
//! Architecture:
//! - `runtime`: `CapacitaRuntime` singleton via `OnceLock`
//! - `conversions`: JSON ↔ Rust document conversions, error code mapping
//! - `bindings`: NAPI-exported functions (lifecycle, content, billing)
//!
//! Documents cross the boundary as plain JSON arrays of sections; the
//! JavaScript side owns document state and every editor call returns the
//! updated document.

pub mod bindings;
pub mod conversions;
pub mod runtime;
