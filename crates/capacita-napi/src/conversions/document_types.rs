//! TrainingDocument ↔ serde_json::Value conversions.
//!
//! The document model derives Serialize/Deserialize in the shape the web
//! editor uses, so these are thin serde_json wrappers with coded errors.

use serde::Serialize;

use capacita_content::{BlockPatch, BlockType, Direction, TrainingDocument};

use super::error_codes;

pub fn document_from_json(value: serde_json::Value) -> napi::Result<TrainingDocument> {
    serde_json::from_value(value).map_err(error_codes::invalid_document)
}

pub fn document_to_json(document: &TrainingDocument) -> napi::Result<serde_json::Value> {
    to_json(document)
}

pub fn patch_from_json(value: serde_json::Value) -> napi::Result<BlockPatch> {
    serde_json::from_value(value).map_err(|e| error_codes::invalid_argument("patch", e))
}

pub fn block_type_from_string(name: &str) -> napi::Result<BlockType> {
    BlockType::parse(name).ok_or_else(|| {
        error_codes::invalid_argument("blockType", format!("unknown block type '{name}'"))
    })
}

pub fn direction_from_string(name: &str) -> napi::Result<Direction> {
    Direction::parse(name).ok_or_else(|| {
        error_codes::invalid_argument("direction", format!("expected 'up' or 'down', got '{name}'"))
    })
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> napi::Result<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| napi::Error::from_reason(format!("Failed to serialize: {e}")))
}
