//! Content bindings: text conversion, editor operations, stats, preview.
//!
//! Editor calls take the current document and return `{ document, ... }`
//! with the updated document; unknown ids come back unchanged with a
//! `false`/`"notFound"` flag rather than as errors.

use napi_derive::napi;
use serde::{Deserialize, Serialize};
use serde_json::json;

use capacita_content::{
    plain_text, serialize_document, BlockId, DocumentStats, InsertPosition, SectionId,
};

use crate::conversions::document_types::{
    block_type_from_string, direction_from_string, document_from_json, document_to_json,
    patch_from_json, to_json,
};
use crate::runtime;

/// Document statistics returned to TypeScript.
#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsDocumentStats {
    pub sections: u32,
    pub blocks: u32,
    pub words: u32,
    pub media: u32,
    pub reading_minutes: u32,
}

impl From<DocumentStats> for JsDocumentStats {
    fn from(stats: DocumentStats) -> Self {
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Self {
            sections: count(stats.sections),
            blocks: count(stats.blocks),
            words: count(stats.words),
            media: count(stats.media),
            reading_minutes: stats.reading_minutes,
        }
    }
}

/// Parse stored flattened text into a document. Never fails on content.
#[napi]
pub fn capacita_parse_text(text: String) -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    document_to_json(&rt.converter.parse(&text))
}

/// Flatten a document to the stored text form.
#[napi]
pub fn capacita_serialize_document(document: serde_json::Value) -> napi::Result<String> {
    let document = document_from_json(document)?;
    Ok(serialize_document(&document))
}

#[napi]
pub fn capacita_document_stats(document: serde_json::Value) -> napi::Result<JsDocumentStats> {
    let rt = runtime::get()?;
    let document = document_from_json(document)?;
    Ok(DocumentStats::from_config(&document, &rt.config.content).into())
}

/// Titles and block text without markers, for full-text search.
#[napi]
pub fn capacita_plain_text(document: serde_json::Value) -> napi::Result<String> {
    let document = document_from_json(document)?;
    Ok(plain_text(&document))
}

/// Insert an empty block of `block_type` after `after_block_id` (or at the
/// end of the section). `blockId` is null when the section does not exist.
#[napi]
pub fn capacita_insert_block(
    document: serde_json::Value,
    section_id: String,
    block_type: String,
    after_block_id: Option<String>,
) -> napi::Result<serde_json::Value> {
    let mut document = document_from_json(document)?;
    let ty = block_type_from_string(&block_type)?;
    let position = InsertPosition::after(after_block_id.map(BlockId::from));
    let block_id = document.insert_block(&SectionId::from(section_id), position, ty);
    Ok(json!({
        "document": document_to_json(&document)?,
        "blockId": block_id,
    }))
}

#[napi]
pub fn capacita_update_block(
    document: serde_json::Value,
    block_id: String,
    patch: serde_json::Value,
) -> napi::Result<serde_json::Value> {
    let mut document = document_from_json(document)?;
    let patch = patch_from_json(patch)?;
    let updated = document.update_block(&BlockId::from(block_id), &patch);
    Ok(json!({
        "document": document_to_json(&document)?,
        "updated": updated,
    }))
}

#[napi]
pub fn capacita_change_block_type(
    document: serde_json::Value,
    block_id: String,
    block_type: String,
) -> napi::Result<serde_json::Value> {
    let mut document = document_from_json(document)?;
    let ty = block_type_from_string(&block_type)?;
    let changed = document.change_block_type(&BlockId::from(block_id), ty);
    Ok(json!({
        "document": document_to_json(&document)?,
        "changed": changed,
    }))
}

/// `outcome` is `"removed"`, `"cleared"` (sole block of its section) or
/// `"notFound"`.
#[napi]
pub fn capacita_delete_block(
    document: serde_json::Value,
    block_id: String,
) -> napi::Result<serde_json::Value> {
    let mut document = document_from_json(document)?;
    let outcome = document.delete_block(&BlockId::from(block_id));
    Ok(json!({
        "document": document_to_json(&document)?,
        "outcome": to_json(&outcome)?,
    }))
}

#[napi]
pub fn capacita_move_block(
    document: serde_json::Value,
    block_id: String,
    direction: String,
) -> napi::Result<serde_json::Value> {
    let mut document = document_from_json(document)?;
    let direction = direction_from_string(&direction)?;
    let moved = document.move_block(&BlockId::from(block_id), direction);
    Ok(json!({
        "document": document_to_json(&document)?,
        "moved": moved,
    }))
}

#[napi]
pub fn capacita_move_section(
    document: serde_json::Value,
    section_id: String,
    direction: String,
) -> napi::Result<serde_json::Value> {
    let mut document = document_from_json(document)?;
    let direction = direction_from_string(&direction)?;
    let moved = document.move_section(&SectionId::from(section_id), direction);
    Ok(json!({
        "document": document_to_json(&document)?,
        "moved": moved,
    }))
}

/// Render markdown to preview HTML, sanitized unless disabled in config.
#[napi]
pub fn capacita_render_markdown(markdown: String) -> napi::Result<String> {
    let rt = runtime::get()?;
    Ok(rt.renderer.render_preview(&markdown))
}
