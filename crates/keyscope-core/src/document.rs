// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading and saving JSON documents.
//!
//! Documents are read whole and written whole; no handle outlives the call.
//! Saved documents are pretty-printed with a two-space indent, keep non-ASCII
//! text unescaped, and keep object keys in their original order.

use crate::error::{KeyscopeError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a JSON document.
///
/// # Errors
///
/// Returns [`KeyscopeError::Read`] if the file is missing or unreadable and
/// [`KeyscopeError::Parse`] if its contents are not valid JSON.
pub fn load_document(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|source| KeyscopeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&text).map_err(|source| KeyscopeError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document");
    Ok(value)
}

/// Serialize a document as pretty JSON and write it to `path`.
///
/// # Errors
///
/// Returns [`KeyscopeError::Serialize`] if the value cannot be serialized and
/// [`KeyscopeError::Write`] if the file cannot be written.
pub fn save_document(path: &Path, value: &Value) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    fs::write(path, text).map_err(|source| KeyscopeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "saved document");
    Ok(())
}
