//! Whole-file JSON reading and writing.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ConvertError, Result};

/// Read and deserialize one JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConvertError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Render `value` as two-space indented JSON with a trailing newline.
///
/// Non-ASCII text is written as-is, never `\u` escaped.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

/// Write `value` to `path`, creating missing parent directories.
///
/// The document is rendered in memory first so a serialization failure
/// never leaves a truncated file behind.
pub fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let text = to_pretty_json(value).map_err(|source| ConvertError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source: std::io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, text).map_err(write_err)
}
