//! Jobs report input and its reshaping into a bulk import payload.
//!
//! A report is a JSON object with up to three section arrays. Listings are
//! kept as open JSON maps so every field reaches the endpoint unchanged.

mod payload;
mod section;

use std::path::Path;

use serde_json::Value;

use crate::error::ImportError;

pub use payload::{BulkPayload, ImportRecord, build_payload};
pub use section::Section;

/// Fail with `FileNotFound` unless `path` exists.
pub fn ensure_exists(path: &Path) -> Result<(), ImportError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ImportError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Read and parse a whole jobs report.
///
/// The existence check comes first so a missing file is reported as such
/// rather than as an I/O error.
pub fn load_document(path: &Path) -> Result<Value, ImportError> {
    ensure_exists(path)?;

    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ImportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
