//! Writing merged documents back to disk

use crate::document::Document;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialize a document as 2-space indented JSON
///
/// Non-ASCII text is written as-is rather than escaped.
pub fn to_pretty_json(document: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Save a document to a JSON file, replacing any existing content
pub fn save_document<P: AsRef<Path>>(document: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = to_pretty_json(document)?;
    fs::write(path, &content).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "wrote document");
    Ok(())
}
