//! JSON loader for book documents

use crate::document::Document;
use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Load and validate a document from a JSON file
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    debug!(path = %path.display(), bytes = content.len(), "read document");
    parse_document(&content, path)
}

/// Parse a document from a string (useful for testing)
///
/// `source_name` is only used to label errors.
pub fn parse_document<P: AsRef<Path>>(content: &str, source_name: P) -> Result<Document> {
    let path = source_name.as_ref();
    let root: Value = serde_json::from_str(content).map_err(|e| Error::InvalidJson {
        path: path.to_path_buf(),
        source: e,
    })?;

    let Some(fields) = root.as_object() else {
        return Err(Error::InvalidDocument {
            path: path.to_path_buf(),
            message: "root is not a JSON object".to_string(),
        });
    };

    // A missing `chapters` field is an empty document; anything else must be an array
    match fields.get("chapters") {
        None | Some(Value::Array(_)) => {}
        Some(_) => {
            return Err(Error::InvalidDocument {
                path: path.to_path_buf(),
                message: "'chapters' is not an array".to_string(),
            });
        }
    }

    Ok(Document::from_value(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_simple_document() {
        let json = r#"{"chapters":[{"n":1,"paragraphs":[{"n":1,"i18n":{"en":""}}]}]}"#;
        let doc = parse_document(json, "test.json").unwrap();

        assert_eq!(doc.chapter_count(), 1);
        assert_eq!(doc.paragraph_count(), 1);
    }

    #[test]
    fn test_parse_without_chapters() {
        let doc = parse_document(r#"{"title":"empty"}"#, "test.json").unwrap();
        assert_eq!(doc.chapter_count(), 0);
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_document("{\"chapters\": [", "broken.json").unwrap_err();

        match err {
            Error::InvalidJson { path, .. } => assert_eq!(path, PathBuf::from("broken.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = parse_document("[1, 2, 3]", "list.json").unwrap_err();
        assert!(matches!(err, Error::InvalidDocument { .. }));
    }

    #[test]
    fn test_parse_rejects_non_array_chapters() {
        let err = parse_document(r#"{"chapters":{"n":1}}"#, "test.json").unwrap_err();
        assert!(err.to_string().contains("'chapters' is not an array"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"{"chapters":[{"n":1,"title":"Über"}]}"#).unwrap();

        let doc = load_document(&path).unwrap();
        let chapter = doc.chapters().next().unwrap();
        assert_eq!(chapter.title(), Some("Über"));
    }
}
