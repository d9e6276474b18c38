//! Manifest Loading
//!
//! Reads a manifest file and decodes it into a [`Document`]. The format
//! is selected by file extension: `.json` uses the JSON decoder,
//! anything else uses the YAML decoder. Decode failures are fatal and
//! distinct from validation findings.

use crate::document::Document;
use crate::{ManifestError, ManifestResult};
use std::path::Path;

/// Load and decode a manifest document from a file
pub fn load_document(path: &Path) -> ManifestResult<Document> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::NotFound(path.to_path_buf())
        } else {
            ManifestError::IoError(e)
        }
    })?;

    if has_json_extension(path) {
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| ManifestError::JsonParseError {
                file: path.to_path_buf(),
                error: e,
            })?;
        Ok(Document::from(value))
    } else {
        let value: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| ManifestError::YamlParseError {
                file: path.to_path_buf(),
                error: e,
            })?;
        Ok(Document::from(value))
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
