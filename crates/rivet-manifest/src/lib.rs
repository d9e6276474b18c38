//! Permission Manifest Validation
//!
//! Provides loading and structural validation for permission manifests:
//! - Decoding manifest files (JSON or YAML, selected by extension)
//! - A generic tagged document tree decoders produce
//! - The manifest validator, which reports violations as an ordered
//!   list of human-readable error strings
//!
//! # Example
//!
//! ```no_run
//! use rivet_manifest::{load_document, validate};
//! use std::path::Path;
//!
//! let doc = load_document(Path::new("manifest.yaml")).unwrap();
//! let errors = validate(&doc);
//! assert!(errors.is_empty());
//! ```

pub mod document;
pub mod loader;
pub mod validator;

use std::path::PathBuf;
use thiserror::Error;

/// Manifest loading errors
///
/// Validation findings are not errors: the validator is infallible over
/// any decoded document and reports violations as plain strings.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Manifest file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read manifest file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON in {file}: {error}")]
    JsonParseError {
        file: PathBuf,
        error: serde_json::Error,
    },

    #[error("Invalid YAML in {file}: {error}")]
    YamlParseError {
        file: PathBuf,
        error: serde_yaml::Error,
    },
}

/// Result type for manifest loading operations
pub type ManifestResult<T> = Result<T, ManifestError>;

// Re-export main types
pub use document::Document;
pub use loader::load_document;
pub use validator::validate;
