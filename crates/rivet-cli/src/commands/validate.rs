//! Validate command - check a permission manifest without applying it

use anyhow::Result;
use rivet_manifest::{load_document, validate};
use std::path::Path;

/// Validate a permission manifest file
///
/// Prints `VALID`, or one `INVALID: ` line per finding to stderr (or a
/// JSON report with `json`). Returns whether the manifest was valid;
/// decode failures are fatal and bubble up to the process boundary.
pub fn run(file_path: &str, json: bool) -> Result<bool> {
    let doc = load_document(Path::new(file_path))?;
    let errors = validate(&doc);
    let valid = errors.is_empty();

    if json {
        let report = serde_json::json!({
            "valid": valid,
            "errors": errors,
        });
        println!("{report}");
        return Ok(valid);
    }

    if valid {
        println!("VALID");
    } else {
        for error in &errors {
            eprintln!("INVALID: {error}");
        }
    }

    Ok(valid)
}
