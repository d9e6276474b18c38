//! Manifest Validator
//!
//! Structural validation for permission manifests. A manifest is a
//! mapping with required top-level fields `schema`, `name`, `version`,
//! and `permissions`; the permissions mapping holds up to four
//! list-valued grant sections (`filesystem`, `network`, `secrets`,
//! `processes`).
//!
//! Violations are collected as human-readable strings in detection
//! order. The order and the two short-circuits (missing top-level
//! fields, non-mapping permissions) are part of the observable
//! contract: permission-shape findings are suppressed until the
//! envelope itself is well-formed.

use crate::document::Document;
use std::collections::HashMap;

/// Required top-level manifest fields, in reporting order
const REQUIRED_FIELDS: [&str; 4] = ["schema", "name", "version", "permissions"];

/// Grant sections, in reporting order
const SECTIONS: [&str; 4] = ["filesystem", "network", "secrets", "processes"];

/// Entry fields of a decoded grant
type Fields = HashMap<String, Document>;

/// Validate a decoded manifest document
///
/// Returns one error string per violation, in detection order. An empty
/// list means the manifest is valid. Never fails: any document shape,
/// including a scalar or empty document, produces findings rather than
/// an error.
pub fn validate(doc: &Document) -> Vec<String> {
    let mut errors = Vec::new();

    // A non-mapping document has every required field absent.
    for field in REQUIRED_FIELDS {
        if !doc.contains_key(field) {
            errors.push(format!("missing field: {field}"));
        }
    }
    if !errors.is_empty() {
        return errors;
    }

    let perms = match doc.get("permissions").and_then(Document::as_mapping) {
        Some(map) => map,
        None => {
            errors.push("permissions must be a mapping".to_string());
            return errors;
        }
    };

    validate_section(perms, "filesystem", check_filesystem_entry, &mut errors);
    validate_section(perms, "network", check_network_entry, &mut errors);
    validate_section(perms, "secrets", check_named_entry, &mut errors);
    validate_section(perms, "processes", check_named_entry, &mut errors);

    // A manifest that grants nothing is rejected. A section counts as
    // declared when its value is present, non-null, and not an empty
    // list; malformed section values already carry their own error.
    let declares_grants = SECTIONS.iter().any(|section| match perms.get(*section) {
        None | Some(Document::Null) => false,
        Some(Document::Sequence(entries)) => !entries.is_empty(),
        Some(_) => true,
    });
    if !declares_grants {
        errors.push(
            "permissions must declare at least one of filesystem/network/secrets/processes"
                .to_string(),
        );
    }

    errors
}

/// Validate one grant section: the section value must be a list, and
/// each entry a mapping. Field rules are applied per entry by
/// `check_entry`.
fn validate_section(
    perms: &Fields,
    section: &str,
    check_entry: fn(&str, usize, &Fields, &mut Vec<String>),
    errors: &mut Vec<String>,
) {
    let value = match perms.get(section) {
        Some(value) => value,
        None => return, // absent section defaults to an empty list
    };

    let entries = match value.as_sequence() {
        Some(entries) => entries,
        None => {
            errors.push(format!("permissions.{section} must be a list"));
            return;
        }
    };

    for (i, entry) in entries.iter().enumerate() {
        match entry.as_mapping() {
            Some(fields) => check_entry(section, i, fields, errors),
            None => errors.push(format!("{section}[{i}] must be a mapping")),
        }
    }
}

/// Filesystem grant: `path` must be present, `mode` must be exactly
/// "read" or "read-write" (absent or non-string modes fail the same
/// check).
fn check_filesystem_entry(section: &str, i: usize, entry: &Fields, errors: &mut Vec<String>) {
    if !entry.contains_key("path") {
        errors.push(format!("{section}[{i}] missing path"));
    }
    let mode = entry.get("mode").and_then(Document::as_str);
    if !matches!(mode, Some("read") | Some("read-write")) {
        errors.push(format!("{section}[{i}] mode must be read|read-write"));
    }
}

/// Network grant: `host` must be present (its type is not constrained);
/// `ports` must be a list of integers. Booleans are not integers, and
/// an empty ports list is valid.
fn check_network_entry(section: &str, i: usize, entry: &Fields, errors: &mut Vec<String>) {
    if !entry.contains_key("host") {
        errors.push(format!("{section}[{i}] missing host"));
    }
    let ports_ok = entry
        .get("ports")
        .and_then(Document::as_sequence)
        .map(|ports| ports.iter().all(Document::is_int))
        .unwrap_or(false);
    if !ports_ok {
        errors.push(format!("{section}[{i}] ports must be a list of ints"));
    }
}

/// Secret and process grants: `name` must be present.
fn check_named_entry(section: &str, i: usize, entry: &Fields, errors: &mut Vec<String>) {
    if !entry.contains_key("name") {
        errors.push(format!("{section}[{i}] missing name"));
    }
}
