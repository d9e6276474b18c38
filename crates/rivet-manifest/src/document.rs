//! Document Tree
//!
//! Generic tagged value for decoded manifest documents. Both decoders
//! (serde_json, serde_yaml) convert into this one tree so the validator
//! is independent of the input format.
//!
//! Design notes:
//! - Explicit extraction: `.as_str()`, `.as_mapping()` return `None`
//!   for the wrong kind instead of panicking, so "is this a mapping?"
//!   checks in the validator are plain variant-tag tests.
//! - `Int` and `Bool` are distinct variants. A boolean never passes an
//!   integer check (this is the rule for network ports).
//! - Mapping keys are strings; YAML mappings with non-string keys lose
//!   those entries during conversion.

use std::collections::HashMap;
use std::fmt;

/// Decoded document value
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Null / absent value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// String value
    String(String),
    /// Sequence of values
    Sequence(Vec<Document>),
    /// Mapping with string keys
    Mapping(HashMap<String, Document>),
}

impl Document {
    /// Create a new string value
    pub fn string(s: impl Into<String>) -> Self {
        Document::String(s.into())
    }

    /// Create a new sequence value
    pub fn sequence(values: Vec<Document>) -> Self {
        Document::Sequence(values)
    }

    /// Create a new mapping value
    pub fn mapping(map: HashMap<String, Document>) -> Self {
        Document::Mapping(map)
    }

    /// Get the kind name of this value
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Null => "null",
            Document::Bool(_) => "bool",
            Document::Int(_) => "int",
            Document::Float(_) => "float",
            Document::String(_) => "string",
            Document::Sequence(_) => "sequence",
            Document::Mapping(_) => "mapping",
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }

    /// Check if this value is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, Document::Int(_))
    }

    /// Check if this value is a sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, Document::Sequence(_))
    }

    /// Check if this value is a mapping
    pub fn is_mapping(&self) -> bool {
        matches!(self, Document::Mapping(_))
    }

    /// Extract as boolean, returns None if not a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Document::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract as integer, returns None if not an int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Document::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract as string slice, returns None if not a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract as sequence reference, returns None if not a sequence
    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(values) => Some(values),
            _ => None,
        }
    }

    /// Extract as mapping reference, returns None if not a mapping
    pub fn as_mapping(&self) -> Option<&HashMap<String, Document>> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key, returns None if the key is absent or this value
    /// is not a mapping
    pub fn get(&self, key: &str) -> Option<&Document> {
        match self {
            Document::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Check whether a mapping contains a key
    ///
    /// Non-mappings contain no keys.
    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            Document::Mapping(map) => map.contains_key(key),
            _ => false,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Null => write!(f, "null"),
            Document::Bool(b) => write!(f, "{}", b),
            Document::Int(n) => write!(f, "{}", n),
            Document::Float(n) => write!(f, "{}", n),
            Document::String(s) => write!(f, "\"{}\"", s),
            Document::Sequence(values) => {
                write!(f, "[")?;
                for (i, val) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            Document::Mapping(map) => {
                write!(f, "{{")?;
                let mut first = true;
                for (key, val) in map {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "\"{}\": {}", key, val)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Document::Null,
            serde_json::Value::Bool(b) => Document::Bool(b),
            serde_json::Value::Number(n) => number_from_parts(n.as_i64(), n.as_f64()),
            serde_json::Value::String(s) => Document::String(s),
            serde_json::Value::Array(values) => {
                Document::Sequence(values.into_iter().map(Document::from).collect())
            }
            serde_json::Value::Object(map) => Document::Mapping(
                map.into_iter().map(|(k, v)| (k, Document::from(v))).collect(),
            ),
        }
    }
}

impl From<serde_yaml::Value> for Document {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Document::Null,
            serde_yaml::Value::Bool(b) => Document::Bool(b),
            serde_yaml::Value::Number(n) => number_from_parts(n.as_i64(), n.as_f64()),
            serde_yaml::Value::String(s) => Document::String(s),
            serde_yaml::Value::Sequence(values) => {
                Document::Sequence(values.into_iter().map(Document::from).collect())
            }
            serde_yaml::Value::Mapping(map) => Document::Mapping(
                map.into_iter()
                    .filter_map(|(k, v)| match k {
                        serde_yaml::Value::String(key) => Some((key, Document::from(v))),
                        _ => None,
                    })
                    .collect(),
            ),
            // !tag annotations carry no structure of their own
            serde_yaml::Value::Tagged(tagged) => Document::from(tagged.value),
        }
    }
}

/// Integers stay integers; everything else (including u64 values past
/// i64::MAX) falls back to float.
fn number_from_parts(as_int: Option<i64>, as_float: Option<f64>) -> Document {
    match (as_int, as_float) {
        (Some(n), _) => Document::Int(n),
        (None, Some(n)) => Document::Float(n),
        (None, None) => Document::Null,
    }
}
