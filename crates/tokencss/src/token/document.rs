//! Parsing token documents from JSON or YAML text.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

use super::flatten::{flatten, FlatTokens};
use super::path::lookup;

/// Source format of a token document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Maps a file extension (without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }

    /// Guesses the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentFormat::Json => "JSON",
            DocumentFormat::Yaml => "YAML",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token document cannot be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The text is not valid in the given format.
    #[error("invalid {format} token document: {message}")]
    Parse {
        format: DocumentFormat,
        message: String,
    },
    /// The document parsed, but its root is not an object.
    #[error("token document root must be an object, found {found}")]
    NotAnObject { found: &'static str },
}

/// A parsed token document whose root is always an object.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDocument {
    root: Value,
}

impl TokenDocument {
    /// Creates a document with no tokens.
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Wraps an already-deserialized tree.
    ///
    /// `null` (an empty YAML file, for instance) becomes an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NotAnObject`] for any other non-object root.
    pub fn from_value(root: Value) -> Result<Self, DocumentError> {
        match root {
            Value::Object(_) => Ok(Self { root }),
            Value::Null => Ok(Self::empty()),
            other => Err(DocumentError::NotAnObject {
                found: value_kind(&other),
            }),
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self, DocumentError> {
        Self::parse(source, DocumentFormat::Json)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, DocumentError> {
        Self::parse(source, DocumentFormat::Yaml)
    }

    /// Parses text in the given format.
    pub fn parse(source: &str, format: DocumentFormat) -> Result<Self, DocumentError> {
        if format == DocumentFormat::Yaml && source.trim().is_empty() {
            return Ok(Self::empty());
        }
        let root = match format {
            DocumentFormat::Json => serde_json::from_str::<Value>(source).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => serde_yaml::from_str::<Value>(source).map_err(|e| e.to_string()),
        }
        .map_err(|message| DocumentError::Parse { format, message })?;
        Self::from_value(root)
    }

    /// Returns the root tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Looks up a dotted path in the document.
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.root, path)
    }

    /// Flattens the document into dotted keys.
    pub fn flatten(&self) -> FlatTokens {
        flatten(&self.root)
    }
}

impl Default for TokenDocument {
    fn default() -> Self {
        Self::empty()
    }
}

/// Human-readable name of a JSON value's kind.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
