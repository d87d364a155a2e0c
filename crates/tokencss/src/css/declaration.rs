//! Custom-property declarations.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::token::PATH_SEPARATOR;

/// Suffix left behind when a `$value` field ends up in a flat key.
const VALUE_FIELD_SUFFIX: &str = "-$value";

/// Turns a flat key into a custom-property name.
///
/// Dots become dashes, a trailing `-$value` is dropped and the result is
/// serialized as a CSS identifier, so characters that are not valid in an
/// identifier are escaped.
///
/// # Example
///
/// ```rust
/// use tokencss::custom_property_name;
///
/// assert_eq!(custom_property_name("color.brand.primary"), "--color-brand-primary");
/// assert_eq!(custom_property_name("space.sm.$value"), "--space-sm");
/// assert_eq!(custom_property_name("size.1/2"), "--size-1\\/2");
/// ```
pub fn custom_property_name(key: &str) -> String {
    let dashed = key.replace(PATH_SEPARATOR, "-");
    let trimmed = dashed.strip_suffix(VALUE_FIELD_SUFFIX).unwrap_or(&dashed);
    let mut name = String::with_capacity(trimmed.len() + 2);
    cssparser::serialize_identifier(&format!("--{trimmed}"), &mut name)
        .expect("writing to a String cannot fail");
    name
}

/// Formats a resolved value for the right-hand side of a declaration.
///
/// Strings are written verbatim, numbers and booleans in their JSON form and
/// `null` as nothing. Arrays and objects fall back to compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

/// A single `--name: value;` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// The flat key the declaration was generated from.
    pub key: String,
    /// The custom-property name, including the leading `--`.
    pub name: String,
    pub value: String,
}

impl Declaration {
    /// Creates a declaration for a flat key.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            name: custom_property_name(&key),
            key,
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}
