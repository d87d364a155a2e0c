//! Flattening of nested token trees into dotted keys.

use serde_json::{Map, Value};

use super::leaf::{is_metadata_key, leaf_value};
use super::path::join;

/// A single-level, insertion-ordered map from flat key to raw value.
///
/// Values are whatever the flattener found at the leaf: wrapped values are
/// already unwrapped, but references such as `"{color.brand}"` are left for
/// the resolver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatTokens {
    entries: Map<String, Value>,
}

impl FlatTokens {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the one previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Returns the value stored under a flat key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if the flat key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in flattening order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Iterates over flat keys in flattening order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Converts the map into a JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }
}

impl IntoIterator for FlatTokens {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Value)> for FlatTokens {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Flattens a token tree into dotted keys.
///
/// Objects carrying a value field (see [`VALUE_FIELDS`](super::VALUE_FIELDS))
/// are treated as leaves and unwrapped; the flattener does not descend into
/// them. Every other object is a group. Keys whose last segment is one of
/// [`METADATA_FIELDS`](super::METADATA_FIELDS) are omitted. A scalar root has
/// no keys and yields an empty map.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokencss::flatten;
///
/// let flat = flatten(&json!({ "a": { "b": { "$value": "red" } } }));
/// assert_eq!(flat.get("a.b"), Some(&json!("red")));
/// assert_eq!(flat.len(), 1);
/// ```
pub fn flatten(tree: &Value) -> FlatTokens {
    let mut flat = FlatTokens::new();
    if let Value::Object(root) = tree {
        flatten_into(root, "", &mut flat);
    }
    flat
}

fn flatten_into(group: &Map<String, Value>, prefix: &str, flat: &mut FlatTokens) {
    for (key, value) in group {
        let path = join(prefix, key);
        if is_metadata_key(&path) {
            continue;
        }
        match value {
            Value::Object(children) => match leaf_value(value) {
                Some(leaf) => {
                    flat.insert(path, leaf.clone());
                }
                None => flatten_into(children, &path, flat),
            },
            _ => {
                flat.insert(path, value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_wrapped_leaf() {
        let flat = flatten(&json!({ "a": { "b": { "$value": "red" } } }));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat.get("a.b"), Some(&json!("red")));
    }

    #[test]
    fn test_flatten_bare_scalars() {
        let flat = flatten(&json!({
            "space": { "sm": "4px", "md": "8px" },
            "radius": 2
        }));
        let keys: Vec<&str> = flat.keys().collect();
        assert_eq!(keys, vec!["space.sm", "space.md", "radius"]);
        assert_eq!(flat.get("radius"), Some(&json!(2)));
    }

    #[test]
    fn test_flatten_preserves_document_order() {
        let tree: Value = serde_json::from_str(r#"{ "z": 1, "a": 2, "m": { "y": 3, "b": 4 } }"#).unwrap();
        let flat = flatten(&tree);
        let keys: Vec<&str> = flat.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m.y", "m.b"]);
    }

    #[test]
    fn test_flatten_stops_at_wrapper() {
        let flat = flatten(&json!({
            "color": {
                "$value": "#000",
                "$type": "color",
                "nested": { "$value": "#fff" }
            }
        }));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat.get("color"), Some(&json!("#000")));
        assert!(!flat.contains_key("color.nested"));
    }

    #[test]
    fn test_flatten_secondary_value_field() {
        let flat = flatten(&json!({ "size": { "base": { "value": 16, "type": "dimension" } } }));
        assert_eq!(flat.get("size.base"), Some(&json!(16)));
    }

    #[test]
    fn test_flatten_drops_group_metadata() {
        let flat = flatten(&json!({
            "$type": "color",
            "color": { "$type": "color", "bg": { "$value": "#111" } }
        }));
        let keys: Vec<&str> = flat.keys().collect();
        assert_eq!(keys, vec!["color.bg"]);
        assert!(!flat.contains_key("color.$type"));
        assert_eq!(flat.get("color.bg"), Some(&json!("#111")));
    }

    #[test]
    fn test_flatten_scalar_root_is_empty() {
        assert!(flatten(&json!("oops")).is_empty());
        assert!(flatten(&Value::Null).is_empty());
        assert!(flatten(&json!({})).is_empty());
    }

    #[test]
    fn test_flatten_empty_group_yields_nothing() {
        let flat = flatten(&json!({ "empty": {}, "x": "1" }));
        assert_eq!(flat.len(), 1);
    }

    #[test]
    fn test_flat_tokens_collect_and_into_value() {
        let flat: FlatTokens = vec![("a.b".to_string(), json!("1"))].into_iter().collect();
        assert_eq!(flat.into_value(), json!({ "a.b": "1" }));
    }
}
