//! Leaf-wrapper detection and unwrapping.

use serde_json::Value;

/// Field names that turn an object into a leaf wrapper, in priority order.
///
/// `$value` is the W3C design-tokens spelling, `value` the older one used by
/// Style Dictionary and Tokens Studio exports. When both are present the
/// earlier entry wins.
pub const VALUE_FIELDS: &[&str] = &["$value", "value"];

/// Metadata fields that are carried in token documents but never emitted.
pub const METADATA_FIELDS: &[&str] = &["$type"];

/// Returns the wrapped value when `node` is a leaf wrapper.
///
/// Returns `None` for scalars and for plain groups.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokencss::leaf_value;
///
/// let wrapper = json!({ "$type": "color", "$value": "#fff" });
/// assert_eq!(leaf_value(&wrapper), Some(&json!("#fff")));
/// assert_eq!(leaf_value(&json!("#fff")), None);
/// ```
pub fn leaf_value(node: &Value) -> Option<&Value> {
    let object = node.as_object()?;
    VALUE_FIELDS.iter().find_map(|field| object.get(*field))
}

/// Unwraps a leaf wrapper, or returns the node unchanged.
pub fn extract_leaf_value(node: &Value) -> &Value {
    leaf_value(node).unwrap_or(node)
}

/// Returns `true` if `node` is an object carrying one of [`VALUE_FIELDS`].
pub fn is_leaf_wrapper(node: &Value) -> bool {
    leaf_value(node).is_some()
}

/// Returns `true` if the last segment of a flat key is a metadata field.
pub fn is_metadata_key(key: &str) -> bool {
    key.rsplit('.')
        .next()
        .is_some_and(|segment| METADATA_FIELDS.contains(&segment))
}
