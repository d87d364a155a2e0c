//! Dotted-path lookup into token trees.

use serde_json::Value;

/// Separator between the segments of a flat key or reference path.
pub const PATH_SEPARATOR: char = '.';

/// Follows a dotted path through a token tree.
///
/// Each segment is looked up in the current object (or, for arrays, parsed
/// as an index). Any missing segment, any scalar met before the last segment,
/// and a `null` target all count as "not found".
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokencss::lookup;
///
/// let tokens = json!({ "color": { "brand": { "$value": "#0af" } } });
/// assert_eq!(lookup(&tokens, "color.brand"), Some(&json!({ "$value": "#0af" })));
/// assert_eq!(lookup(&tokens, "color.missing"), None);
/// ```
pub fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    path.split(PATH_SEPARATOR)
        .try_fold(tree, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
        .filter(|found| !found.is_null())
}

/// Joins a prefix and a key into a flat key.
pub(crate) fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{PATH_SEPARATOR}{key}")
    }
}
