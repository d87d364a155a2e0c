//! Recursive `{path}` substitution with cycle detection.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use tracing::debug;

use super::namespaces::Namespaces;
use super::warning::ResolveWarning;
use crate::token::{extract_leaf_value, value_kind};

/// Matches `{path}` placeholders; no nesting, shortest match.
static REFERENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^}]+)\}").expect("reference pattern is a valid regex"));

/// The result of resolving one value.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The value with every resolvable placeholder substituted.
    pub value: Value,
    /// Diagnostics for placeholders that were left in place.
    pub warnings: Vec<ResolveWarning>,
}

impl Resolution {
    fn unchanged(value: &Value) -> Self {
        Self {
            value: value.clone(),
            warnings: Vec::new(),
        }
    }

    /// Returns the resolved value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    /// Returns `true` if resolution produced no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Resolves `{path}` references against a set of [`Namespaces`].
///
/// Each placeholder is expanded with its own copy of the reference chain, so
/// a path is only reported as circular when it is already being expanded by
/// an enclosing placeholder. Two siblings naming the same path in one string
/// both resolve.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokencss::{Namespaces, Resolver};
///
/// let tokens = json!({
///     "color": { "blue": "#00f", "brand": { "$value": "{color.blue}" } }
/// });
/// let globals = json!({ "global": { "border": { "width": "1px" } } });
/// let resolver = Resolver::new(Namespaces::new(&tokens, &globals));
///
/// let resolved = resolver.resolve_str("{border.width} solid {color.brand}");
/// assert_eq!(resolved.as_str(), Some("1px solid #00f"));
/// assert!(resolved.is_clean());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    namespaces: Namespaces<'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(namespaces: Namespaces<'a>) -> Self {
        Self { namespaces }
    }

    pub fn namespaces(&self) -> &Namespaces<'a> {
        &self.namespaces
    }

    /// Resolves a value. Non-string values are returned unchanged.
    pub fn resolve(&self, value: &Value) -> Resolution {
        self.resolve_with_chain(value, &[])
    }

    /// Resolves a string value.
    pub fn resolve_str(&self, value: &str) -> Resolution {
        let mut warnings = Vec::new();
        let resolved = self.expand(value, &[], &mut warnings);
        Resolution {
            value: Value::String(resolved),
            warnings,
        }
    }

    /// Resolves a value as if `chain` were already being expanded.
    ///
    /// Any placeholder naming a path in `chain` is reported as circular.
    pub fn resolve_with_chain(&self, value: &Value, chain: &[String]) -> Resolution {
        match value {
            Value::String(text) => {
                let mut warnings = Vec::new();
                let resolved = self.expand(text, chain, &mut warnings);
                Resolution {
                    value: Value::String(resolved),
                    warnings,
                }
            }
            other => Resolution::unchanged(other),
        }
    }

    fn expand(&self, text: &str, chain: &[String], warnings: &mut Vec<ResolveWarning>) -> String {
        if !text.contains('{') {
            return text.to_string();
        }
        REFERENCE_PATTERN
            .replace_all(text, |caps: &Captures<'_>| {
                self.substitute(&caps[1], &caps[0], chain, warnings)
            })
            .into_owned()
    }

    /// Produces the replacement text for one placeholder.
    fn substitute(
        &self,
        path: &str,
        placeholder: &str,
        chain: &[String],
        warnings: &mut Vec<ResolveWarning>,
    ) -> String {
        if chain.iter().any(|seen| seen == path) {
            debug!(path, chain = %chain.join(" -> "), "circular token reference");
            warnings.push(ResolveWarning::CircularReference {
                path: path.to_string(),
                chain: chain.to_vec(),
            });
            return placeholder.to_string();
        }

        let Some((namespace, target)) = self.namespaces.lookup(path) else {
            debug!(path, "unresolved token reference");
            warnings.push(ResolveWarning::UnresolvedReference {
                path: path.to_string(),
            });
            return placeholder.to_string();
        };

        match extract_leaf_value(target) {
            Value::String(text) if text.contains('{') => {
                let mut expansion = chain.to_vec();
                expansion.push(path.to_string());
                self.expand(text, &expansion, warnings)
            }
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Null => {
                debug!(path, ?namespace, "token reference has an empty value");
                warnings.push(ResolveWarning::UnresolvedReference {
                    path: path.to_string(),
                });
                placeholder.to_string()
            }
            other => {
                debug!(path, ?namespace, "token reference is not a scalar");
                warnings.push(ResolveWarning::NonScalarReference {
                    path: path.to_string(),
                    found: value_kind(other),
                });
                placeholder.to_string()
            }
        }
    }
}

/// Resolves a value against the given namespaces.
///
/// Shorthand for `Resolver::new(*namespaces).resolve(value)`.
pub fn resolve(value: &Value, namespaces: &Namespaces<'_>) -> Resolution {
    Resolver::new(*namespaces).resolve(value)
}

/// Resolves a string against the given namespaces.
pub fn resolve_str(value: &str, namespaces: &Namespaces<'_>) -> Resolution {
    Resolver::new(*namespaces).resolve_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty() -> Value {
        json!({})
    }

    #[test]
    fn test_non_string_is_identity() {
        let tokens = json!({ "a": "1px" });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        for value in [json!(4), json!(true), Value::Null, json!(["{a}"]), json!({ "x": "{a}" })] {
            let resolved = resolve(&value, &ns);
            assert_eq!(resolved.value, value);
            assert!(resolved.is_clean());
        }
    }

    #[test]
    fn test_plain_string_unchanged() {
        let tokens = empty();
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        let resolved = resolve_str("1px solid red", &ns);
        assert_eq!(resolved.as_str(), Some("1px solid red"));
        assert!(resolved.is_clean());
    }

    #[test]
    fn test_simple_reference() {
        let tokens = json!({ "colors": { "brand": "blue" } });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        assert_eq!(resolve_str("{colors.brand}", &ns).as_str(), Some("blue"));
    }

    #[test]
    fn test_reference_to_wrapped_leaf() {
        let tokens = json!({ "colors": { "brand": { "$value": "blue", "$type": "color" } } });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        assert_eq!(resolve_str("{colors.brand}", &ns).as_str(), Some("blue"));
    }

    #[test]
    fn test_transitive_reference() {
        let tokens = json!({
            "blue": { "500": "#0050ff" },
            "brand": { "value": "{blue.500}" },
            "link": "{brand}"
        });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        let resolved = resolve_str("{link}", &ns);
        assert_eq!(resolved.as_str(), Some("#0050ff"));
        assert!(resolved.is_clean());
    }

    #[test]
    fn test_self_reference_terminates() {
        let tokens = json!({ "a": "{a}" });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        let resolved = resolve_str("{a}", &ns);
        assert_eq!(resolved.as_str(), Some("{a}"));
        assert_eq!(
            resolved.warnings,
            vec![ResolveWarning::CircularReference {
                path: "a".to_string(),
                chain: vec!["a".to_string()],
            }]
        );
    }

    #[test]
    fn test_mutual_cycle_keeps_innermost_placeholder() {
        let tokens = json!({ "a": "{b}", "b": "{a}" });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        let resolved = resolve_str("{a}", &ns);
        assert_eq!(resolved.as_str(), Some("{a}"));
        assert_eq!(resolved.warnings.len(), 1);
        assert_eq!(
            resolved.warnings[0].to_string(),
            "circular reference detected: a -> b -> a"
        );

        let from_b = resolve_str("{b}", &ns);
        assert_eq!(from_b.as_str(), Some("{b}"));
    }

    #[test]
    fn test_global_fallback() {
        let tokens = empty();
        let globals = json!({ "global": { "spacing": { "sm": "4px" } } });
        let ns = Namespaces::new(&tokens, &globals);

        assert_eq!(resolve_str("{spacing.sm}", &ns).as_str(), Some("4px"));
    }

    #[test]
    fn test_independent_placeholders() {
        let tokens = json!({ "a": "1px", "b": "2px" });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        assert_eq!(resolve_str("{a} {b}", &ns).as_str(), Some("1px 2px"));
    }

    #[test]
    fn test_repeated_sibling_placeholders_both_resolve() {
        let tokens = json!({ "a": "1px", "pad": "{a} {a}" });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        let resolved = resolve_str("{pad} {a}", &ns);
        assert_eq!(resolved.as_str(), Some("1px 1px 1px"));
        assert!(resolved.is_clean());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let tokens = json!({
            "base": "4px",
            "x": "{base}",
            "y": "{base}",
            "both": "{x}/{y}"
        });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        let resolved = resolve_str("{both}", &ns);
        assert_eq!(resolved.as_str(), Some("4px/4px"));
        assert!(resolved.is_clean());
    }

    #[test]
    fn test_cycle_through_theme_and_tokens() {
        let theme = json!({ "surface": "{shared.surface}" });
        let tokens = json!({ "shared": { "surface": "{surface}" } });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals).with_theme(&theme);

        let resolved = resolve_str("{surface}", &ns);
        assert_eq!(resolved.as_str(), Some("{surface}"));
        assert!(resolved.warnings[0].is_circular());
    }

    #[test]
    fn test_unresolved_reference_left_in_place() {
        let tokens = json!({ "a": "1px" });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        let resolved = resolve_str("{a} {missing.path}", &ns);
        assert_eq!(resolved.as_str(), Some("1px {missing.path}"));
        assert_eq!(
            resolved.warnings,
            vec![ResolveWarning::UnresolvedReference {
                path: "missing.path".to_string()
            }]
        );
    }

    #[test]
    fn test_theme_overrides_tokens() {
        let theme = json!({ "color": { "bg": { "$value": "#111" } } });
        let tokens = json!({ "color": { "bg": "#fff" } });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals).with_theme(&theme);

        assert_eq!(resolve_str("{color.bg}", &ns).as_str(), Some("#111"));
    }

    #[test]
    fn test_numeric_and_boolean_targets() {
        let tokens = json!({ "space": { "unit": 4, "scale": 1.5 }, "flag": true });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        assert_eq!(
            resolve_str("calc({space.unit}px * {space.scale}) {flag}", &ns).as_str(),
            Some("calc(4px * 1.5) true")
        );
    }

    #[test]
    fn test_empty_string_target_substitutes_empty() {
        let tokens = json!({ "blank": "" });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        let resolved = resolve_str("[{blank}]", &ns);
        assert_eq!(resolved.as_str(), Some("[]"));
        assert!(resolved.is_clean());
    }

    #[test]
    fn test_group_target_is_non_scalar() {
        let tokens = json!({ "color": { "bg": "#000" } });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        let resolved = resolve_str("{color}", &ns);
        assert_eq!(resolved.as_str(), Some("{color}"));
        assert_eq!(
            resolved.warnings,
            vec![ResolveWarning::NonScalarReference {
                path: "color".to_string(),
                found: "an object"
            }]
        );
    }

    #[test]
    fn test_null_wrapped_target_is_unresolved() {
        let tokens = json!({ "gap": { "$value": null } });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        let resolved = resolve_str("{gap}", &ns);
        assert_eq!(resolved.as_str(), Some("{gap}"));
        assert_eq!(resolved.warnings[0].path(), "gap");
    }

    #[test]
    fn test_warnings_from_nested_expansion_are_collected() {
        let tokens = json!({ "border": "{width} solid {color}", "width": "1px" });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        let resolved = resolve_str("{border}", &ns);
        assert_eq!(resolved.as_str(), Some("1px solid {color}"));
        assert_eq!(resolved.warnings.len(), 1);
        assert_eq!(resolved.warnings[0].path(), "color");
    }

    #[test]
    fn test_resolve_with_seeded_chain() {
        let tokens = json!({ "a": "1px" });
        let globals = empty();
        let resolver = Resolver::new(Namespaces::new(&tokens, &globals));

        let resolved = resolver.resolve_with_chain(&json!("{a}"), &["a".to_string()]);
        assert_eq!(resolved.as_str(), Some("{a}"));
        assert!(resolved.warnings[0].is_circular());
    }

    #[test]
    fn test_unbalanced_braces_are_literal() {
        let tokens = json!({ "a": "1px" });
        let globals = empty();
        let ns = Namespaces::new(&tokens, &globals);

        assert_eq!(resolve_str("{a", &ns).as_str(), Some("{a"));
        assert_eq!(resolve_str("{}", &ns).as_str(), Some("{}"));

        // The first brace opens the match, so the path is "{a".
        let doubled = resolve_str("{{a}}", &ns);
        assert_eq!(doubled.as_str(), Some("{{a}}"));
        assert_eq!(doubled.warnings[0].path(), "{a");
    }
}
