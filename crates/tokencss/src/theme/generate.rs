//! Turning a theme into resolved declarations.

use std::fmt;

use serde_json::Value;
use tracing::{debug, debug_span};

use super::sources::TokenSources;
use super::theme::Theme;
use crate::css::{declarations_to_string, format_value, Declaration};
use crate::resolve::{ResolveWarning, Resolver};
use crate::token::{extract_leaf_value, flatten, FlatTokens};

/// A resolution warning tagged with the flat key whose value produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWarning {
    pub key: String,
    pub warning: ResolveWarning,
}

impl fmt::Display for TokenWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.warning)
    }
}

/// The declarations generated for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOutput {
    pub theme: String,
    pub declarations: Vec<Declaration>,
    pub warnings: Vec<TokenWarning>,
}

impl ThemeOutput {
    /// Returns the declarations as newline-separated lines.
    pub fn css_variables(&self) -> String {
        declarations_to_string(&self.declarations)
    }

    /// Returns the resolved values keyed by flat key.
    pub fn resolved(&self) -> FlatTokens {
        self.declarations
            .iter()
            .map(|decl| (decl.key.clone(), Value::String(decl.value.clone())))
            .collect()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Generates the declarations for a theme.
///
/// The theme tree is flattened, which drops metadata keys such as `$type`,
/// and each value is resolved against the theme itself, then the shared
/// tokens, then the globals.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokencss::{generate, Theme, TokenSources};
///
/// let sources = TokenSources::new(
///     json!({ "gray": { "900": "#111" } }),
///     json!({ "global": { "radius": { "md": "6px" } } }),
/// );
/// let dark = Theme::new("dark", json!({
///     "surface": { "$type": "color", "$value": "{gray.900}" },
///     "card": { "radius": "{radius.md}" }
/// }));
///
/// let output = generate(&dark, &sources);
/// assert_eq!(output.css_variables(), "--surface: #111;\n--card-radius: 6px;");
/// ```
pub fn generate(theme: &Theme, sources: &TokenSources) -> ThemeOutput {
    let _span = debug_span!("generate", theme = theme.name()).entered();
    let resolver = Resolver::new(sources.namespaces_for(theme));

    let mut declarations = Vec::new();
    let mut warnings = Vec::new();

    for (key, raw) in flatten(theme.tree()).iter() {
        let resolution = resolver.resolve(extract_leaf_value(raw));
        warnings.extend(resolution.warnings.into_iter().map(|warning| TokenWarning {
            key: key.clone(),
            warning,
        }));
        declarations.push(Declaration::new(key.as_str(), format_value(&resolution.value)));
    }

    debug!(
        declarations = declarations.len(),
        warnings = warnings.len(),
        "generated theme declarations"
    );

    ThemeOutput {
        theme: theme.name().to_string(),
        declarations,
        warnings,
    }
}

/// Generates newline-separated declarations straight from token trees.
///
/// `theme_tree` doubles as the theme-local namespace.
pub fn generate_css_variables(theme_tree: &Value, tokens: &Value, globals: &Value) -> String {
    let theme = Theme::new("", theme_tree.clone());
    let sources = TokenSources::new(tokens.clone(), globals.clone());
    generate(&theme, &sources).css_variables()
}
