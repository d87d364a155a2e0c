//! Theme struct describing one output scope.

use serde_json::Value;

use crate::token::TokenDocument;

/// Selector used when a theme does not set its own.
pub const DEFAULT_SELECTOR: &str = ":root";

/// A named token tree rendered into one block of custom properties.
///
/// The tree is both the source of the declarations and the first namespace
/// searched when resolving their references.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokencss::Theme;
///
/// let dark = Theme::new("dark", json!({ "color": { "bg": { "$value": "#000" } } }))
///     .with_selector("[data-theme=\"dark\"]");
///
/// assert_eq!(dark.name(), "dark");
/// assert_eq!(dark.comment(), "Dark theme variables");
/// assert_eq!(dark.selector(), "[data-theme=\"dark\"]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    tree: Value,
    comment: Option<String>,
    selector: Option<String>,
}

impl Theme {
    /// Creates a theme from a token tree.
    pub fn new(name: impl Into<String>, tree: Value) -> Self {
        Self {
            name: name.into(),
            tree,
            comment: None,
            selector: None,
        }
    }

    /// Creates a theme from a parsed document.
    pub fn from_document(name: impl Into<String>, document: TokenDocument) -> Self {
        Self::new(name, document.into_value())
    }

    /// Sets the comment written at the top of the theme's block.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the selector the theme's declarations are scoped to.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the token tree.
    pub fn tree(&self) -> &Value {
        &self.tree
    }

    /// Returns the block comment, `"<Name> theme variables"` unless set.
    pub fn comment(&self) -> String {
        match &self.comment {
            Some(comment) => comment.clone(),
            None => format!("{} theme variables", capitalize(&self.name)),
        }
    }

    /// Returns the selector, [`DEFAULT_SELECTOR`] unless set.
    pub fn selector(&self) -> &str {
        self.selector.as_deref().unwrap_or(DEFAULT_SELECTOR)
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
