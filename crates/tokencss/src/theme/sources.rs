//! Shared token trees available to every theme.

use serde_json::{Map, Value};

use super::theme::Theme;
use crate::resolve::Namespaces;
use crate::token::TokenDocument;

/// The shared namespaces: base tokens and globals.
///
/// Globals are looked up under their `global` key, so a globals document
/// normally has the shape `{ "global": { ... } }`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSources {
    tokens: Value,
    globals: Value,
}

impl TokenSources {
    pub fn new(tokens: Value, globals: Value) -> Self {
        Self { tokens, globals }
    }

    /// Creates sources from parsed documents.
    pub fn from_documents(tokens: TokenDocument, globals: TokenDocument) -> Self {
        Self::new(tokens.into_value(), globals.into_value())
    }

    pub fn tokens(&self) -> &Value {
        &self.tokens
    }

    pub fn globals(&self) -> &Value {
        &self.globals
    }

    /// Builds the namespaces used to resolve a theme's values.
    pub fn namespaces_for<'a>(&'a self, theme: &'a Theme) -> Namespaces<'a> {
        Namespaces::new(&self.tokens, &self.globals).with_theme(theme.tree())
    }
}

impl Default for TokenSources {
    fn default() -> Self {
        Self::new(Value::Object(Map::new()), Value::Object(Map::new()))
    }
}
