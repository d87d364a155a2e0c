//! The token trees a reference is looked up in.

use serde_json::Value;

use crate::token::lookup;

/// Key under which the globals document nests its tokens.
pub const GLOBAL_PREFIX: &str = "global";

/// Which namespace satisfied a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Theme,
    Tokens,
    Globals,
}

/// The three trees searched during resolution.
///
/// Lookup order is theme, then tokens, then globals under
/// `global.<path>`. A theme-local token therefore overrides a shared token
/// with the same path.
#[derive(Debug, Clone, Copy)]
pub struct Namespaces<'a> {
    pub theme: Option<&'a Value>,
    pub tokens: &'a Value,
    pub globals: &'a Value,
}

impl<'a> Namespaces<'a> {
    /// Creates namespaces without a theme tree.
    pub fn new(tokens: &'a Value, globals: &'a Value) -> Self {
        Self {
            theme: None,
            tokens,
            globals,
        }
    }

    /// Adds a theme tree, searched before the shared tokens.
    pub fn with_theme(mut self, theme: &'a Value) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Finds a reference target, reporting the namespace it came from.
    pub fn lookup(&self, path: &str) -> Option<(Namespace, &'a Value)> {
        self.theme
            .and_then(|theme| lookup(theme, path))
            .map(|found| (Namespace::Theme, found))
            .or_else(|| lookup(self.tokens, path).map(|found| (Namespace::Tokens, found)))
            .or_else(|| {
                let global_path = format!("{GLOBAL_PREFIX}.{path}");
                lookup(self.globals, &global_path).map(|found| (Namespace::Globals, found))
            })
    }
}
