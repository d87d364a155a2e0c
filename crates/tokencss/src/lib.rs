//! # tokencss - design tokens to CSS custom properties
//!
//! `tokencss` turns nested design-token documents into flat CSS
//! custom-property declarations, one block per theme scope (`dark`,
//! `light`, `global`, ...).
//!
//! ## Pipeline
//!
//! 1. **Flatten** a theme tree into dotted keys ([`flatten`]), unwrapping
//!    `$value`/`value` leaf wrappers ([`extract_leaf_value`]).
//! 2. **Resolve** `{path.to.token}` references in each value ([`Resolver`])
//!    against the theme itself, the shared tokens, and the globals
//!    (under `global.<path>`), in that order.
//! 3. **Format** each key as a custom property ([`custom_property_name`])
//!    and render the block ([`Renderer`]).
//!
//! Resolution is total: circular and unresolvable references are left in
//! the output verbatim and reported as [`ResolveWarning`]s.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use tokencss::{generate, Renderer, Theme, TokenSources};
//!
//! let sources = TokenSources::new(
//!     json!({ "purple": { "200": { "$value": "#d6bbfb" } } }),
//!     json!({ "global": { "spacing": { "sm": "4px" } } }),
//! );
//! let dark = Theme::new("dark", json!({
//!     "accent": { "$type": "color", "$value": "{purple.200}" },
//!     "gap": "{spacing.sm}"
//! }));
//!
//! let output = generate(&dark, &sources);
//! assert!(output.warnings.is_empty());
//!
//! let css = Renderer::new().unwrap().render(&dark, &output).unwrap();
//! assert_eq!(css, ":root {\n  /* Dark theme variables */\n  --accent: #d6bbfb;\n  --gap: 4px;\n}");
//! ```
//!
//! ## Cycles
//!
//! ```rust
//! use serde_json::json;
//! use tokencss::{resolve_str, Namespaces};
//!
//! let tokens = json!({ "a": "{b}", "b": "{a}" });
//! let globals = json!({});
//! let resolved = resolve_str("{a}", &Namespaces::new(&tokens, &globals));
//!
//! assert_eq!(resolved.as_str(), Some("{a}"));
//! assert!(resolved.warnings[0].is_circular());
//! ```

pub mod css;
pub mod render;
pub mod resolve;
pub mod theme;
pub mod token;

pub use css::{custom_property_name, format_value, Declaration};
pub use render::{render_stylesheet, RenderError, Renderer, DEFAULT_TEMPLATE};
pub use resolve::{resolve, resolve_str, Namespace, Namespaces, Resolution, ResolveWarning, Resolver};
pub use theme::{generate, generate_css_variables, Theme, ThemeOutput, TokenSources, TokenWarning};
pub use token::{
    extract_leaf_value, flatten, leaf_value, lookup, DocumentError, DocumentFormat, FlatTokens,
    TokenDocument, METADATA_FIELDS, VALUE_FIELDS,
};
