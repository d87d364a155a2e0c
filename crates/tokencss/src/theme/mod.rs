//! Themes and declaration generation.
//!
//! This module provides:
//!
//! - [`Theme`]: A named token tree with its selector and comment
//! - [`TokenSources`]: The shared tokens and globals trees
//! - [`generate`]: Theme to resolved [`ThemeOutput`]
//! - [`generate_css_variables`]: The same, straight from three trees
//!
//! Each theme is generated independently; the shared sources are only read.

mod generate;
mod sources;
#[allow(clippy::module_inception)]
mod theme;

pub use generate::{generate, generate_css_variables, ThemeOutput, TokenWarning};
pub use sources::TokenSources;
pub use theme::{Theme, DEFAULT_SELECTOR};
