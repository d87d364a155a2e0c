//! CSS custom-property output.
//!
//! - [`custom_property_name`]: Flat key to `--custom-property` name
//! - [`format_value`]: Resolved token value to declaration text
//! - [`Declaration`]: One `--name: value;` line

mod declaration;

pub use declaration::{custom_property_name, format_value, Declaration};

/// Joins declarations into newline-separated `--name: value;` lines.
pub fn declarations_to_string<'a>(declarations: impl IntoIterator<Item = &'a Declaration>) -> String {
    declarations
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
