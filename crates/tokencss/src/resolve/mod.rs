//! Reference resolution for token values.
//!
//! This module provides:
//!
//! - [`Namespaces`]: The theme, tokens and globals trees searched for a path
//! - [`Resolver`]: Recursive `{path}` substitution with cycle detection
//! - [`Resolution`]: A resolved value plus the warnings it produced
//! - [`ResolveWarning`]: Circular, unresolved and non-scalar references
//!
//! Resolution never fails. A placeholder that cannot be resolved stays in the
//! output verbatim and is reported as a warning, so a single bad reference
//! does not hide the rest of a theme.

mod namespaces;
mod resolver;
mod warning;

pub use namespaces::{Namespace, Namespaces, GLOBAL_PREFIX};
pub use resolver::{resolve, resolve_str, Resolution, Resolver};
pub use warning::ResolveWarning;
