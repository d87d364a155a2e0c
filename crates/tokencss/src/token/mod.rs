//! Token trees and their flat representation.
//!
//! This module provides the data-side primitives:
//!
//! - [`flatten`]: Nested token tree to [`FlatTokens`] keyed by dotted path
//! - [`leaf_value`] / [`extract_leaf_value`]: Leaf-wrapper unwrapping
//! - [`lookup`]: Dotted-path lookup used by reference resolution
//! - [`TokenDocument`]: A parsed JSON or YAML token document
//!
//! A leaf is either a bare scalar or a wrapper object holding its value under
//! one of [`VALUE_FIELDS`], optionally next to a `$type` annotation:
//!
//! ```json
//! {
//!   "color": {
//!     "$type": "color",
//!     "brand": { "$value": "#0af" },
//!     "text": { "value": "{color.brand}" }
//!   }
//! }
//! ```

mod document;
mod flatten;
mod leaf;
mod path;

pub use document::{DocumentError, DocumentFormat, TokenDocument};
pub(crate) use document::value_kind;
pub use flatten::{flatten, FlatTokens};
pub use leaf::{
    extract_leaf_value, is_leaf_wrapper, is_metadata_key, leaf_value, METADATA_FIELDS,
    VALUE_FIELDS,
};
pub use path::{lookup, PATH_SEPARATOR};
