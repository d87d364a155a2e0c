//! Non-fatal diagnostics produced while resolving references.

/// A problem found while resolving a reference.
///
/// Warnings never stop resolution: the offending placeholder is left in the
/// output verbatim and the rest of the value is still resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveWarning {
    /// The path is already being expanded further up the chain.
    CircularReference { path: String, chain: Vec<String> },
    /// The path was found in none of the namespaces.
    UnresolvedReference { path: String },
    /// The path names a group or composite value rather than a scalar.
    NonScalarReference { path: String, found: &'static str },
}

impl ResolveWarning {
    /// The reference path the warning is about.
    pub fn path(&self) -> &str {
        match self {
            ResolveWarning::CircularReference { path, .. }
            | ResolveWarning::UnresolvedReference { path }
            | ResolveWarning::NonScalarReference { path, .. } => path,
        }
    }

    /// Returns `true` for circular references.
    pub fn is_circular(&self) -> bool {
        matches!(self, ResolveWarning::CircularReference { .. })
    }
}

impl std::fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveWarning::CircularReference { path, chain } => {
                write!(
                    f,
                    "circular reference detected: {} -> {}",
                    chain.join(" -> "),
                    path
                )
            }
            ResolveWarning::UnresolvedReference { path } => {
                write!(
                    f,
                    "reference '{{{}}}' not found in theme, tokens or globals",
                    path
                )
            }
            ResolveWarning::NonScalarReference { path, found } => {
                write!(f, "reference '{{{}}}' points at {}, not a value", path, found)
            }
        }
    }
}
