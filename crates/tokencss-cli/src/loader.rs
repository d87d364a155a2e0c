//! Reading token documents from disk.

use std::path::Path;

use tokencss::{DocumentFormat, TokenDocument};
use tracing::{debug, error};

use crate::error::CliError;

/// Reads and parses a token document.
///
/// The format follows the file extension; anything that is not `.yaml` or
/// `.yml` is read as JSON. Outside strict mode an unreadable or invalid
/// document is logged and replaced by an empty one, so the remaining themes
/// still build.
pub fn load_document(path: &Path, strict: bool) -> Result<TokenDocument, CliError> {
    match read_document(path) {
        Ok(document) => {
            debug!(path = %path.display(), "loaded token document");
            Ok(document)
        }
        Err(err) if strict => Err(err),
        Err(err) => {
            error!("{err}");
            Ok(TokenDocument::empty())
        }
    }
}

fn read_document(path: &Path) -> Result<TokenDocument, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;
    let format = DocumentFormat::from_path(path).unwrap_or(DocumentFormat::Json);
    TokenDocument::parse(&source, format).map_err(|source| CliError::DocumentParse {
        path: path.to_path_buf(),
        source,
    })
}
