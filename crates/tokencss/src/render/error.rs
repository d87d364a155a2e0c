//! Stylesheet rendering errors.

use thiserror::Error;

/// Error returned when a stylesheet template cannot be compiled or rendered.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("stylesheet template error: {0}")]
    Template(#[from] minijinja::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        let inner = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end");
        let err = RenderError::from(inner);
        let msg = err.to_string();
        assert!(msg.starts_with("stylesheet template error"));
        assert!(msg.contains("unexpected end"));
    }
}
