//! Error types for DOM operations
//!
//! Simple, flat error hierarchy. Only parsing, rendering and configuration
//! can fail; traversal and search are total.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input too large: {size} bytes > {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<std::fmt::Error> for DomError {
    fn from(err: std::fmt::Error) -> Self {
        DomError::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_error_is_render_error() {
        let err: DomError = std::fmt::Error.into();
        assert!(matches!(err, DomError::Render(_)));
    }

    #[test]
    fn test_display() {
        let err = DomError::InputTooLarge {
            size: 10,
            limit: 4,
        };
        assert_eq!(err.to_string(), "Input too large: 10 bytes > 4 bytes");
    }
}
