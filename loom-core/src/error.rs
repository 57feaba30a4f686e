use std::path::PathBuf;

use thiserror::Error;

/// Result type for loom core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An argument failed validation at a call boundary.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("failed to write '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an argument validation error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Fail with [`Error::InvalidArgument`] when `value` is blank.
    pub fn ensure_not_blank(name: &'static str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            Err(Self::invalid_argument(name, "must not be empty"))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_not_blank() {
        assert!(Error::ensure_not_blank("name", "Main").is_ok());
        assert!(Error::ensure_not_blank("name", "").is_err());
        assert!(Error::ensure_not_blank("name", "   ").is_err());
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::invalid_argument("name", "must not be empty");
        assert_eq!(err.to_string(), "invalid argument 'name': must not be empty");
    }
}
