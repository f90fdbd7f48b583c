//! Typed error handling for straycheck.
//!
//! Analysis itself never fails: unresolvable references are skipped by
//! policy. Errors arise only at the edges: reading and decoding forest
//! documents, loading configuration, compiling ignore patterns.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for straycheck operations.
#[derive(Error, Debug)]
pub enum StraycheckError {
    /// I/O error when reading forest or config files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A forest document that could not be decoded
    #[error("Forest decode error in {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// An ignore pattern that is not a valid regular expression
    #[error("Invalid ignore pattern: {message}")]
    Pattern { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl StraycheckError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a forest decode error.
    pub fn decode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an ignore-pattern error.
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (the run can continue with
    /// other inputs).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Decode { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for straycheck results.
pub type StraycheckResult<T> = Result<T, StraycheckError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> StraycheckResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> StraycheckResult<T> {
        self.map_err(|e| StraycheckError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = StraycheckError::io(
            PathBuf::from("/test/forest.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, StraycheckError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/test/forest.json")));
        assert!(err.to_string().contains("/test/forest.json"));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(StraycheckError::decode("/f.json", "bad syntax").is_recoverable());
        assert!(StraycheckError::config("/straycheck.toml", "bad toml").is_recoverable());
        assert!(!StraycheckError::pattern("unbalanced (").is_recoverable());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let wrapped = result.with_path("/missing/forest.json");
        assert!(wrapped.is_err());
    }
}
