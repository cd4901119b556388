//! Typed error handling for deadstruct.
//!
//! The error taxonomy mirrors the analysis contract: per-file failures are
//! recoverable and never abort a run, while root-path and enumeration
//! failures are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deadstruct operations.
#[derive(Error, Debug)]
pub enum DeadstructError {
    /// I/O error when reading a file or statting the root path
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Syntax error when parsing Rust source
    #[error("Parse error in {path}: {message}")]
    Parse {
        path: PathBuf,
        message: String,
        /// Line number (1-indexed) if available
        line: Option<usize>,
        /// Column number (1-indexed) if available
        column: Option<usize>,
    },

    /// Directory enumeration failure - aborts the whole run
    #[error("Scan error under {path}: {message}")]
    Scan { path: PathBuf, message: String },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl DeadstructError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a parse error without location info.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Create a parse error with line/column info.
    pub fn parse_at(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    /// Create a scan error.
    pub fn scan(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Scan {
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

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable (the run can continue with the
    /// next file). Scan and argument errors are fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::Io { .. } | Self::Config { .. }
        )
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Parse { path, .. } => Some(path),
            Self::Scan { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            Self::InvalidArgument { .. } => None,
        }
    }
}

/// Convenience type alias for deadstruct results.
pub type DeadstructResult<T> = Result<T, DeadstructError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> DeadstructResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> DeadstructResult<T> {
        self.map_err(|e| DeadstructError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = DeadstructError::io(
            PathBuf::from("/test/file.rs"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, DeadstructError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/test/file.rs")));
        assert!(err.to_string().contains("/test/file.rs"));
    }

    #[test]
    fn test_parse_error_with_location() {
        let err = DeadstructError::parse_at("/src/lib.rs", "unexpected token", 10, 5);
        if let DeadstructError::Parse { line, column, .. } = &err {
            assert_eq!(*line, Some(10));
            assert_eq!(*column, Some(5));
        } else {
            panic!("Expected Parse error");
        }
    }

    #[test]
    fn test_is_recoverable() {
        assert!(DeadstructError::parse("/test.rs", "error").is_recoverable());
        assert!(DeadstructError::io(
            "/test.rs",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .is_recoverable());
        assert!(!DeadstructError::scan("/root", "unreadable").is_recoverable());
        assert!(!DeadstructError::invalid_argument("bad path").is_recoverable());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let converted = result.with_path("/missing/file.rs");
        assert!(converted.is_err());
    }
}
