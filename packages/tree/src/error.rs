//! Error types for tree operations.

use crate::path::Path;

/// Errors raised while resolving or operating on tree paths.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A path segment does not exist and the operation may not create it.
    #[error("path not found: {path}")]
    PathNotFound { path: Path },

    /// A path tried to descend below, or list, a file.
    #[error("not a directory: {path}")]
    NotADirectory { path: Path },

    /// A file operation was applied to a directory.
    #[error("is a directory: {path}")]
    IsADirectory { path: Path },

    /// The root directory has no parent to be removed from.
    #[error("the root directory cannot be deleted")]
    RootDeletion,

    #[error("invalid open mode: {mode:?}")]
    InvalidMode { mode: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

impl Error {
    /// Whether this error means "nothing lives at that path".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::PathNotFound { .. } | Error::NotADirectory { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use std::error::Error as StdError;

    #[test]
    fn error_display() {
        let e = Error::PathNotFound {
            path: path!("dir/missing"),
        };
        assert_eq!(format!("{}", e), "path not found: dir/missing");

        let e = Error::NotADirectory {
            path: path!("file0"),
        };
        assert!(format!("{}", e).contains("not a directory"));

        let e = Error::InvalidMode {
            mode: "q".to_string(),
        };
        assert!(format!("{}", e).contains("\"q\""));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidInput, "negative seek");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn not_found_classification() {
        assert!(Error::PathNotFound { path: path!("a") }.is_not_found());
        assert!(Error::NotADirectory { path: path!("a") }.is_not_found());
        assert!(!Error::IsADirectory { path: path!("a") }.is_not_found());
        assert!(!Error::RootDeletion.is_not_found());
    }
}
