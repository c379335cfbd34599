//! Error type shared by scanning, configuration, and report writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by codetoc operations.
///
/// `Read` is recovered per file by the scanner; every other variant aborts
/// the run once it reaches `main`.
#[derive(Error, Debug)]
pub enum TocError {
    /// A source file could not be read.
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report file could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan root does not exist or is not a directory.
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A config file exists but could not be loaded.
    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TocError {
    /// Path the error refers to, when there is one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            TocError::Read { path, .. }
            | TocError::Write { path, .. }
            | TocError::Config { path, .. } => Some(path),
            TocError::NotADirectory(path) => Some(path),
            TocError::Json(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_displays_io_message_only() {
        let err = TocError::Read {
            path: PathBuf::from("src/a.ts"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        // The scanner prefixes the path itself
        assert_eq!(err.to_string(), "denied");
        assert_eq!(err.path(), Some(&PathBuf::from("src/a.ts")));
    }

    #[test]
    fn test_write_error_mentions_path() {
        let err = TocError::Write {
            path: PathBuf::from("/tmp/out.md"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(err.to_string(), "Failed to write /tmp/out.md: disk full");
    }
}
