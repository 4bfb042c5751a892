//! Error types for `feast-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
///
/// Each variant carries just enough context for the caller to log a
/// meaningful message. None of them are fatal on their own; startup code
/// decides which ones abort the process.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The invoking user's home directory could not be determined.
    #[error("unable to determine home directory")]
    HomeDirUnavailable,

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Classifies an I/O error raised while touching `path`.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io(err),
        }
    }
}

/// Convenience alias used throughout `feast-core`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/file"));
        assert_eq!(err.to_string(), "path not found: /missing/file");
    }

    #[test]
    fn permission_denied_displays_path() {
        let err = CoreError::PermissionDenied(PathBuf::from("/secret"));
        assert_eq!(err.to_string(), "permission denied: /secret");
    }

    #[test]
    fn not_a_directory_displays_path() {
        let err = CoreError::NotADirectory(PathBuf::from("/some/file.txt"));
        assert_eq!(err.to_string(), "not a directory: /some/file.txt");
    }

    #[test]
    fn config_parse_displays_message() {
        let err = CoreError::ConfigParse("unexpected token".to_string());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }

    #[test]
    fn home_dir_unavailable_displays_message() {
        assert_eq!(
            CoreError::HomeDirUnavailable.to_string(),
            "unable to determine home directory"
        );
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }

    #[test]
    fn from_io_classifies_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "x");
        let err = CoreError::from_io(io_err, Path::new("/a"));
        assert!(matches!(err, CoreError::NotFound(p) if p == Path::new("/a")));
    }

    #[test]
    fn from_io_classifies_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "x");
        let err = CoreError::from_io(io_err, Path::new("/b"));
        assert!(matches!(err, CoreError::PermissionDenied(_)));
    }

    #[test]
    fn from_io_falls_back_to_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Interrupted, "x");
        let err = CoreError::from_io(io_err, Path::new("/c"));
        assert!(matches!(err, CoreError::Io(_)));
    }
}
