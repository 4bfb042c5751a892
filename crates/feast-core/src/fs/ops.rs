//! Synchronous file-system calls used by the file browser.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;

/// Reads the immediate contents of a directory and returns them as [`FileEntry`] values.
///
/// The returned entries are in whatever order the platform listing yields.
/// Use [`sort_by_name`] to get a stable order. Children whose metadata
/// cannot be read are skipped.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::PermissionDenied`]: read access is denied.
/// - [`CoreError::Io`]: any other I/O error.
///
/// # Examples
///
/// ```no_run
/// use feast_core::read_directory;
/// use std::path::Path;
///
/// let entries = read_directory(Path::new("/home/user")).unwrap();
/// for entry in &entries {
///     println!("{}", entry.name());
/// }
/// ```
pub fn read_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(e, path))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable entry in {}: {e}", path.display());
                continue;
            }
        };
        let metadata = match dir_entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!("failed to stat {}: {e}", dir_entry.path().display());
                continue;
            }
        };
        entries.push(FileEntry::new(dir_entry.path(), &metadata));
    }

    tracing::debug!(path = %path.display(), count = entries.len(), "read directory");
    Ok(entries)
}

/// Stats a single path, following symlinks.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::PermissionDenied`]: a parent directory is not searchable.
pub fn stat(path: &Path) -> CoreResult<FileEntry> {
    let metadata = std::fs::metadata(path).map_err(|e| CoreError::from_io(e, path))?;
    Ok(FileEntry::new(path.to_path_buf(), &metadata))
}

/// Resolves `path` to an absolute, symlink-free directory path.
///
/// Relative paths are taken against the process working directory.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path resolves to a non-directory.
pub fn resolve_dir(path: &Path) -> CoreResult<PathBuf> {
    let resolved = std::fs::canonicalize(path).map_err(|e| CoreError::from_io(e, path))?;
    if !resolved.is_dir() {
        return Err(CoreError::NotADirectory(resolved));
    }
    Ok(resolved)
}

/// Sorts entries by name in byte order.
pub fn sort_by_name(mut entries: Vec<FileEntry>) -> Vec<FileEntry> {
    entries.sort_by(|a, b| a.name().cmp(b.name()));
    entries
}
