//! File entry representation.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use unicode_normalization::UnicodeNormalization;

/// Whether an entry is a directory or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Label shown in the file table's type column.
    pub fn label(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::File => "file",
        }
    }
}

/// A read-only snapshot of a single file or directory.
///
/// `FileEntry` is immutable; create new instances via [`FileEntry::new`]
/// rather than mutating existing ones. Sizes are reported exactly as the
/// file system returns them, directories included.
///
/// # Examples
///
/// ```no_run
/// use feast_core::FileEntry;
/// use std::fs;
///
/// let metadata = fs::metadata("Cargo.toml").unwrap();
/// let entry = FileEntry::new("Cargo.toml".into(), &metadata);
/// assert_eq!(entry.name(), "Cargo.toml");
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    size: u64,
    modified: Option<SystemTime>,
    kind: EntryKind,
    is_symlink: bool,
    mode: String,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        Self {
            path,
            name,
            size: metadata.len(),
            modified: metadata.modified().ok(),
            kind,
            is_symlink: metadata.is_symlink(),
            mode: mode_string(metadata),
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the size in bytes as reported by the file system.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the last-modified time, if available.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Returns `true` if this entry is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    /// Permission string in `ls -l` form, e.g. `drwxr-xr-x`.
    pub fn mode(&self) -> &str {
        &self.mode
    }
}

/// `ls -l` permission string. Setuid, setgid and sticky bits take the
/// execute slot of their triple as `s`/`S` or `t`/`T`.
#[cfg(unix)]
fn mode_string(metadata: &std::fs::Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let bits = metadata.permissions().mode();
    let type_char = if metadata.is_symlink() {
        'l'
    } else if metadata.is_dir() {
        'd'
    } else {
        '-'
    };

    // (shift, special bit, special char when executable)
    let triples = [(6u32, 0o4000, 's'), (3, 0o2000, 's'), (0, 0o1000, 't')];

    let mut out = String::with_capacity(10);
    out.push(type_char);
    for (shift, special, mark) in triples {
        let triple = (bits >> shift) & 0o7;
        let exec = triple & 0o1 != 0;
        out.push(if triple & 0o4 != 0 { 'r' } else { '-' });
        out.push(if triple & 0o2 != 0 { 'w' } else { '-' });
        out.push(match (bits & special != 0, exec) {
            (true, true) => mark,
            (true, false) => mark.to_ascii_uppercase(),
            (false, true) => 'x',
            (false, false) => '-',
        });
    }
    out
}

#[cfg(not(unix))]
fn mode_string(metadata: &std::fs::Metadata) -> String {
    let type_char = if metadata.is_dir() { 'd' } else { '-' };
    let write = if metadata.permissions().readonly() { '-' } else { 'w' };
    format!("{type_char}r{write}-r{write}-r{write}-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry_at(path: &Path) -> FileEntry {
        FileEntry::new(path.to_path_buf(), &fs::symlink_metadata(path).unwrap())
    }

    #[test]
    fn regular_file_snapshot() {
        let tmp = TempDir::new().unwrap();
        let notes = tmp.path().join("notes.md");
        fs::write(&notes, "# feast").unwrap();

        let entry = entry_at(&notes);
        assert_eq!(entry.name(), "notes.md");
        assert_eq!(entry.path(), notes);
        assert_eq!(entry.size(), 7);
        assert_eq!(entry.kind(), EntryKind::File);
        assert!(!entry.is_symlink());
        assert!(entry.modified().is_some());
    }

    #[test]
    fn directory_snapshot() {
        let tmp = TempDir::new().unwrap();
        let logs = tmp.path().join("logs");
        fs::create_dir(&logs).unwrap();

        let entry = entry_at(&logs);
        assert!(entry.is_dir());
        assert_eq!(entry.kind().label(), "directory");
        assert!(entry.mode().starts_with('d'));
    }

    #[test]
    fn kind_labels() {
        assert_eq!(EntryKind::File.label(), "file");
        assert_eq!(EntryKind::Directory.label(), "directory");
    }

    #[cfg(unix)]
    #[test]
    fn mode_string_reflects_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let script = tmp.path().join("deploy.sh");
        fs::write(&script, "#!/bin/sh").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o754)).unwrap();

        assert_eq!(entry_at(&script).mode(), "-rwxr-xr--");
    }

    #[cfg(unix)]
    #[test]
    fn mode_string_shows_special_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let shared = tmp.path().join("shared");
        fs::create_dir(&shared).unwrap();
        fs::set_permissions(&shared, fs::Permissions::from_mode(0o1777)).unwrap();
        let helper = tmp.path().join("helper");
        fs::write(&helper, "").unwrap();
        fs::set_permissions(&helper, fs::Permissions::from_mode(0o4755)).unwrap();
        let group_only = tmp.path().join("group_only");
        fs::write(&group_only, "").unwrap();
        fs::set_permissions(&group_only, fs::Permissions::from_mode(0o2644)).unwrap();

        assert_eq!(entry_at(&shared).mode(), "drwxrwxrwt");
        assert_eq!(entry_at(&helper).mode(), "-rwsr-xr-x");
        assert_eq!(entry_at(&group_only).mode(), "-rw-r-Sr--");
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_flagged_in_mode() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("hosts");
        fs::write(&real, "127.0.0.1 localhost").unwrap();
        let alias = tmp.path().join("hosts.link");
        std::os::unix::fs::symlink(&real, &alias).unwrap();

        let entry = entry_at(&alias);
        assert!(entry.is_symlink());
        assert_eq!(entry.kind(), EntryKind::File);
        assert!(entry.mode().starts_with('l'));
    }

    #[test]
    fn name_is_nfc_normalized() {
        let tmp = TempDir::new().unwrap();
        // "é" as "e" + combining acute accent
        let decomposed = tmp.path().join("cafe\u{301}.txt");
        fs::write(&decomposed, "").unwrap();

        assert_eq!(entry_at(&decomposed).name(), "caf\u{e9}.txt");
    }
}
