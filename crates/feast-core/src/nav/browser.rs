//! UI-agnostic state of the file browser.
//!
//! [`Browser`] combines a [`DirStack`] with the last successfully read
//! listing of the current directory and a row cursor. Listing failures
//! never clear the entries; the previous listing stays until a read
//! succeeds.

use std::path::{Path, PathBuf};

use crate::error::CoreResult;
use crate::fs::entry::FileEntry;
use crate::fs::ops::{read_directory, sort_by_name, stat};
use crate::nav::history::DirStack;

/// File browser state: navigation stack, entries, and cursor.
///
/// Immutable: all state transitions return a new `Browser`.
/// Selection is automatically clamped to valid bounds.
#[derive(Debug, Clone)]
pub struct Browser {
    stack: DirStack,
    entries: Vec<FileEntry>,
    selected_index: usize,
    sort_entries: bool,
}

impl Browser {
    /// Creates a browser positioned at `start` with no entries loaded.
    ///
    /// Call [`Browser::refresh`] to populate the listing. When
    /// `sort_entries` is false, entries keep the platform listing order.
    pub fn new(start: PathBuf, sort_entries: bool) -> Self {
        Self {
            stack: DirStack::new(start),
            entries: Vec::new(),
            selected_index: 0,
            sort_entries,
        }
    }

    pub fn current_dir(&self) -> &Path {
        self.stack.current()
    }

    /// Returns the navigation stack.
    pub fn stack(&self) -> &DirStack {
        &self.stack
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.selected_index)
    }

    /// Returns a new browser with the cursor at `index` (clamped to bounds).
    pub fn with_selection(self, index: usize) -> Self {
        let selected_index = clamp_index(index, self.entries.len());
        Self {
            selected_index,
            ..self
        }
    }

    /// Returns a new browser with `entries` replacing the listing.
    pub fn with_entries(self, entries: Vec<FileEntry>) -> Self {
        let selected_index = clamp_index(self.selected_index, entries.len());
        Self {
            entries,
            selected_index,
            ..self
        }
    }

    /// Moves the cursor up by one. No-op at the top.
    pub fn move_up(self) -> Self {
        let index = self.selected_index.saturating_sub(1);
        self.with_selection(index)
    }

    /// Moves the cursor down by one. No-op at the bottom.
    pub fn move_down(self) -> Self {
        let index = self.selected_index + 1;
        self.with_selection(index)
    }

    /// Opens the highlighted row.
    ///
    /// The row's name is joined onto the current directory and stat'ed.
    /// A directory becomes the new current directory (forward list cleared,
    /// cursor reset); anything else leaves the browser unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the stat failure; the caller keeps its existing state.
    pub fn enter_selected(&self) -> CoreResult<Self> {
        let Some(entry) = self.selected_entry() else {
            return Ok(self.clone());
        };
        let target = self.current_dir().join(entry.name());
        let target_entry = stat(&target)?;
        if !target_entry.is_dir() {
            return Ok(self.clone());
        }
        Ok(Self {
            stack: self.stack.descend(target),
            selected_index: 0,
            ..self.clone()
        })
    }

    /// Ascends to the parent directory and resets the cursor.
    pub fn go_parent(self) -> Self {
        Self {
            stack: self.stack.ascend(),
            selected_index: 0,
            ..self
        }
    }

    /// Re-enters the most recently left directory, if any, and resets the
    /// cursor. No-op when the forward list is empty.
    pub fn go_forward(self) -> Self {
        match self.stack.go_forward() {
            Some(stack) => Self {
                stack,
                selected_index: 0,
                ..self
            },
            None => self,
        }
    }

    /// Re-reads the current directory.
    ///
    /// # Errors
    ///
    /// Propagates the read failure; on error the caller should keep using
    /// `self`, whose entries are the last good listing.
    pub fn refresh(&self) -> CoreResult<Self> {
        let raw = read_directory(self.current_dir())?;
        let entries = if self.sort_entries {
            sort_by_name(raw)
        } else {
            raw
        };
        Ok(self.clone().with_entries(entries))
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::fs;
    use tempfile::TempDir;

    /// Builds `<tmp>/u` with `Documents/`, `Photos/`, and `notes.txt`.
    fn home_fixture() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let home = tmp.path().join("u");
        fs::create_dir(&home).unwrap();
        fs::create_dir(home.join("Documents")).unwrap();
        fs::create_dir(home.join("Photos")).unwrap();
        fs::write(home.join("notes.txt"), "hi").unwrap();
        (tmp, home)
    }

    fn loaded(home: &Path) -> Browser {
        Browser::new(home.to_path_buf(), true).refresh().unwrap()
    }

    fn select_named(browser: Browser, name: &str) -> Browser {
        let index = browser
            .entries()
            .iter()
            .position(|e| e.name() == name)
            .unwrap();
        browser.with_selection(index)
    }

    #[test]
    fn new_browser_is_empty_until_refresh() {
        let (_tmp, home) = home_fixture();
        let browser = Browser::new(home.clone(), true);
        assert!(browser.entries().is_empty());
        assert_eq!(browser.current_dir(), home);
        assert!(browser.selected_entry().is_none());
    }

    #[test]
    fn refresh_loads_sorted_entries() {
        let (_tmp, home) = home_fixture();
        let browser = loaded(&home);
        let names: Vec<&str> = browser.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Documents", "Photos", "notes.txt"]);
    }

    #[test]
    fn enter_directory_descends_and_clears_forward() {
        let (_tmp, home) = home_fixture();
        let browser = select_named(loaded(&home), "Documents");

        let browser = browser.enter_selected().unwrap();
        assert_eq!(browser.current_dir(), home.join("Documents"));
        assert!(!browser.stack().can_go_forward());
        assert_eq!(browser.selected_index(), 0);
    }

    #[test]
    fn enter_file_is_a_no_op() {
        let (_tmp, home) = home_fixture();
        let browser = select_named(loaded(&home), "notes.txt");

        let after = browser.enter_selected().unwrap();
        assert_eq!(after.current_dir(), home);
        assert_eq!(after.selected_index(), browser.selected_index());
    }

    #[test]
    fn enter_vanished_entry_returns_error() {
        let (_tmp, home) = home_fixture();
        let browser = select_named(loaded(&home), "Photos");
        fs::remove_dir(home.join("Photos")).unwrap();

        let result = browser.enter_selected();
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
        assert_eq!(browser.current_dir(), home);
    }

    #[test]
    fn enter_with_no_entries_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        let browser = Browser::new(tmp.path().to_path_buf(), true)
            .refresh()
            .unwrap();
        let after = browser.enter_selected().unwrap();
        assert_eq!(after.current_dir(), tmp.path());
    }

    #[test]
    fn parent_then_forward_restores_directory_and_cursor() {
        let (_tmp, home) = home_fixture();
        let docs = home.join("Documents");
        fs::write(docs.join("a.txt"), "").unwrap();
        fs::write(docs.join("b.txt"), "").unwrap();

        let browser = Browser::new(docs.clone(), true)
            .refresh()
            .unwrap()
            .with_selection(1);

        let up = browser.go_parent().refresh().unwrap();
        assert_eq!(up.current_dir(), home);
        assert_eq!(up.selected_index(), 0);
        assert_eq!(up.stack().forward_stack().front(), Some(&docs));

        let back = up.go_forward().refresh().unwrap();
        assert_eq!(back.current_dir(), docs);
        assert_eq!(back.selected_index(), 0);
        assert!(!back.stack().can_go_forward());
    }

    #[test]
    fn parent_then_enter_clears_forward() {
        let (_tmp, home) = home_fixture();
        let browser = Browser::new(home.join("Documents"), true);

        let up = browser.go_parent().refresh().unwrap();
        let up = select_named(up, "Photos");
        let photos = up.enter_selected().unwrap();

        assert_eq!(photos.current_dir(), home.join("Photos"));
        assert!(photos.stack().forward_stack().is_empty());
    }

    #[test]
    fn forward_without_history_is_a_no_op() {
        let (_tmp, home) = home_fixture();
        let browser = loaded(&home).with_selection(2);
        let after = browser.go_forward();
        assert_eq!(after.current_dir(), home);
        assert_eq!(after.selected_index(), 2);
    }

    #[test]
    fn failed_refresh_leaves_caller_state_intact() {
        let (_tmp, home) = home_fixture();
        let browser = loaded(&home);
        let before: Vec<String> = browser.entries().iter().map(|e| e.name().to_string()).collect();

        fs::remove_dir_all(&home).unwrap();
        assert!(browser.refresh().is_err());

        let after: Vec<String> = browser.entries().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn cursor_moves_are_clamped() {
        let (_tmp, home) = home_fixture();
        let browser = loaded(&home);

        let browser = browser.move_up();
        assert_eq!(browser.selected_index(), 0);

        let browser = browser.move_down().move_down().move_down().move_down();
        assert_eq!(browser.selected_index(), 2);
    }

    #[test]
    fn with_entries_clamps_selection() {
        let (_tmp, home) = home_fixture();
        let browser = loaded(&home).with_selection(2);
        let browser = browser.with_entries(Vec::new());
        assert_eq!(browser.selected_index(), 0);
    }

    #[test]
    fn unsorted_browser_keeps_listing_order() {
        let (_tmp, home) = home_fixture();
        let browser = Browser::new(home.clone(), false).refresh().unwrap();
        let listed: Vec<String> = read_directory(&home)
            .unwrap()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        let shown: Vec<String> = browser.entries().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(shown, listed);
    }

    #[test]
    fn resolved_relative_start_ascends_to_root() {
        let start = crate::fs::ops::resolve_dir(Path::new(".")).unwrap();
        let mut browser = Browser::new(start, true).refresh().unwrap();

        for _ in 0..64 {
            browser = browser.go_parent();
            assert!(!browser.current_dir().as_os_str().is_empty());
            browser = browser.refresh().unwrap();
        }
        assert_eq!(browser.current_dir().parent(), None);
    }
}
