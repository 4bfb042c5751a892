//! Directory navigation stack with a redo-style forward list.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Immutable directory history: the current directory plus the directories
/// that were left by ascending, most recently left first.
///
/// Every mutation returns a **new** `DirStack`, following the project-wide
/// immutability convention. The history is linear, not a tree: descending
/// into any directory discards the whole forward list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirStack {
    current: PathBuf,
    forward: VecDeque<PathBuf>,
}

impl DirStack {
    /// Creates a stack positioned at `start` with an empty forward list.
    pub fn new(start: PathBuf) -> Self {
        Self {
            current: start,
            forward: VecDeque::new(),
        }
    }

    /// Returns the current directory.
    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Returns the forward list, front first.
    pub fn forward_stack(&self) -> &VecDeque<PathBuf> {
        &self.forward
    }

    /// Returns `true` if [`DirStack::go_forward`] would move.
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Moves into `path` and clears the forward list.
    pub fn descend(&self, path: PathBuf) -> Self {
        Self {
            current: path,
            forward: VecDeque::new(),
        }
    }

    /// Moves to the parent directory, pushing the current one onto the
    /// front of the forward list. The root is its own parent.
    pub fn ascend(&self) -> Self {
        let parent = self
            .current
            .parent()
            .unwrap_or(&self.current)
            .to_path_buf();
        let mut forward = self.forward.clone();
        forward.push_front(self.current.clone());
        Self {
            current: parent,
            forward,
        }
    }

    /// Pops the front of the forward list into the current directory.
    /// Returns `None` when the forward list is empty.
    pub fn go_forward(&self) -> Option<Self> {
        let mut forward = self.forward.clone();
        let current = forward.pop_front()?;
        Some(Self { current, forward })
    }
}
