//! Unified action system for Feast.
//!
//! Every user-triggerable action is represented by the [`Action`] enum.
//! Key names resolve to actions through the keymap; [`ActionRegistry`]
//! provides the metadata (id, name, legend text, category) used to parse
//! `keymap.toml` and to build the help legend.

/// Every user-triggerable action in Feast.
///
/// Variants carry no parameters; context is determined at dispatch time
/// by whichever pane has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    CursorUp,
    CursorDown,
    Select,
    GoParent,
    GoForward,
    // Focus
    ToggleFocus,
    ReleaseFocus,
    // System
    ToggleHelp,
    Quit,
}

/// Broad category for grouping actions in the help legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Focus,
    System,
}

impl ActionCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Focus => "Focus",
            Self::System => "System",
        }
    }
}

/// Metadata for a single action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Snake-case identifier used in `keymap.toml` (e.g. `"cursor_up"`).
    pub id: &'static str,
    /// Human-readable name (e.g. `"Cursor Up"`).
    pub name: &'static str,
    /// Short legend text (e.g. `"move up"`).
    pub description: &'static str,
    pub category: ActionCategory,
}

/// Registry of all available actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl ActionRegistry {
    /// Builds the registry containing every known action.
    pub fn new() -> Self {
        let descriptors = vec![
            ActionDescriptor {
                action: Action::CursorUp,
                id: "cursor_up",
                name: "Cursor Up",
                description: "move up",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::CursorDown,
                id: "cursor_down",
                name: "Cursor Down",
                description: "move down",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::Select,
                id: "select",
                name: "Select",
                description: "open",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::GoParent,
                id: "go_parent",
                name: "Go Parent",
                description: "parent dir",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::GoForward,
                id: "go_forward",
                name: "Go Forward",
                description: "forward",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::ToggleFocus,
                id: "toggle_focus",
                name: "Toggle Focus",
                description: "switch pane",
                category: ActionCategory::Focus,
            },
            ActionDescriptor {
                action: Action::ReleaseFocus,
                id: "release_focus",
                name: "Release Focus",
                description: "back to sidebar",
                category: ActionCategory::Focus,
            },
            ActionDescriptor {
                action: Action::ToggleHelp,
                id: "toggle_help",
                name: "Toggle Help",
                description: "toggle help",
                category: ActionCategory::System,
            },
            ActionDescriptor {
                action: Action::Quit,
                id: "quit",
                name: "Quit",
                description: "quit",
                category: ActionCategory::System,
            },
        ];
        Self { descriptors }
    }

    /// Returns all descriptors.
    pub fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }

    /// Finds an action by its string id (for keymap.toml parsing).
    pub fn find_by_id(&self, id: &str) -> Option<Action> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.action)
    }

    /// Returns the descriptor for a given action.
    pub fn descriptor_for(&self, action: Action) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.action == action)
    }

    /// Returns the actions in `category`, in registry order.
    pub fn in_category(&self, category: ActionCategory) -> Vec<Action> {
        self.descriptors
            .iter()
            .filter(|d| d.category == category)
            .map(|d| d.action)
            .collect()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
