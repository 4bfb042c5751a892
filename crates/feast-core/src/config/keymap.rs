//! Key binding configuration.
//!
//! Key bindings map key names (e.g. `"j"`, `"Enter"`, `"Ctrl+c"`) to
//! [`Action`] values. Several keys may share one action.
//!
//! TOML files use string action identifiers (e.g. `"cursor_down"`); these
//! are resolved to [`Action`] via [`ActionRegistry::find_by_id`] at load time.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionRegistry};
use crate::error::{CoreError, CoreResult};

/// Raw TOML representation, resolved into a [`Keymap`] after parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawKeymap {
    #[serde(default)]
    bindings: HashMap<String, String>,
}

/// Complete set of key bindings.
///
/// Stores bindings as a `HashMap<String, Action>` for O(1) lookup, plus a
/// reverse map used to label the help legend.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
    reverse: HashMap<Action, Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Navigation
        bindings.insert("Up".to_string(), Action::CursorUp);
        bindings.insert("k".to_string(), Action::CursorUp);
        bindings.insert("Down".to_string(), Action::CursorDown);
        bindings.insert("j".to_string(), Action::CursorDown);
        bindings.insert("Enter".to_string(), Action::Select);
        bindings.insert("Left".to_string(), Action::GoParent);
        bindings.insert("h".to_string(), Action::GoParent);
        bindings.insert("Right".to_string(), Action::GoForward);
        bindings.insert("l".to_string(), Action::GoForward);

        // Focus
        bindings.insert("Tab".to_string(), Action::ToggleFocus);
        bindings.insert("Esc".to_string(), Action::ReleaseFocus);

        // System
        bindings.insert("?".to_string(), Action::ToggleHelp);
        bindings.insert("q".to_string(), Action::Quit);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);

        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }
}

/// Builds the reverse mapping from Action → Vec<key string>.
fn build_reverse(bindings: &HashMap<String, Action>) -> HashMap<Action, Vec<String>> {
    let mut reverse: HashMap<Action, Vec<String>> = HashMap::new();
    for (key, action) in bindings {
        reverse.entry(*action).or_default().push(key.clone());
    }
    // Sort keys for deterministic display
    for keys in reverse.values_mut() {
        keys.sort();
    }
    reverse
}

impl Keymap {
    /// Loads key bindings from a TOML file at `path`.
    ///
    /// String action identifiers are resolved via `ActionRegistry`.
    /// Unknown action strings are silently ignored. Loaded bindings
    /// replace the defaults entirely.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
        let raw: RawKeymap =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    /// Converts a raw (string-based) keymap into a resolved one.
    fn from_raw(raw: RawKeymap) -> Self {
        let registry = ActionRegistry::new();
        let bindings: HashMap<String, Action> = raw
            .bindings
            .into_iter()
            .filter_map(|(key, action_id)| {
                registry.find_by_id(&action_id).map(|action| (key, action))
            })
            .collect();
        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }

    /// Returns the action mapped to `key`, or `None` if unbound.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Returns the key(s) bound to a given action, sorted.
    pub fn keys_for_action(&self, action: Action) -> Option<&[String]> {
        self.reverse.get(&action).map(|v| v.as_slice())
    }

    /// Returns all bindings.
    pub fn bindings(&self) -> &HashMap<String, Action> {
        &self.bindings
    }
}
