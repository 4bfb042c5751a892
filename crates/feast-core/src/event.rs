//! Event types for communication between the controller and its panes.
//!
//! The event loop translates terminal input into [`Input`]s, which the
//! controller routes to exactly one pane. Panes answer with [`Event`]s,
//! which the controller consumes before the dispatch finishes.

use crate::action::Action;
use crate::nav::route::Route;

/// Input flowing **loop → controller → pane**.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A key press already resolved through the keymap.
    Key(Action),
    /// The terminal was resized to `width` × `height` cells.
    Resize { width: u16, height: u16 },
}

/// A notification a pane sends back to the controller.
///
/// Events flow **pane → controller**. Panes never mutate controller state
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Switch the active panel to the given route.
    Navigate(Route),
    /// The pane wants keyboard focus handed back to the sidebar.
    FocusReleased,
    /// A non-fatal operation failed; the pane kept its previous state.
    OperationFailed {
        /// Human-readable description of the operation.
        operation: String,
        /// The error message.
        error: String,
    },
}
