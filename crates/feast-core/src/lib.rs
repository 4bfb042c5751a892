//! Feast core library: UI-agnostic dashboard logic.
//!
//! `feast-core` provides the types the terminal frontend (`feast-tui`) is
//! built on: routes and focus targets, the directory navigation stack, the
//! file browser state, pane geometry, actions, and configuration. Nothing
//! here depends on a terminal backend.
//!
//! # Modules
//!
//! - [`fs`]: File system snapshots: [`FileEntry`], directory reading, `stat`.
//! - [`nav`]: Routes, the directory stack, and the [`Browser`] state.
//! - [`layout`]: Viewport geometry and pane size arithmetic.
//! - [`action`]: The [`Action`] enum and its registry.
//! - [`config`]: User-facing configuration (settings, keymaps, themes).
//! - [`event`]: Input and event types for controller ↔ pane communication.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod layout;
pub mod nav;

pub use error::{CoreError, CoreResult};
pub use event::{Event, Input};
pub use fs::entry::FileEntry;
pub use fs::ops::{read_directory, resolve_dir, sort_by_name, stat};
pub use fs::EntryKind;
pub use layout::{pane_layout, Geometry, PaneLayout, BORDER_OVERHEAD};
pub use nav::browser::Browser;
pub use nav::history::DirStack;
pub use nav::route::{FocusTarget, Route};

pub use action::{Action, ActionCategory, ActionDescriptor, ActionRegistry};
pub use config::keymap::Keymap;
pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};
