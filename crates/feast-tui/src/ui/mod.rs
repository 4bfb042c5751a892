//! UI widget modules for the TUI frontend.
//!
//! Each sub-module renders a single UI component using ratatui.

pub mod help;
pub mod panel;
pub mod sidebar;
