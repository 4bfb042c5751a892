//! Configuration management for Feast.
//!
//! User preferences ([`settings::Config`]), key bindings ([`keymap::Keymap`])
//! and colors ([`theme::Theme`]) are stored as TOML files and loaded at
//! startup.

pub mod keymap;
pub mod settings;
pub mod theme;
