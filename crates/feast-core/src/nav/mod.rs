//! Navigation logic for Feast.
//!
//! This module contains the top-level [`route::Route`] and
//! [`route::FocusTarget`] types, the directory [`history::DirStack`], and the
//! UI-agnostic file [`browser::Browser`].

pub mod browser;
pub mod history;
pub mod route;
