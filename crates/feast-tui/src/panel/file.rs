//! The file browser panel.
//!
//! Wraps a [`Browser`] and turns each focused key press into at most one
//! navigation step, a directory re-read, and a cursor move, in that order.
//! Read and stat failures come back as [`Event::OperationFailed`]; the
//! panel keeps showing its last good listing.

use std::path::PathBuf;
use std::time::SystemTime;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use feast_core::action::Action;
use feast_core::config::theme::Theme;
use feast_core::error::CoreResult;
use feast_core::event::{Event, Input};
use feast_core::fs::entry::FileEntry;
use feast_core::layout::Geometry;
use feast_core::nav::browser::Browser;
use ratatui::{layout::Rect, Frame};

use super::{sized_area, Panel};
use crate::ui::panel::{render_file_table, FileRow};

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct FilePanel {
    browser: Browser,
    date_format: String,
    focused: bool,
    width: u16,
    height: u16,
}

impl FilePanel {
    /// Creates a panel positioned at `start` and loads its first listing.
    ///
    /// An invalid `date_format` falls back to `%Y-%m-%d %H:%M:%S`.
    pub fn new(start: PathBuf, sort_entries: bool, date_format: &str) -> Self {
        let date_format = if is_valid_format(date_format) {
            date_format.to_string()
        } else {
            tracing::warn!(format = date_format, "invalid date format, using default");
            DEFAULT_DATE_FORMAT.to_string()
        };

        let browser = Browser::new(start, sort_entries);
        let browser = match browser.refresh() {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::error!(
                    path = %browser.current_dir().display(),
                    error = %e,
                    "initial directory read failed"
                );
                browser
            }
        };

        Self {
            browser,
            date_format,
            focused: false,
            width: 0,
            height: 0,
        }
    }

    #[cfg(test)]
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Formats the current listing as table rows.
    pub fn rows(&self) -> Vec<FileRow> {
        self.browser
            .entries()
            .iter()
            .map(|entry| file_row(entry, &self.date_format))
            .collect()
    }

    /// Applies the navigation part of `action`.
    ///
    /// Returns `Err` only for a failed stat on enter; the browser is left
    /// untouched in that case.
    fn navigate(&mut self, action: Action) -> CoreResult<()> {
        match action {
            Action::Select => {
                self.browser = self.browser.enter_selected()?;
            }
            Action::GoParent => {
                self.browser = self.browser.clone().go_parent();
            }
            Action::GoForward => {
                self.browser = self.browser.clone().go_forward();
            }
            _ => {}
        }
        Ok(())
    }

    /// Re-reads the current directory. On failure the previous rows stay.
    fn reload(&mut self) -> Option<Event> {
        match self.browser.refresh() {
            Ok(browser) => {
                self.browser = browser;
                None
            }
            Err(e) => Some(Event::OperationFailed {
                operation: "read directory".to_string(),
                error: e.to_string(),
            }),
        }
    }
}

impl Panel for FilePanel {
    fn activate(&mut self) -> Vec<Event> {
        self.reload().into_iter().collect()
    }

    fn handle(&mut self, input: &Input) -> Vec<Event> {
        if !self.focused {
            return Vec::new();
        }
        let Input::Key(action) = *input else {
            return Vec::new();
        };

        let mut events = Vec::new();
        if action == Action::ReleaseFocus {
            events.push(Event::FocusReleased);
        }

        if let Err(e) = self.navigate(action) {
            events.push(Event::OperationFailed {
                operation: "open entry".to_string(),
                error: e.to_string(),
            });
            return events;
        }

        events.extend(self.reload());

        match action {
            Action::CursorUp => self.browser = self.browser.clone().move_up(),
            Action::CursorDown => self.browser = self.browser.clone().move_down(),
            _ => {}
        }

        events
    }

    fn title(&self) -> String {
        self.browser.current_dir().display().to_string()
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        render_file_table(
            f,
            sized_area(area, self.geometry()),
            &self.rows(),
            self.browser.selected_index(),
            self.title(),
            theme,
            self.focused,
        );
    }

    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn geometry(&self) -> Geometry {
        Geometry::new(self.width, self.height)
    }
}

fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn format_time(time: Option<SystemTime>, format: &str) -> String {
    time.map(|t| DateTime::<Local>::from(t).format(format).to_string())
        .unwrap_or_default()
}

fn file_row(entry: &FileEntry, date_format: &str) -> FileRow {
    FileRow {
        cells: [
            entry.name().to_string(),
            format_time(entry.modified(), date_format),
            entry.kind().label().to_string(),
            entry.size().to_string(),
            entry.mode().to_string(),
        ],
        kind: entry.kind(),
        is_symlink: entry.is_symlink(),
    }
}
