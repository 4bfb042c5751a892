//! Sidebar category list.
//!
//! Renders the fixed list of routes as a `List` widget. The highlight moves
//! with the cursor keys; activating an item is decided by the controller.

use feast_core::action::Action;
use feast_core::config::theme::{parse_color, Theme};
use feast_core::layout::Geometry;
use feast_core::nav::route::Route;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::ui::panel::pane_block;

/// Ordered, selectable list of sidebar routes.
#[derive(Debug, Clone)]
pub struct Sidebar {
    items: Vec<Route>,
    selected: usize,
    width: u16,
    height: u16,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new(Route::SIDEBAR.to_vec())
    }
}

impl Sidebar {
    pub fn new(items: Vec<Route>) -> Self {
        Self {
            items,
            selected: 0,
            width: 0,
            height: 0,
        }
    }

    #[cfg(test)]
    pub fn items(&self) -> &[Route] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the highlighted route, or `None` for an empty list.
    pub fn selected_route(&self) -> Option<Route> {
        self.items.get(self.selected).copied()
    }

    /// Moves the highlight by `delta` rows, clamped to the list bounds.
    pub fn move_by(&mut self, delta: isize) {
        let last = self.items.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    #[cfg(test)]
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.width, self.height)
    }

    /// Applies a cursor action. Everything else is ignored.
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::CursorUp => self.move_by(-1),
            Action::CursorDown => self.move_by(1),
            _ => {}
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let item_style = Style::default().fg(parse_color(&theme.sidebar.item_fg));
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|route| ListItem::new(format!(" {}", route.title())).style(item_style))
            .collect();

        let list = List::new(items)
            .block(pane_block(String::new(), focused, theme))
            .highlight_style(
                Style::default()
                    .fg(parse_color(&theme.sidebar.selected_fg))
                    .add_modifier(Modifier::REVERSED),
            );

        let mut state = ListState::default();
        if !self.items.is_empty() {
            state.select(Some(self.selected));
        }

        f.render_stateful_widget(list, area, &mut state);
    }
}
