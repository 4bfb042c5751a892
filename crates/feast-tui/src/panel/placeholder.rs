//! Stand-in panel for categories that have no content yet.

use feast_core::action::Action;
use feast_core::config::theme::{parse_color, Theme};
use feast_core::event::{Event, Input};
use feast_core::layout::Geometry;
use feast_core::nav::route::Route;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{sized_area, Panel};
use crate::ui::panel::pane_block;

/// Panel for an unimplemented route.
///
/// When focused, `Select` sends the user back to [`Route::Home`]. The Home
/// placeholder itself ignores every key except focus release.
pub struct PlaceholderPanel {
    route: Route,
    focused: bool,
    width: u16,
    height: u16,
}

impl PlaceholderPanel {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            focused: false,
            width: 0,
            height: 0,
        }
    }

    fn message(&self) -> &'static str {
        match self.route {
            Route::Home => "Welcome to feast. Pick a category from the sidebar.",
            _ => "Building, press Enter to go home...",
        }
    }
}

impl Panel for PlaceholderPanel {
    fn activate(&mut self) -> Vec<Event> {
        Vec::new()
    }

    fn handle(&mut self, input: &Input) -> Vec<Event> {
        if !self.focused {
            return Vec::new();
        }
        match input {
            Input::Key(Action::ReleaseFocus) => vec![Event::FocusReleased],
            Input::Key(Action::Select) if self.route != Route::Home => {
                vec![Event::Navigate(Route::Home)]
            }
            _ => Vec::new(),
        }
    }

    fn title(&self) -> String {
        self.route.title().to_string()
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = Paragraph::new(self.message())
            .style(
                Style::default()
                    .fg(parse_color(&theme.help.desc_fg))
                    .add_modifier(Modifier::ITALIC),
            )
            .wrap(Wrap { trim: true })
            .block(pane_block(self.title(), self.focused, theme));
        f.render_widget(text, sized_area(area, self.geometry()));
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
