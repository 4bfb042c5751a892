//! Root controller: owns every pane and routes input between them.

use std::collections::HashMap;
use std::path::PathBuf;

use feast_core::action::{Action, ActionRegistry};
use feast_core::config::keymap::Keymap;
use feast_core::config::settings::Config;
use feast_core::config::theme::Theme;
use feast_core::event::{Event, Input};
use feast_core::layout::{pane_layout, Geometry};
use feast_core::nav::route::{FocusTarget, Route};

use crate::panel::file::FilePanel;
use crate::panel::placeholder::PlaceholderPanel;
use crate::panel::Panel;
use crate::ui::help::HelpOverlay;
use crate::ui::sidebar::Sidebar;

/// Dashboard state: sidebar, help legend, one panel per route, the active
/// route, keyboard focus, and the last seen viewport.
///
/// Focus target `ActivePanel` holds exactly when the active panel reports
/// itself focused; every transition below keeps the two in step.
pub struct App {
    sidebar: Sidebar,
    help: HelpOverlay,
    panels: HashMap<Route, Box<dyn Panel>>,
    route: Route,
    focus: FocusTarget,
    viewport: Geometry,
    sidebar_width: u16,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Builds the dashboard with the file panel rooted at `start_dir`.
    pub fn new(start_dir: PathBuf, config: &Config, keymap: &Keymap, theme: Theme) -> Self {
        let panels: HashMap<Route, Box<dyn Panel>> = Route::ALL
            .into_iter()
            .map(|route| {
                let panel: Box<dyn Panel> = match route {
                    Route::File => Box::new(FilePanel::new(
                        start_dir.clone(),
                        config.general.sort_entries,
                        &config.ui.date_format,
                    )),
                    _ => Box::new(PlaceholderPanel::new(route)),
                };
                (route, panel)
            })
            .collect();

        Self {
            sidebar: Sidebar::default(),
            help: HelpOverlay::new(keymap, &ActionRegistry::new()),
            panels,
            route: Route::Home,
            focus: FocusTarget::Sidebar,
            viewport: Geometry::default(),
            sidebar_width: config.ui.sidebar_width,
            theme,
            should_quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn viewport(&self) -> Geometry {
        self.viewport
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn help(&self) -> &HelpOverlay {
        &self.help
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Outer sidebar width, border included.
    pub fn sidebar_width(&self) -> u16 {
        self.sidebar_width
    }

    /// Returns the panel registered for `route`.
    ///
    /// # Panics
    ///
    /// Panics if no panel is registered, which cannot happen for routes
    /// built from [`Route::ALL`].
    pub fn panel(&self, route: Route) -> &dyn Panel {
        match self.panels.get(&route) {
            Some(panel) => panel.as_ref(),
            None => panic!("no panel registered for route {route}"),
        }
    }

    pub fn active_panel(&self) -> &dyn Panel {
        self.panel(self.route)
    }

    fn active_panel_mut(&mut self) -> &mut dyn Panel {
        let route = self.route;
        match self.panels.get_mut(&route) {
            Some(panel) => panel.as_mut(),
            None => panic!("no panel registered for route {route}"),
        }
    }

    /// Dispatches one input and consumes every event it produces.
    pub fn handle(&mut self, input: Input) {
        tracing::debug!(?input, route = %self.route, focus = ?self.focus, "dispatch");

        // The legend sees everything, before any routing decision.
        self.help.handle(&input);

        let events = match input {
            Input::Resize { width, height } => {
                self.viewport = Geometry::new(width, height);
                self.apply_layout();
                Vec::new()
            }
            Input::Key(action) => self.handle_key(action, &input),
        };

        self.consume(events);
    }

    fn handle_key(&mut self, action: Action, input: &Input) -> Vec<Event> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Vec::new()
            }
            Action::ToggleFocus => {
                self.toggle_focus();
                Vec::new()
            }
            Action::ToggleHelp => {
                // Legend height changed; panes shrink or grow with it.
                self.apply_layout();
                Vec::new()
            }
            _ => match self.focus {
                FocusTarget::Sidebar => self.handle_sidebar_key(action),
                FocusTarget::ActivePanel => self.active_panel_mut().handle(input),
            },
        }
    }

    fn handle_sidebar_key(&mut self, action: Action) -> Vec<Event> {
        match action {
            Action::Select => self
                .sidebar
                .selected_route()
                .map(Event::Navigate)
                .into_iter()
                .collect(),
            _ => {
                self.sidebar.handle(action);
                Vec::new()
            }
        }
    }

    fn consume(&mut self, events: Vec<Event>) {
        for event in events {
            match event {
                Event::Navigate(route) => self.switch_route(route),
                Event::FocusReleased => {
                    if self.focus == FocusTarget::ActivePanel {
                        self.toggle_focus();
                    }
                }
                Event::OperationFailed { operation, error } => {
                    tracing::error!(route = %self.route, %operation, %error, "operation failed");
                }
            }
        }
    }

    /// Flips the focus target and focuses or blurs the active panel to match.
    fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
        let focused = self.focus == FocusTarget::ActivePanel;
        let panel = self.active_panel_mut();
        if focused {
            panel.focus();
        } else {
            panel.blur();
        }
        tracing::debug!(focus = ?self.focus, "focus toggled");
    }

    /// Makes `route` active, pushes the current geometry into it, and lets
    /// it reload.
    ///
    /// The focus target is kept; when it is the panel, focus moves from the
    /// outgoing panel to the incoming one.
    fn switch_route(&mut self, route: Route) {
        let from = self.route;
        let panel_focused = self.focus == FocusTarget::ActivePanel;
        if panel_focused {
            self.active_panel_mut().blur();
        }
        self.route = route;
        if panel_focused {
            self.active_panel_mut().focus();
        }
        self.apply_layout();
        tracing::debug!(%from, to = %route, "route switched");

        let events = self.active_panel_mut().activate();
        self.consume(events);
    }

    /// Records the frame size as the viewport and re-applies the layout.
    pub fn observe_viewport(&mut self, viewport: Geometry) {
        self.viewport = viewport;
        self.apply_layout();
    }

    /// Pushes derived sizes to the sidebar and the active panel only.
    fn apply_layout(&mut self) {
        let layout = pane_layout(self.viewport(), self.sidebar_width, self.help.height());
        self.sidebar
            .set_size(layout.sidebar.width, layout.sidebar.height);
        let panel = self.active_panel_mut();
        panel.set_width(layout.panel.width);
        panel.set_height(layout.panel.height);
    }
}
