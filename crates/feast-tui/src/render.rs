use feast_core::layout::Geometry;
use feast_core::nav::route::FocusTarget;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

/// Composes the full UI layout for one frame.
///
/// Sidebar and active panel sit side by side with the help legend beneath
/// them. The frame size is taken as the current viewport, so pane sizes
/// are recomputed on every call.
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.observe_viewport(Geometry::new(area.width, area.height));
    let app = &*app;
    let theme = app.theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(app.help().height()),
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app.sidebar_width()),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    app.sidebar()
        .render(f, panes[0], theme, app.focus() == FocusTarget::Sidebar);
    app.active_panel().render(f, panes[1], theme);
    app.help().render(f, rows[1], theme);
}
