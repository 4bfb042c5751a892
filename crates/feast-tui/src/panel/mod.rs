//! Content panels shown to the right of the sidebar.
//!
//! The controller owns one boxed [`Panel`] per route and only ever talks to
//! the active one through this trait.

pub mod file;
pub mod placeholder;

use feast_core::config::theme::Theme;
use feast_core::event::{Event, Input};
use feast_core::layout::{Geometry, BORDER_OVERHEAD};
use ratatui::{layout::Rect, Frame};

/// A focusable, renderable sub-view bound to a route.
pub trait Panel {
    /// Handles one input and returns the events the controller must consume.
    fn handle(&mut self, input: &Input) -> Vec<Event>;

    /// Called when the panel becomes the active route, after its geometry
    /// has been assigned. Runs whether or not the panel is focused.
    fn activate(&mut self) -> Vec<Event>;

    /// Heading shown in the panel's border.
    fn title(&self) -> String;

    /// Draws the panel, border included, into `area`. Never mutates state.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Sets the inner width the panel may draw its content into.
    fn set_width(&mut self, width: u16);

    /// Sets the inner height the panel may draw its content into.
    fn set_height(&mut self, height: u16);

    fn focus(&mut self);

    fn blur(&mut self);

    fn is_focused(&self) -> bool;

    /// Returns the last assigned inner size.
    fn geometry(&self) -> Geometry;
}

/// Shrinks `area` to an assigned inner size plus its border.
pub(crate) fn sized_area(area: Rect, geometry: Geometry) -> Rect {
    Rect {
        width: geometry
            .width
            .saturating_add(BORDER_OVERHEAD)
            .min(area.width),
        height: geometry
            .height
            .saturating_add(BORDER_OVERHEAD)
            .min(area.height),
        ..area
    }
}
