//! Viewport geometry and the pane size arithmetic derived from it.
//!
//! Sizes only ever flow downward: the controller owns the viewport and
//! hands each pane the inner size it may draw into.

/// Rows/columns consumed by a pane's border (one on each side).
pub const BORDER_OVERHEAD: u16 = 2;

/// A width/height pair in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
}

impl Geometry {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Inner sizes of the sidebar and the active panel for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub sidebar: Geometry,
    pub panel: Geometry,
}

/// Splits `viewport` into sidebar and panel inner sizes.
///
/// `sidebar_width` is the sidebar's outer width including its border;
/// `help_height` is the number of rows the help legend takes below both
/// panes. Undersized viewports saturate to zero instead of wrapping.
pub fn pane_layout(viewport: Geometry, sidebar_width: u16, help_height: u16) -> PaneLayout {
    let content_height = viewport
        .height
        .saturating_sub(help_height)
        .saturating_sub(BORDER_OVERHEAD);

    PaneLayout {
        sidebar: Geometry::new(sidebar_width.saturating_sub(BORDER_OVERHEAD), content_height),
        panel: Geometry::new(
            viewport
                .width
                .saturating_sub(sidebar_width)
                .saturating_sub(BORDER_OVERHEAD),
            content_height,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_gets_remaining_width_and_height() {
        let layout = pane_layout(Geometry::new(100, 40), 14, 1);
        assert_eq!(layout.panel, Geometry::new(84, 37));
        assert_eq!(layout.sidebar, Geometry::new(12, 37));
    }

    #[test]
    fn taller_help_shrinks_both_panes() {
        let short = pane_layout(Geometry::new(80, 24), 14, 1);
        let tall = pane_layout(Geometry::new(80, 24), 14, 5);
        assert_eq!(short.panel.height - tall.panel.height, 4);
        assert_eq!(short.sidebar.height - tall.sidebar.height, 4);
        assert_eq!(short.panel.width, tall.panel.width);
    }

    #[test]
    fn tiny_viewport_saturates() {
        let layout = pane_layout(Geometry::new(5, 2), 14, 3);
        assert_eq!(layout.panel, Geometry::new(0, 0));
        assert_eq!(layout.sidebar.height, 0);
    }

    #[test]
    fn default_geometry_is_zero() {
        assert_eq!(Geometry::default(), Geometry::new(0, 0));
    }
}
