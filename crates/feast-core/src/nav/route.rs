//! Top-level navigable categories and keyboard focus targets.

use std::fmt;

/// Identifier for a navigable category. Each route owns exactly one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Network,
    Firewall,
    System,
    File,
    Application,
}

impl Route {
    /// Every route, in registration order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Network,
        Route::Firewall,
        Route::System,
        Route::File,
        Route::Application,
    ];

    /// Routes listed in the sidebar, top to bottom.
    pub const SIDEBAR: [Route; 5] = [
        Route::Network,
        Route::Firewall,
        Route::System,
        Route::File,
        Route::Application,
    ];

    /// Path-like identifier used in logs.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Network => "/network",
            Self::Firewall => "/network/firewall",
            Self::System => "/system",
            Self::File => "/file",
            Self::Application => "/application",
        }
    }

    /// Human-readable label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Network => "Network",
            Self::Firewall => "Firewall",
            Self::System => "System",
            Self::File => "File",
            Self::Application => "Application",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Which pane currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Sidebar,
    ActivePanel,
}

impl FocusTarget {
    /// Returns the other target.
    pub fn toggled(self) -> Self {
        match self {
            Self::Sidebar => Self::ActivePanel,
            Self::ActivePanel => Self::Sidebar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sidebar_routes_are_registered() {
        let all: HashSet<Route> = Route::ALL.into_iter().collect();
        for route in Route::SIDEBAR {
            assert!(all.contains(&route), "{route} missing from Route::ALL");
        }
    }

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<&str> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
    }

    #[test]
    fn display_uses_path() {
        assert_eq!(Route::File.to_string(), "/file");
        assert_eq!(Route::Home.to_string(), "/");
    }

    #[test]
    fn focus_defaults_to_sidebar() {
        assert_eq!(FocusTarget::default(), FocusTarget::Sidebar);
    }

    #[test]
    fn focus_toggle_flips() {
        assert_eq!(FocusTarget::Sidebar.toggled(), FocusTarget::ActivePanel);
        assert_eq!(FocusTarget::ActivePanel.toggled(), FocusTarget::Sidebar);
    }
}
