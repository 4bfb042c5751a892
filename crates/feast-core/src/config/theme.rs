//! Theme configuration for Feast.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Complete theme configuration with per-component color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub sidebar: SidebarTheme,
    #[serde(default)]
    pub panel: PanelTheme,
    #[serde(default)]
    pub table: TableTheme,
    #[serde(default)]
    pub help: HelpTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Sidebar list colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarTheme {
    pub item_fg: String,
    pub selected_fg: String,
}

impl Default for SidebarTheme {
    fn default() -> Self {
        Self {
            item_fg: "white".to_string(),
            selected_fg: "yellow".to_string(),
        }
    }
}

/// Pane border colors, shared by the sidebar and the active panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelTheme {
    pub border_focused_fg: String,
    pub border_unfocused_fg: String,
    pub title_fg: String,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            border_focused_fg: "cyan".to_string(),
            border_unfocused_fg: "dark_gray".to_string(),
            title_fg: "white".to_string(),
        }
    }
}

/// File table colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableTheme {
    pub header_fg: String,
    pub dir_fg: String,
    pub file_fg: String,
    pub symlink_fg: String,
    pub selected_fg: String,
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            header_fg: "yellow".to_string(),
            dir_fg: "blue".to_string(),
            file_fg: "white".to_string(),
            symlink_fg: "cyan".to_string(),
            selected_fg: "black".to_string(),
        }
    }
}

/// Help legend colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpTheme {
    pub key_fg: String,
    pub desc_fg: String,
    pub heading_fg: String,
}

impl Default for HelpTheme {
    fn default() -> Self {
        Self {
            key_fg: "gray".to_string(),
            desc_fg: "dark_gray".to_string(),
            heading_fg: "white".to_string(),
        }
    }
}

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for unrecognised values.
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;

    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        hex if hex.starts_with('#') && hex.len() == 7 => {
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).unwrap_or(0)
            };
            Color::Rgb(channel(1..3), channel(3..5), channel(5..7))
        }
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_theme_groups() {
        let theme = Theme::default();
        assert_eq!(theme.sidebar.selected_fg, "yellow");
        assert_eq!(theme.panel.border_focused_fg, "cyan");
        assert_eq!(theme.panel.border_unfocused_fg, "dark_gray");
        assert_eq!(theme.table.dir_fg, "blue");
        assert_eq!(theme.help.key_fg, "gray");
    }

    #[test]
    fn focused_and_unfocused_borders_differ() {
        let theme = Theme::default();
        assert_ne!(
            parse_color(&theme.panel.border_focused_fg),
            parse_color(&theme.panel.border_unfocused_fg)
        );
    }

    #[test]
    fn parse_color_accepts_theme_spellings() {
        let cases = [
            ("cyan", Color::Cyan),
            ("DarkGray", Color::DarkGray),
            ("dark_grey", Color::DarkGray),
            ("LIGHT_GREEN", Color::LightGreen),
            ("magenta", Color::Magenta),
            ("#1e90ff", Color::Rgb(30, 144, 255)),
            ("plaid", Color::Reset),
            ("", Color::Reset),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_color(input), expected, "{input:?}");
        }
    }

    #[test]
    fn shipped_theme_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/theme.toml");
        let shipped = Theme::load(&path).unwrap();
        let defaults = Theme::default();
        assert_eq!(shipped.panel.border_focused_fg, defaults.panel.border_focused_fg);
        assert_eq!(shipped.table.dir_fg, defaults.table.dir_fg);
        assert_eq!(shipped.help.heading_fg, defaults.help.heading_fg);
    }

    #[test]
    fn load_partial_theme_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("theme.toml");
        fs::write(
            &path,
            r##"
[table]
dir_fg = "#00ff00"
header_fg = "yellow"
file_fg = "white"
symlink_fg = "cyan"
selected_fg = "black"
"##,
        )
        .unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme.table.dir_fg, "#00ff00");
        assert_eq!(theme.sidebar.selected_fg, "yellow");
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Theme::load(&tmp.path().join("nope.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }
}
