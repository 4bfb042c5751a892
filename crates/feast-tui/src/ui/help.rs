//! Key binding legend shown beneath the panes.
//!
//! The legend is built once from the keymap and the action registry. It
//! shows a one-line summary by default and a column per action category
//! when expanded. Entries that don't fit the last known terminal width are
//! dropped and replaced with an ellipsis.

use feast_core::action::{Action, ActionCategory, ActionRegistry};
use feast_core::config::keymap::Keymap;
use feast_core::config::theme::{parse_color, Theme};
use feast_core::event::Input;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SEPARATOR: &str = " • ";
const ELLIPSIS: &str = "…";
const COLUMN_GAP: u16 = 4;

/// Actions listed in the collapsed legend.
const SHORT_ACTIONS: [Action; 2] = [Action::ToggleHelp, Action::Quit];

/// Categories shown as columns in the expanded legend, left to right.
const COLUMNS: [ActionCategory; 3] = [
    ActionCategory::Navigation,
    ActionCategory::Focus,
    ActionCategory::System,
];

/// A single "keys → description" legend entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub keys: String,
    pub description: &'static str,
}

impl HelpEntry {
    fn width(&self) -> usize {
        self.keys.chars().count() + 1 + self.description.chars().count()
    }
}

#[derive(Debug, Clone)]
struct HelpColumn {
    heading: &'static str,
    entries: Vec<HelpEntry>,
}

impl HelpColumn {
    fn width(&self) -> u16 {
        let widest = self
            .entries
            .iter()
            .map(HelpEntry::width)
            .max()
            .unwrap_or(0)
            .max(self.heading.chars().count());
        u16::try_from(widest).unwrap_or(u16::MAX)
    }
}

/// Collapsible key binding legend.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    short: Vec<HelpEntry>,
    columns: Vec<HelpColumn>,
    expanded: bool,
    width: u16,
}

impl HelpOverlay {
    /// Builds the legend. Actions with no bound key are left out.
    pub fn new(keymap: &Keymap, registry: &ActionRegistry) -> Self {
        let short = SHORT_ACTIONS
            .iter()
            .filter_map(|&action| help_entry(action, keymap, registry))
            .collect();

        let columns = COLUMNS
            .iter()
            .map(|&category| HelpColumn {
                heading: category.label(),
                entries: registry
                    .in_category(category)
                    .into_iter()
                    .filter_map(|action| help_entry(action, keymap, registry))
                    .collect(),
            })
            .filter(|column| !column.entries.is_empty())
            .collect();

        Self {
            short,
            columns,
            expanded: false,
            width: 0,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Last terminal width seen through a resize.
    pub fn width(&self) -> u16 {
        self.width
    }

    #[cfg(test)]
    pub fn short_entries(&self) -> &[HelpEntry] {
        &self.short
    }

    /// Sees every controller input: flips expansion on toggle-help and
    /// records the width on resize.
    pub fn handle(&mut self, input: &Input) {
        match *input {
            Input::Key(Action::ToggleHelp) => self.expanded = !self.expanded,
            Input::Resize { width, .. } => self.width = width,
            Input::Key(_) => {}
        }
    }

    /// Rows the legend occupies: one when collapsed, otherwise the tallest
    /// column including its heading.
    pub fn height(&self) -> u16 {
        if !self.expanded {
            return 1;
        }
        let tallest = self
            .columns
            .iter()
            .map(|c| c.entries.len() + 1)
            .max()
            .unwrap_or(1);
        u16::try_from(tallest).unwrap_or(u16::MAX)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let max_width = match self.width() {
            0 => area.width,
            width => width.min(area.width),
        };
        if self.is_expanded() {
            self.render_full(f, area, max_width, theme);
        } else {
            let line = short_line(&self.short, usize::from(max_width), theme);
            f.render_widget(Paragraph::new(line), area);
        }
    }

    fn render_full(&self, f: &mut Frame, area: Rect, max_width: u16, theme: &Theme) {
        let mut used = 0u16;
        let mut shown = Vec::new();
        for column in &self.columns {
            let needed = column.width() + if shown.is_empty() { 0 } else { COLUMN_GAP };
            if used + needed > max_width {
                break;
            }
            used += needed;
            shown.push(column);
        }

        let mut constraints: Vec<Constraint> = Vec::new();
        for (i, column) in shown.iter().enumerate() {
            if i > 0 {
                constraints.push(Constraint::Length(COLUMN_GAP));
            }
            constraints.push(Constraint::Length(column.width()));
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (i, column) in shown.iter().enumerate() {
            f.render_widget(Paragraph::new(column_lines(column, theme)), chunks[i * 2]);
        }
        if shown.len() < self.columns.len() {
            let rest = chunks[chunks.len() - 1];
            f.render_widget(
                Paragraph::new(Span::styled(ELLIPSIS, desc_style(theme))),
                rest,
            );
        }
    }
}

fn help_entry(action: Action, keymap: &Keymap, registry: &ActionRegistry) -> Option<HelpEntry> {
    let keys = keymap.keys_for_action(action)?;
    let descriptor = registry.descriptor_for(action)?;
    Some(HelpEntry {
        keys: keys.iter().map(|k| key_label(k)).collect::<Vec<_>>().join("/"),
        description: descriptor.description,
    })
}

/// Display form of a key name; arrows are drawn as glyphs.
fn key_label(key: &str) -> &str {
    match key {
        "Up" => "↑",
        "Down" => "↓",
        "Left" => "←",
        "Right" => "→",
        other => other,
    }
}

fn key_style(theme: &Theme) -> Style {
    Style::default().fg(parse_color(&theme.help.key_fg))
}

fn desc_style(theme: &Theme) -> Style {
    Style::default().fg(parse_color(&theme.help.desc_fg))
}

fn short_line(entries: &[HelpEntry], max_width: usize, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    let mut used = 0;
    for (i, entry) in entries.iter().enumerate() {
        let sep = if i == 0 { 0 } else { SEPARATOR.chars().count() };
        if used + sep + entry.width() > max_width {
            let lead = if i == 0 { "" } else { " " };
            if used + lead.len() + 1 <= max_width {
                spans.push(Span::styled(format!("{lead}{ELLIPSIS}"), desc_style(theme)));
            }
            break;
        }
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, desc_style(theme)));
        }
        spans.push(Span::styled(entry.keys.clone(), key_style(theme)));
        spans.push(Span::styled(format!(" {}", entry.description), desc_style(theme)));
        used += sep + entry.width();
    }
    Line::from(spans)
}

fn column_lines(column: &HelpColumn, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        column.heading,
        Style::default()
            .fg(parse_color(&theme.help.heading_fg))
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(column.entries.iter().map(|entry| {
        Line::from(vec![
            Span::styled(entry.keys.clone(), key_style(theme)),
            Span::styled(format!(" {}", entry.description), desc_style(theme)),
        ])
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::fs;
    use tempfile::TempDir;

    fn overlay() -> HelpOverlay {
        HelpOverlay::new(&Keymap::default(), &ActionRegistry::new())
    }

    fn rendered(help: &HelpOverlay, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| help.render(f, f.area(), &Theme::default()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn starts_collapsed_with_one_row() {
        let help = overlay();
        assert!(!help.is_expanded());
        assert_eq!(help.height(), 1);
    }

    #[test]
    fn short_legend_lists_help_and_quit() {
        let help = overlay();
        let entries = help.short_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].keys, "?");
        assert_eq!(entries[0].description, "toggle help");
        assert_eq!(entries[1].keys, "Ctrl+c/q");
        assert_eq!(entries[1].description, "quit");
    }

    #[test]
    fn toggle_expands_to_tallest_column() {
        let mut help = overlay();
        help.handle(&Input::Key(Action::ToggleHelp));
        assert!(help.is_expanded());
        // Navigation: heading + 5 actions
        assert_eq!(help.height(), 6);

        help.handle(&Input::Key(Action::ToggleHelp));
        assert_eq!(help.height(), 1);
    }

    #[test]
    fn other_keys_do_not_toggle() {
        let mut help = overlay();
        help.handle(&Input::Key(Action::Quit));
        help.handle(&Input::Key(Action::CursorDown));
        assert!(!help.is_expanded());
    }

    #[test]
    fn resize_records_width() {
        let mut help = overlay();
        help.handle(&Input::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!(help.width(), 120);
        assert!(!help.is_expanded());
    }

    #[test]
    fn arrow_keys_render_as_glyphs() {
        assert_eq!(key_label("Up"), "↑");
        assert_eq!(key_label("Right"), "→");
        assert_eq!(key_label("k"), "k");
    }

    #[test]
    fn unbound_actions_are_omitted() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(&path, "[bindings]\nx = \"quit\"\n").unwrap();
        let keymap = Keymap::load(&path).unwrap();

        let mut help = HelpOverlay::new(&keymap, &ActionRegistry::new());
        assert_eq!(help.short_entries().len(), 1);
        assert_eq!(help.short_entries()[0].keys, "x");

        help.handle(&Input::Key(Action::ToggleHelp));
        // Only the System column remains: heading + quit
        assert_eq!(help.height(), 2);
    }

    #[test]
    fn renders_short_legend() {
        let help = overlay();
        let lines = rendered(&help, 60, 1);
        assert!(lines[0].starts_with("? toggle help • Ctrl+c/q quit"));
    }

    #[test]
    fn narrow_width_truncates_with_ellipsis() {
        let mut help = overlay();
        help.handle(&Input::Resize {
            width: 20,
            height: 10,
        });
        let lines = rendered(&help, 60, 1);
        assert!(lines[0].starts_with("? toggle help …"));
        assert!(!lines[0].contains("quit"));
    }

    #[test]
    fn renders_expanded_columns() {
        let mut help = overlay();
        help.handle(&Input::Key(Action::ToggleHelp));
        let lines = rendered(&help, 100, 6);
        assert!(lines[0].contains("Navigation"));
        assert!(lines[0].contains("Focus"));
        assert!(lines[0].contains("System"));
        assert!(lines[1].contains("↑/k move up"));
    }

    #[test]
    fn render_is_idempotent() {
        let mut help = overlay();
        help.handle(&Input::Key(Action::ToggleHelp));
        assert_eq!(rendered(&help, 80, 6), rendered(&help, 80, 6));
    }
}
