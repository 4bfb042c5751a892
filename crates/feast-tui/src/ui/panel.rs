//! Pane chrome and file table rendering with theme support.
//!
//! Every pane is drawn inside a bordered [`Block`] whose color follows
//! keyboard focus. The file table is a stateful `Table` widget; its state
//! is rebuilt on each render so drawing never mutates the caller.

use feast_core::config::theme::{parse_color, Theme};
use feast_core::fs::EntryKind;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

/// Column titles of the file table, in display order.
pub const FILE_COLUMNS: [&str; 5] = ["Name", "Date Modified", "Type", "Size", "Mode"];

/// One pre-formatted row of the file table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub cells: [String; 5],
    pub kind: EntryKind,
    pub is_symlink: bool,
}

/// Builds the bordered block for a pane. Focused panes get the accent color.
pub fn pane_block(title: String, focused: bool, theme: &Theme) -> Block<'static> {
    let border_color = if focused {
        parse_color(&theme.panel.border_focused_fg)
    } else {
        parse_color(&theme.panel.border_unfocused_fg)
    };

    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default().fg(parse_color(&theme.panel.title_fg)),
        ))
        .border_style(Style::default().fg(border_color))
}

/// Renders directory rows as a table. The selected row is highlighted.
pub fn render_file_table(
    f: &mut Frame,
    area: Rect,
    rows: &[FileRow],
    selected: usize,
    title: String,
    theme: &Theme,
    focused: bool,
) {
    let header = Row::new(FILE_COLUMNS.iter().map(|c| Cell::from(*c))).style(
        Style::default()
            .fg(parse_color(&theme.table.header_fg))
            .add_modifier(Modifier::BOLD),
    );

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(row.cells.iter().map(|c| Cell::from(c.clone())))
                .style(row_style(row, theme))
        })
        .collect();

    let table = Table::new(body, column_widths(rows))
        .header(header)
        .block(pane_block(title, focused, theme))
        .row_highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .fg(parse_color(&theme.table.selected_fg)),
        );

    let mut state = TableState::default();
    if !rows.is_empty() {
        state.select(Some(selected));
    }

    f.render_stateful_widget(table, area, &mut state);
}

/// Name takes the leftover space; the other columns fit their widest cell.
fn column_widths(rows: &[FileRow]) -> [Constraint; 5] {
    let fit = |col: usize| {
        let widest = rows
            .iter()
            .map(|r| r.cells[col].chars().count())
            .max()
            .unwrap_or(0)
            .max(FILE_COLUMNS[col].len());
        Constraint::Length(u16::try_from(widest).unwrap_or(u16::MAX))
    };
    [Constraint::Fill(1), fit(1), fit(2), fit(3), fit(4)]
}

fn row_style(row: &FileRow, theme: &Theme) -> Style {
    if row.is_symlink {
        Style::default().fg(parse_color(&theme.table.symlink_fg))
    } else if row.kind == EntryKind::Directory {
        Style::default()
            .fg(parse_color(&theme.table.dir_fg))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(parse_color(&theme.table.file_fg))
    }
}
