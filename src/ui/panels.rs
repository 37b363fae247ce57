//! Folder and item panel rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::folder_tree::FolderNode;
use crate::models::CollectionKind;
use crate::session::ItemRow;

use super::helpers::{scroll_offset, truncate_string};
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_CURSOR_BG, COLOR_DIM,
    COLOR_HEADER, COLOR_TAG,
};

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    let title_style = if focused {
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, title_style))
}

// ============================================================================
// Folder Panel
// ============================================================================

/// One folder row: indent, title, `L<n>` badge for real folders and a count
/// badge when the count is positive.
pub fn folder_line(node: &FolderNode, under_cursor: bool) -> Line<'static> {
    let marker = if node.is_selected { "▸ " } else { "  " };
    let title_style = if node.is_selected {
        Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };

    let mut spans = vec![
        Span::raw(" ".repeat(node.indent)),
        Span::styled(marker, Style::default().fg(COLOR_ACTIVE)),
        Span::styled(node.title.clone(), title_style),
    ];
    if !node.is_pseudo {
        spans.push(Span::styled(
            format!(" L{}", node.level),
            Style::default().fg(COLOR_DIM),
        ));
    }
    if let Some(count) = node.count.filter(|c| *c > 0) {
        spans.push(Span::styled(
            format!(" ({})", count),
            Style::default().fg(COLOR_TAG),
        ));
    }

    let line = Line::from(spans);
    if under_cursor {
        line.style(Style::default().bg(COLOR_CURSOR_BG))
    } else {
        line
    }
}

pub fn render_folder_panel(frame: &mut Frame, area: Rect, app: &App) {
    let kind = app.active;
    let focused = app.focus == Focus::Folders;
    let block = panel_block(" Folders ".to_string(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let nodes = app.session.folder_tree(kind);
    let cursor = app.cursor(kind).folder;
    let height = inner.height as usize;
    let offset = scroll_offset(cursor, height);

    let lines: Vec<Line> = nodes
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, node)| folder_line(node, focused && i == cursor))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Item Panel
// ============================================================================

pub fn empty_message(kind: CollectionKind) -> String {
    format!("No {} found matching your criteria", kind.noun())
}

/// Two lines per item: checkbox and title, then folder and tags.
pub fn item_lines(row: &ItemRow, under_cursor: bool, width: usize) -> [Line<'static>; 2] {
    let checkbox = if row.selected { "[x] " } else { "[ ] " };
    let check_style = if row.selected {
        Style::default().fg(COLOR_ACTIVE)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let title = truncate_string(&row.title, width.saturating_sub(5).max(8));
    let mut first = Line::from(vec![
        Span::styled(checkbox, check_style),
        Span::styled(title, Style::default().fg(COLOR_ACCENT)),
    ]);

    let mut detail = vec![Span::styled(
        format!("    Folder: {}", row.folder),
        Style::default().fg(COLOR_DIM),
    )];
    for tag in &row.tags {
        detail.push(Span::raw(" "));
        detail.push(Span::styled(
            format!("#{}", tag),
            Style::default().fg(COLOR_TAG),
        ));
    }
    let mut second = Line::from(detail);

    if under_cursor {
        first = first.style(Style::default().bg(COLOR_CURSOR_BG));
        second = second.style(Style::default().bg(COLOR_CURSOR_BG));
    }
    [first, second]
}

pub fn render_item_panel(frame: &mut Frame, area: Rect, app: &App) {
    let kind = app.active;
    let focused = matches!(app.focus, Focus::Items | Focus::Search);
    let title = format!(
        " {} {}/{} · {} selected ",
        kind.label(),
        app.session.filtered_len(kind),
        app.session.total_len(kind),
        app.session.selection().count(kind),
    );
    let block = panel_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = app.session.item_rows(kind);
    if rows.is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(
            empty_message(kind),
            Style::default().fg(COLOR_DIM),
        )));
        frame.render_widget(message, inner);
        return;
    }

    let cursor = app.cursor(kind).item;
    let visible = (inner.height as usize) / 2;
    let offset = scroll_offset(cursor, visible);
    let width = inner.width as usize;

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .flat_map(|(i, row)| item_lines(row, focused && i == cursor, width))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
