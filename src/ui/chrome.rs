//! Header and footer rendering
//!
//! The header carries the collection tabs, the search box and the load
//! status. The footer carries the export control, the export flags and the
//! keybind hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::models::CollectionKind;
use crate::selection::ExportAffordance;

use super::helpers::spinner_frame;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_HEADER, COLOR_WARNING};

// ============================================================================
// Header
// ============================================================================

fn tab_spans(app: &App) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        " dashport ",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    for kind in CollectionKind::ALL {
        let label = format!(" {} ({}) ", kind.label(), app.session.total_len(kind));
        let style = if kind == app.active {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(label, style));
    }
    spans
}

fn search_line(app: &App) -> Line<'static> {
    let query = app.session.filter_state(app.active).search_query.clone();
    let editing = app.focus == Focus::Search;
    let mut spans = vec![Span::styled(" Search: ", Style::default().fg(COLOR_DIM))];
    if query.is_empty() && !editing {
        spans.push(Span::styled(
            format!("press / to search {}", app.active.noun()),
            Style::default().fg(COLOR_DIM),
        ));
    } else {
        spans.push(Span::styled(query, Style::default().fg(COLOR_ACCENT)));
        if editing {
            spans.push(Span::styled("▏", Style::default().fg(COLOR_ACCENT)));
        }
    }
    Line::from(spans)
}

fn status_line(app: &App) -> Line<'static> {
    if app.export_in_flight {
        return Line::from(Span::styled(
            format!(" {} Exporting...", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_ACCENT),
        ));
    }
    let stages: Vec<String> = app
        .loading
        .stages()
        .map(|(_, stage)| format!("{} ({})", stage.message, stage.detail))
        .collect();
    if stages.is_empty() {
        return Line::from(Span::styled(
            format!(" {}", app.client.base_url()),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Line::from(Span::styled(
        format!(" {} {}", spinner_frame(app.tick_count), stages.join(" · ")),
        Style::default().fg(COLOR_ACCENT),
    ))
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(tab_spans(app)),
        search_line(app),
        status_line(app),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// Footer
// ============================================================================

pub fn export_line(
    affordance: &ExportAffordance,
    include_alerts: bool,
    zip: bool,
    zip_locked: bool,
) -> Line<'static> {
    let button_style = if affordance.enabled {
        Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let flag = |on: bool| if on { "[x]" } else { "[ ]" };

    let mut spans = vec![
        Span::styled(format!(" [e] {} ", affordance.label), button_style),
        Span::styled(
            format!(" {} include alerts (i)", flag(include_alerts)),
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::styled(
            format!("  {} ZIP (z)", flag(zip)),
            Style::default().fg(COLOR_ACCENT),
        ),
    ];
    if zip_locked {
        spans.push(Span::styled(" locked", Style::default().fg(COLOR_WARNING)));
    }
    Line::from(spans)
}

/// Keybind hints for the current focus.
pub fn build_keybinds(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = match app.focus {
        Focus::Search => &[("Esc/Enter", "done"), ("Ctrl+U", "clear")],
        Focus::Folders => &[
            ("Tab", "switch"),
            ("↑↓", "move"),
            ("Enter", "filter"),
            ("→", "items"),
            ("/", "search"),
            ("r", "reload"),
            ("q", "quit"),
        ],
        Focus::Items => &[
            ("Tab", "switch"),
            ("Space", "toggle"),
            ("a", "all"),
            ("c", "clear"),
            ("←", "folders"),
            ("/", "search"),
            ("x", "dismiss"),
            ("q", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let lines = vec![
        export_line(
            &session.export_affordance(),
            session.include_alerts(),
            session.export_as_zip(),
            session.zip_locked(),
        ),
        build_keybinds(app),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
