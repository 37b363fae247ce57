//! Overlay rendering: notifications and the export result dialog.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::export::ExportReport;
use crate::notifications::{Notification, NotificationLevel};

use super::helpers::{centered_rect, truncate_string};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_INFO, COLOR_SUCCESS, COLOR_WARNING,
};

const NOTIFICATION_WIDTH: u16 = 56;

fn level_color(level: NotificationLevel) -> ratatui::style::Color {
    match level {
        NotificationLevel::Info => COLOR_INFO,
        NotificationLevel::Success => COLOR_SUCCESS,
        NotificationLevel::Warning => COLOR_WARNING,
        NotificationLevel::Error => COLOR_ERROR,
    }
}

// ============================================================================
// Notifications
// ============================================================================

pub fn notification_line(notification: &Notification, width: usize) -> Line<'static> {
    let color = level_color(notification.level);
    let prefix = format!(
        "{} {} ",
        notification.created_at.format("%H:%M:%S"),
        notification.level.label()
    );
    let message = truncate_string(
        &notification.message,
        width.saturating_sub(prefix.len()).max(8),
    );
    Line::from(vec![
        Span::styled(prefix, Style::default().fg(color)),
        Span::styled(message, Style::default().fg(COLOR_ACCENT)),
    ])
}

/// Stack the live notifications in the top-right corner, newest last.
pub fn render_notifications(frame: &mut Frame, area: Rect, app: &App) {
    if app.notifications.is_empty() {
        return;
    }
    let width = NOTIFICATION_WIDTH.min(area.width);
    let height = (app.notifications.len() as u16 + 2).min(area.height);
    let rect = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Notifications (x) ", Style::default().fg(COLOR_DIM)));
    let inner_width = width.saturating_sub(2) as usize;
    let lines: Vec<Line> = app
        .notifications
        .iter()
        .map(|n| notification_line(n, inner_width))
        .collect();

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

// ============================================================================
// Export Result
// ============================================================================

pub fn export_report_lines(report: &ExportReport) -> Vec<Line<'static>> {
    let heading = Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(COLOR_ACCENT);
    let dim = Style::default().fg(COLOR_DIM);

    match report {
        ExportReport::Summary(summary) => {
            let mut lines = vec![
                Line::from(Span::styled("Export Completed", heading)),
                Line::from(""),
                Line::from(Span::styled(
                    format!("Dashboards:      {}", summary.exported_dashboards),
                    body,
                )),
                Line::from(Span::styled(
                    format!("Alerts:          {}", summary.exported_alerts),
                    body,
                )),
                Line::from(Span::styled(
                    format!("Library panels:  {}", summary.exported_libraries),
                    body,
                )),
                Line::from(Span::styled(
                    format!("Export path:     {}", summary.export_path),
                    body,
                )),
            ];
            if summary.is_partial() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Warnings/Errors",
                    Style::default().fg(COLOR_WARNING).add_modifier(Modifier::BOLD),
                )));
                for warning in summary.warnings() {
                    lines.push(Line::from(Span::styled(
                        format!("  • {}", warning),
                        Style::default().fg(COLOR_WARNING),
                    )));
                }
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Esc close", dim)));
            lines
        }
        ExportReport::Saved { path, size } => vec![
            Line::from(Span::styled("Export Completed", heading)),
            Line::from(""),
            Line::from(Span::styled(format!("Archive saved to {}", path.display()), body)),
            Line::from(Span::styled(format!("Size:            {} bytes", size), body)),
            Line::from(""),
            Line::from(Span::styled("o open · Esc close", dim)),
        ],
    }
}

pub fn render_export_report(frame: &mut Frame, area: Rect, report: &ExportReport) {
    let lines = export_report_lines(report);
    let rect = centered_rect(area, 72, lines.len() as u16 + 2);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(Span::styled(" Export ", Style::default().fg(COLOR_HEADER)));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}
