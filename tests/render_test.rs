//! Full-frame rendering on a ratatui TestBackend.

mod common;

use std::path::PathBuf;

use common::TestAppBuilder;
use dashport::app::{App, AppMessage, Focus, LoadStage, LoadTask};
use dashport::export::ExportReport;
use dashport::models::{CollectionKind, ConfigStatus, Dashboard, ExportSummary, Folder};
use dashport::ui;
use ratatui::{backend::TestBackend, Terminal};

fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn loaded_app() -> App {
    let mut app = TestAppBuilder::new().build();
    app.session.replace_folders(vec![
        Folder::new(1, "a", "Infra").with_dashboard_count(1),
        Folder::new(2, "b", "Empty"),
    ]);
    app.session.replace_dashboards(vec![
        Dashboard::new("d1", "Sales Overview", 0).with_tags(["prod"]),
        Dashboard::new("d2", "Node Exporter", 1).with_folder_title("Infra"),
    ]);
    app.sync_changes();
    app
}

#[test]
fn test_main_view() {
    let app = loaded_app();
    let screen = render_to_string(&app, 120, 30);

    assert!(screen.contains("All Folders"));
    assert!(screen.contains("Infra L1 (1)"));
    assert!(screen.contains("Empty L1"));
    assert!(!screen.contains("Empty L1 ("));
    assert!(screen.contains("[ ] Sales Overview"));
    assert!(screen.contains("Folder: General"));
    assert!(screen.contains("#prod"));
    assert!(screen.contains("Export Selected"));
}

#[test]
fn test_selection_updates_label() {
    let mut app = loaded_app();
    app.session.select_all(CollectionKind::Dashboards);
    app.sync_changes();
    let screen = render_to_string(&app, 120, 30);
    assert!(screen.contains("Export 2 Dashboards"));
    assert!(screen.contains("[x] Node Exporter"));
}

#[test]
fn test_empty_filtered_view() {
    let mut app = loaded_app();
    app.session
        .set_search_query(CollectionKind::Dashboards, "no such thing");
    app.focus = Focus::Search;
    app.sync_changes();
    let screen = render_to_string(&app, 120, 30);
    assert!(screen.contains("No dashboards found matching your criteria"));

    app.active = CollectionKind::Alerts;
    let screen = render_to_string(&app, 120, 30);
    assert!(screen.contains("No alerts found matching your criteria"));
}

#[test]
fn test_zip_lock_indicator() {
    let mut app = loaded_app();
    app.session.apply_config(ConfigStatus {
        force_enable_zip_export: true,
        ..ConfigStatus::default()
    });
    let screen = render_to_string(&app, 120, 30);
    assert!(screen.contains("[x] ZIP (z) locked"));
}

#[test]
fn test_export_report_overlay() {
    let mut app = loaded_app();
    app.export_report = Some(ExportReport::Summary(ExportSummary {
        exported_dashboards: 2,
        exported_alerts: 1,
        exported_libraries: 4,
        export_path: "/srv/exports/run-7".to_string(),
        errors: Some(vec!["library panel p1 skipped".to_string()]),
    }));
    let screen = render_to_string(&app, 120, 30);
    assert!(screen.contains("Export Completed"));
    assert!(screen.contains("/srv/exports/run-7"));
    assert!(screen.contains("Warnings/Errors"));
    assert!(screen.contains("library panel p1 skipped"));

    app.export_report = Some(ExportReport::Saved {
        path: PathBuf::from("/home/op/Downloads/grafana-export.zip"),
        size: 2048,
    });
    let screen = render_to_string(&app, 120, 30);
    assert!(screen.contains("Archive saved to /home/op/Downloads/grafana-export.zip"));
}

#[test]
fn test_load_stage_shows_message_and_detail() {
    let mut app = TestAppBuilder::new().build();
    app.handle_message(AppMessage::LoadStage {
        task: LoadTask::Dashboards,
        stage: LoadStage {
            message: "Loading dashboards...".to_string(),
            detail: "GET /api/dashboards".to_string(),
        },
    });
    let screen = render_to_string(&app, 120, 30);
    assert!(screen.contains("Loading dashboards..."));
    assert!(screen.contains("GET /api/dashboards"));

    app.handle_message(AppMessage::LoadStage {
        task: LoadTask::Dashboards,
        stage: LoadStage {
            message: LoadTask::Dashboards.processing_message(),
            detail: "Found 3 dashboards".to_string(),
        },
    });
    let screen = render_to_string(&app, 120, 30);
    assert!(screen.contains("Processing dashboards... (Found 3 dashboards)"));
    assert!(!screen.contains("GET /api/dashboards"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let app = loaded_app();
    render_to_string(&app, 20, 6);
    render_to_string(&app, 1, 1);
}
