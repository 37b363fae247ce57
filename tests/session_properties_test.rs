//! Filtering, folder tree and selection behavior of a populated session.

use std::time::{Duration, Instant};

use dashport::debounce::ClickDebouncer;
use dashport::filter::{filter_items, FilterState, FolderSelector};
use dashport::folder_tree::build_folder_tree;
use dashport::models::{Alert, CollectionKind, Dashboard, Folder};
use dashport::session::{Session, SessionChange};

fn populated() -> Session {
    let mut session = Session::new();
    session.replace_folders(vec![
        Folder::new(1, "a", "T1").with_dashboard_count(2),
        Folder::new(2, "b", "T2").with_parent("a"),
    ]);
    session.replace_dashboards(vec![
        Dashboard::new("d1", "Sales", 0).with_tags(["prod"]),
        Dashboard::new("d2", "Latency", 1).with_tags(["sre"]),
        Dashboard::new("d3", "Replication", 2).with_tags(["prod", "db"]),
        Dashboard::new("d4", "Scratch", 1),
    ]);
    session.replace_alerts(vec![
        Alert::new("a1", "CPU high", 1).with_folder_title("T1"),
        Alert::new("a2", "Disk full", 2).with_folder_title("T2"),
        Alert::new("a3", "Heartbeat", 0),
    ]);
    session.take_changes();
    session
}

#[test]
fn test_folder_tree_nested_levels() {
    let session = populated();
    let nodes = session.folder_tree(CollectionKind::Dashboards);
    let shape: Vec<(&str, usize)> = nodes.iter().map(|n| (n.title.as_str(), n.level)).collect();
    assert_eq!(
        shape,
        [("All Folders", 0), ("General", 0), ("T1", 1), ("T2", 2)]
    );
    assert!(nodes[0].is_selected);
}

#[test]
fn test_tree_starts_with_pseudo_nodes_for_any_input() {
    let inputs = [
        vec![],
        vec![Folder::new(9, "z", "Orphan").with_parent("nowhere")],
        vec![
            Folder::new(1, "a", "A").with_parent("b"),
            Folder::new(2, "b", "B").with_parent("a"),
        ],
    ];
    for folders in inputs {
        let nodes = build_folder_tree(&folders, |_| 0, &FolderSelector::All);
        assert_eq!(nodes[0].title, "All Folders");
        assert_eq!(nodes[1].title, "General");
        assert_eq!(nodes.len(), 2);
    }
}

#[test]
fn test_tag_search_matches() {
    let mut session = populated();
    session.set_search_query(CollectionKind::Dashboards, "prod");
    assert_eq!(
        session.filtered_uids(CollectionKind::Dashboards),
        vec!["d1", "d3"]
    );
}

#[test]
fn test_filter_is_idempotent_across_states() {
    let session = populated();
    let items = session.dashboards().to_vec();
    for folder in ["all", "0", "1", "2", "nope"] {
        for query in ["", "prod", "LAT", "  s  "] {
            let state = FilterState::new(FolderSelector::parse(folder), query);
            let once = filter_items(&items, &state);
            assert_eq!(filter_items(&once, &state), once);
        }
    }
}

#[test]
fn test_all_selector_is_identity_on_folder_stage() {
    let session = populated();
    let state = FilterState::new(FolderSelector::All, "");
    assert_eq!(filter_items(session.dashboards(), &state), session.dashboards());
}

#[test]
fn test_select_all_adds_exactly_the_filtered_view() {
    let mut session = populated();
    session.select_folder(CollectionKind::Dashboards, FolderSelector::folder_id(1));
    session.select_all(CollectionKind::Dashboards);

    assert_eq!(
        session.selection().uids(CollectionKind::Dashboards),
        vec!["d2", "d4"]
    );
    assert!(!session.is_selected(CollectionKind::Dashboards, "d1"));
}

#[test]
fn test_selection_survives_filtering() {
    let mut session = populated();
    session.toggle(CollectionKind::Dashboards, "d1", true);
    session.set_search_query(CollectionKind::Dashboards, "latency");

    assert!(session.is_selected(CollectionKind::Dashboards, "d1"));
    assert_eq!(session.export_affordance().dashboards, 1);

    // toggling an item outside the filtered view only changes the set
    session.toggle(CollectionKind::Dashboards, "d3", true);
    assert_eq!(session.filtered_uids(CollectionKind::Dashboards), vec!["d2"]);
    assert_eq!(session.export_affordance().dashboards, 2);
}

#[test]
fn test_combined_count_and_independent_clear() {
    let mut session = populated();
    session.select_all(CollectionKind::Dashboards);
    session.select_all(CollectionKind::Alerts);

    let affordance = session.export_affordance();
    assert_eq!(affordance.combined, affordance.dashboards + affordance.alerts);
    assert_eq!(affordance.label, "Export 4 Dashboards & 3 Alerts");

    session.clear(CollectionKind::Alerts);
    assert_eq!(session.selection().count(CollectionKind::Dashboards), 4);
    assert_eq!(session.export_affordance().label, "Export 4 Dashboards");
}

#[test]
fn test_mutations_are_recorded() {
    let mut session = populated();
    session.toggle(CollectionKind::Alerts, "a1", true);
    session.toggle(CollectionKind::Alerts, "a1", true);
    session.set_include_alerts(false);

    assert_eq!(
        session.take_changes(),
        vec![
            SessionChange::SelectionChanged(CollectionKind::Alerts),
            SessionChange::FlagsChanged,
        ]
    );
    assert!(!session.has_changes());
}

#[test]
fn test_export_request_reflects_selection_and_flags() {
    let mut session = populated();
    assert!(session.export_request().is_err());

    session.toggle(CollectionKind::Alerts, "a2", true);
    session.toggle(CollectionKind::Dashboards, "d3", true);
    session.toggle(CollectionKind::Dashboards, "d1", true);
    session.set_export_as_zip(true);

    let request = session.export_request().unwrap();
    assert_eq!(request.dashboard_uids, vec!["d1", "d3"]);
    assert_eq!(request.alert_uids, vec!["a2"]);
    assert!(request.include_alerts);
    assert!(request.export_as_zip);
}

#[test]
fn test_folder_clicks_within_window_are_dropped() {
    let mut debouncer = ClickDebouncer::default();
    let t0 = Instant::now();
    assert!(debouncer.accept_at(t0));
    assert!(!debouncer.accept_at(t0 + Duration::from_millis(100)));
    assert!(!debouncer.accept_at(t0 + Duration::from_millis(250)));
    assert!(debouncer.accept_at(t0 + Duration::from_millis(300)));
}

#[test]
fn test_alert_rows_show_general_for_unfoldered_items() {
    let session = populated();
    let rows = session.item_rows(CollectionKind::Alerts);
    let heartbeat = rows.iter().find(|r| r.uid == "a3").unwrap();
    assert_eq!(heartbeat.folder, "General");
}
