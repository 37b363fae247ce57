//! Selection sets and the export affordance derived from them.

use std::collections::BTreeSet;

use crate::models::CollectionKind;

/// One uid set per collection. The sets are the only record of what is
/// selected; row checkboxes are derived from them at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    dashboards: BTreeSet<String>,
    alerts: BTreeSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, kind: CollectionKind) -> &BTreeSet<String> {
        match kind {
            CollectionKind::Dashboards => &self.dashboards,
            CollectionKind::Alerts => &self.alerts,
        }
    }

    fn set_mut(&mut self, kind: CollectionKind) -> &mut BTreeSet<String> {
        match kind {
            CollectionKind::Dashboards => &mut self.dashboards,
            CollectionKind::Alerts => &mut self.alerts,
        }
    }

    /// Add or remove one uid. Returns whether the set changed.
    pub fn toggle(&mut self, kind: CollectionKind, uid: &str, selected: bool) -> bool {
        let set = self.set_mut(kind);
        if selected {
            set.insert(uid.to_string())
        } else {
            set.remove(uid)
        }
    }

    /// Add every uid in `uids`. Existing members stay selected.
    pub fn select_all<I, S>(&mut self, kind: CollectionKind, uids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = self.set_mut(kind);
        let before = set.len();
        set.extend(uids.into_iter().map(Into::into));
        set.len() - before
    }

    pub fn clear(&mut self, kind: CollectionKind) {
        self.set_mut(kind).clear();
    }

    pub fn contains(&self, kind: CollectionKind, uid: &str) -> bool {
        self.set(kind).contains(uid)
    }

    pub fn count(&self, kind: CollectionKind) -> usize {
        self.set(kind).len()
    }

    pub fn combined(&self) -> usize {
        self.dashboards.len() + self.alerts.len()
    }

    /// Selected uids in sorted order.
    pub fn uids(&self, kind: CollectionKind) -> Vec<String> {
        self.set(kind).iter().cloned().collect()
    }

    pub fn affordance(&self, force_enabled: bool) -> ExportAffordance {
        ExportAffordance::compute(self.dashboards.len(), self.alerts.len(), force_enabled)
    }
}

/// What the export control shows and whether it can be triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportAffordance {
    pub dashboards: usize,
    pub alerts: usize,
    pub combined: usize,
    pub enabled: bool,
    pub label: String,
}

pub const NEUTRAL_EXPORT_LABEL: &str = "Export Selected";

impl ExportAffordance {
    pub fn compute(dashboards: usize, alerts: usize, force_enabled: bool) -> Self {
        let combined = dashboards + alerts;
        let label = match (dashboards, alerts) {
            (0, 0) => NEUTRAL_EXPORT_LABEL.to_string(),
            (d, 0) => format!("Export {}", counted(d, "Dashboard")),
            (0, a) => format!("Export {}", counted(a, "Alert")),
            (d, a) => format!(
                "Export {} & {}",
                counted(d, "Dashboard"),
                counted(a, "Alert")
            ),
        };
        Self {
            dashboards,
            alerts,
            combined,
            enabled: combined > 0 || force_enabled,
            label,
        }
    }
}

fn counted(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_counts() {
        let mut selection = SelectionState::new();
        assert!(selection.toggle(CollectionKind::Dashboards, "d1", true));
        assert!(!selection.toggle(CollectionKind::Dashboards, "d1", true));
        selection.toggle(CollectionKind::Alerts, "a1", true);
        assert_eq!(selection.count(CollectionKind::Dashboards), 1);
        assert_eq!(selection.combined(), 2);

        assert!(selection.toggle(CollectionKind::Dashboards, "d1", false));
        assert_eq!(selection.combined(), 1);
    }

    #[test]
    fn test_clear_leaves_other_collection() {
        let mut selection = SelectionState::new();
        selection.select_all(CollectionKind::Dashboards, ["d1", "d2"]);
        selection.select_all(CollectionKind::Alerts, ["a1"]);

        selection.clear(CollectionKind::Dashboards);
        assert_eq!(selection.count(CollectionKind::Dashboards), 0);
        assert_eq!(selection.count(CollectionKind::Alerts), 1);
        assert_eq!(selection.combined(), 1);
    }

    #[test]
    fn test_select_all_reports_added() {
        let mut selection = SelectionState::new();
        selection.toggle(CollectionKind::Alerts, "a2", true);
        let added = selection.select_all(CollectionKind::Alerts, ["a1", "a2", "a3"]);
        assert_eq!(added, 2);
        assert_eq!(selection.uids(CollectionKind::Alerts), vec!["a1", "a2", "a3"]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ExportAffordance::compute(0, 0, false).label, "Export Selected");
        assert_eq!(ExportAffordance::compute(1, 0, false).label, "Export 1 Dashboard");
        assert_eq!(ExportAffordance::compute(0, 3, false).label, "Export 3 Alerts");
        assert_eq!(
            ExportAffordance::compute(2, 1, false).label,
            "Export 2 Dashboards & 1 Alert"
        );
    }

    #[test]
    fn test_enabled_rules() {
        assert!(!ExportAffordance::compute(0, 0, false).enabled);
        assert!(ExportAffordance::compute(0, 1, false).enabled);

        let forced = ExportAffordance::compute(0, 0, true);
        assert!(forced.enabled);
        assert_eq!(forced.label, NEUTRAL_EXPORT_LABEL);
        assert_eq!(forced.combined, 0);
    }
}
