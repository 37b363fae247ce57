//! Type definitions for the application state.
//!
//! - [`Focus`] - Which panel receives navigation keys
//! - [`LoadTask`] - The four startup fetches
//! - [`LoadingState`] - In-flight fetches and their stage messages

use std::collections::BTreeMap;

/// Which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Folders,
    Items,
    /// Typing into the search box of the active collection
    Search,
}

/// Cursor positions for one collection's panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewCursor {
    pub folder: usize,
    pub item: usize,
}

/// One of the independent startup fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoadTask {
    Config,
    Folders,
    Dashboards,
    Alerts,
}

impl LoadTask {
    pub const ALL: [LoadTask; 4] = [
        LoadTask::Config,
        LoadTask::Folders,
        LoadTask::Dashboards,
        LoadTask::Alerts,
    ];

    pub fn noun(&self) -> &'static str {
        match self {
            LoadTask::Config => "configuration",
            LoadTask::Folders => "folders",
            LoadTask::Dashboards => "dashboards",
            LoadTask::Alerts => "alerts",
        }
    }

    /// Stage message shown while the fetch is in flight.
    pub fn stage_message(&self) -> String {
        format!("Loading {}...", self.noun())
    }

    /// Stage message shown once the response is decoded and being applied.
    pub fn processing_message(&self) -> String {
        format!("Processing {}...", self.noun())
    }
}

/// Human-readable progress for one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadStage {
    pub message: String,
    pub detail: String,
}

/// Fetches currently in flight, keyed by task.
#[derive(Debug, Clone, Default)]
pub struct LoadingState {
    stages: BTreeMap<LoadTask, LoadStage>,
}

impl LoadingState {
    pub fn start(&mut self, task: LoadTask, stage: LoadStage) {
        self.stages.insert(task, stage);
    }

    pub fn finish(&mut self, task: LoadTask) {
        self.stages.remove(&task);
    }

    pub fn is_loading(&self) -> bool {
        !self.stages.is_empty()
    }

    pub fn is_pending(&self, task: LoadTask) -> bool {
        self.stages.contains_key(&task)
    }

    pub fn stages(&self) -> impl Iterator<Item = (&LoadTask, &LoadStage)> {
        self.stages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_state_tracks_tasks() {
        let mut loading = LoadingState::default();
        assert!(!loading.is_loading());

        loading.start(
            LoadTask::Alerts,
            LoadStage {
                message: LoadTask::Alerts.stage_message(),
                detail: "GET /api/alerts".to_string(),
            },
        );
        assert!(loading.is_pending(LoadTask::Alerts));
        assert!(!loading.is_pending(LoadTask::Folders));

        loading.finish(LoadTask::Alerts);
        assert!(!loading.is_loading());
    }

    #[test]
    fn test_stage_message() {
        assert_eq!(LoadTask::Dashboards.stage_message(), "Loading dashboards...");
        assert_eq!(LoadTask::Folders.processing_message(), "Processing folders...");
    }
}
