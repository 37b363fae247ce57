//! Startup fetches.
//!
//! Each collection is fetched by its own spawned task. Tasks never touch the
//! session; they report through the message channel, so a failure in one
//! cannot affect the others.

use std::future::Future;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::{ALERTS_PATH, CONFIG_STATUS_PATH, DASHBOARDS_PATH, FOLDERS_PATH};
use crate::error::ApiError;
use crate::models::{Alert, ConfigStatus, Dashboard, FoldersPayload};

use super::{App, AppMessage, LoadStage, LoadTask};

impl App {
    /// Kick off all four fetches concurrently.
    pub fn start_loading(&mut self) {
        info!("Loading from {}", self.client.base_url());
        for task in LoadTask::ALL {
            self.start_task(task);
        }
    }

    /// Re-run the three collection fetches. Config is only read at startup.
    pub fn reload(&mut self) {
        info!("Reloading collections");
        for task in [LoadTask::Folders, LoadTask::Dashboards, LoadTask::Alerts] {
            self.start_task(task);
        }
    }

    fn start_task(&mut self, task: LoadTask) {
        let tx = self.message_tx.clone();
        let client = self.client.clone();
        match task {
            LoadTask::Config => spawn_fetch(
                tx,
                task,
                async move { client.fetch_config().await },
                |config: &ConfigStatus| {
                    format!("forceEnableZipExport={}", config.force_enable_zip_export)
                },
                AppMessage::ConfigLoaded,
            ),
            LoadTask::Folders => spawn_fetch(
                tx,
                task,
                async move { client.fetch_folders().await },
                |payload: &FoldersPayload| found(payload.len(), "folders"),
                AppMessage::FoldersLoaded,
            ),
            LoadTask::Dashboards => spawn_fetch(
                tx,
                task,
                async move { client.fetch_dashboards().await },
                |dashboards: &Vec<Dashboard>| found(dashboards.len(), "dashboards"),
                AppMessage::DashboardsLoaded,
            ),
            LoadTask::Alerts => spawn_fetch(
                tx,
                task,
                async move { client.fetch_alerts().await },
                |alerts: &Vec<Alert>| found(alerts.len(), "alerts"),
                AppMessage::AlertsLoaded,
            ),
        }
    }
}

fn endpoint(task: LoadTask) -> &'static str {
    match task {
        LoadTask::Config => CONFIG_STATUS_PATH,
        LoadTask::Folders => FOLDERS_PATH,
        LoadTask::Dashboards => DASHBOARDS_PATH,
        LoadTask::Alerts => ALERTS_PATH,
    }
}

fn found(count: usize, noun: &str) -> String {
    format!("Found {} {}", count, noun)
}

fn send(tx: &mpsc::UnboundedSender<AppMessage>, task: LoadTask, message: AppMessage) {
    // The receiver is gone only when the app is shutting down
    if tx.send(message).is_err() {
        debug!("Dropping {} message: app closed", task.noun());
    }
}

/// Send the request stage, await the fetch, then send the processing stage
/// and the outcome.
fn spawn_fetch<T, Fut, D, F>(
    tx: mpsc::UnboundedSender<AppMessage>,
    task: LoadTask,
    fetch: Fut,
    describe: D,
    on_success: F,
) where
    T: Send + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    D: FnOnce(&T) -> String + Send + 'static,
    F: FnOnce(T) -> AppMessage + Send + 'static,
{
    send(
        &tx,
        task,
        AppMessage::LoadStage {
            task,
            stage: LoadStage {
                message: task.stage_message(),
                detail: format!("GET {}", endpoint(task)),
            },
        },
    );

    tokio::spawn(async move {
        let message = match fetch.await {
            Ok(value) => {
                send(
                    &tx,
                    task,
                    AppMessage::LoadStage {
                        task,
                        stage: LoadStage {
                            message: task.processing_message(),
                            detail: describe(&value),
                        },
                    },
                );
                on_success(value)
            }
            Err(err) => failure_message(task, &err),
        };
        send(&tx, task, message);
    });
}

fn failure_message(task: LoadTask, err: &ApiError) -> AppMessage {
    match task {
        LoadTask::Config => AppMessage::ConfigFailed {
            error: err.to_string(),
        },
        _ => AppMessage::LoadFailed {
            task,
            error: format!("Failed to load {}: {}", task.noun(), err.detail()),
        },
    }
}
