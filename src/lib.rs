//! dashport - a terminal client for browsing and exporting Grafana
//! dashboards and alert rules through an exporter backend.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod debounce;
pub mod error;
pub mod export;
pub mod filter;
pub mod folder_tree;
pub mod input;
pub mod models;
pub mod notifications;
pub mod selection;
pub mod session;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
