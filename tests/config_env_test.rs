//! Environment and CLI resolution of the client configuration.

use std::path::PathBuf;
use std::time::Duration;

use dashport::cli::{parse_args, CliCommand, CliOptions};
use dashport::startup::config::{
    DEFAULT_TIMEOUT, ENV_DOWNLOAD_DIR, ENV_LOG_FILE, ENV_TIMEOUT_SECS, ENV_URL,
};
use dashport::startup::ClientConfig;
use serial_test::serial;

const ALL_VARS: [&str; 4] = [ENV_URL, ENV_DOWNLOAD_DIR, ENV_TIMEOUT_SECS, ENV_LOG_FILE];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    std::iter::once("dashport".to_string())
        .chain(list.iter().map(|s| s.to_string()))
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = ClientConfig::from_env();
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    std::env::set_var(ENV_URL, "http://exporter.internal:9000/");
    std::env::set_var(ENV_DOWNLOAD_DIR, "/tmp/exports");
    std::env::set_var(ENV_TIMEOUT_SECS, "5");
    std::env::set_var(ENV_LOG_FILE, "/tmp/dashport-test.log");

    let config = ClientConfig::from_env();
    clear_env();

    assert_eq!(config.base_url, "http://exporter.internal:9000");
    assert_eq!(config.download_dir, PathBuf::from("/tmp/exports"));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.log_file, PathBuf::from("/tmp/dashport-test.log"));
}

#[test]
#[serial]
fn test_invalid_and_empty_values_are_ignored() {
    clear_env();
    std::env::set_var(ENV_URL, "   ");
    std::env::set_var(ENV_TIMEOUT_SECS, "soon");

    let config = ClientConfig::from_env();
    clear_env();

    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
}

#[test]
#[serial]
fn test_cli_url_beats_env() {
    clear_env();
    std::env::set_var(ENV_URL, "http://from-env:8080");

    let options = match parse_args(args(&["--url=http://from-cli:8080"])) {
        CliCommand::RunTui(options) => options,
        other => panic!("unexpected command {:?}", other),
    };
    let config = ClientConfig::from_env().with_cli(&options);
    clear_env();

    assert_eq!(config.base_url, "http://from-cli:8080");
}

#[test]
fn test_cli_commands() {
    assert!(matches!(parse_args(args(&["--version"])), CliCommand::Version));
    assert!(matches!(parse_args(args(&["-h"])), CliCommand::Help));
    assert!(matches!(parse_args(args(&["--url"])), CliCommand::Invalid(_)));
    assert!(matches!(
        parse_args(args(&[])),
        CliCommand::RunTui(CliOptions { url: None })
    ));
}
