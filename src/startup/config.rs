//! Client configuration.
//!
//! Resolved once at startup from defaults, then environment variables, then
//! CLI flags. The backend's own feature flags ([`crate::models::ConfigStatus`])
//! are separate and arrive over HTTP.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;
use crate::cli::CliOptions;

pub const ENV_URL: &str = "DASHPORT_URL";
pub const ENV_DOWNLOAD_DIR: &str = "DASHPORT_DOWNLOAD_DIR";
pub const ENV_TIMEOUT_SECS: &str = "DASHPORT_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "DASHPORT_LOG_FILE";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the client process.
///
/// # Example
///
/// ```ignore
/// use dashport::startup::ClientConfig;
///
/// let config = ClientConfig::from_env()
///     .with_base_url("http://exporter.internal:8080");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Exporter backend base URL, without trailing slash
    pub base_url: String,
    /// Where archives are saved
    pub download_dir: PathBuf,
    /// Per-request timeout
    pub timeout: Duration,
    /// Log file path
    pub log_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            download_dir: default_download_dir(),
            timeout: DEFAULT_TIMEOUT,
            log_file: default_log_file(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Defaults overridden by `DASHPORT_*` environment variables.
    ///
    /// Empty values are ignored. A timeout that is not a positive integer
    /// keeps the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = env_non_empty(ENV_URL) {
            config = config.with_base_url(url);
        }
        if let Some(dir) = env_non_empty(ENV_DOWNLOAD_DIR) {
            config = config.with_download_dir(dir);
        }
        if let Some(raw) = env_non_empty(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout(Duration::from_secs(secs)),
                _ => tracing::warn!("Ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, raw),
            }
        }
        if let Some(path) = env_non_empty(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }

        config
    }

    /// Apply CLI flags, which take precedence over the environment.
    pub fn with_cli(mut self, options: &CliOptions) -> Self {
        if let Some(url) = &options.url {
            self = self.with_base_url(url.clone());
        }
        self
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// OS download directory, or the current directory when there is none.
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// `<data dir>/dashport/dashport.log`, falling back to the temp directory.
pub fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("dashport")
        .join("dashport.log")
}
