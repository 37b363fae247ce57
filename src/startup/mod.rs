//! Process startup: configuration and logging.
//!
//! ```ignore
//! use dashport::startup::{init_logging, ClientConfig};
//!
//! let config = ClientConfig::from_env().with_cli(&options);
//! init_logging(&config.log_file)?;
//! ```

pub mod config;
pub mod logging;

pub use config::{default_download_dir, default_log_file, ClientConfig};
pub use logging::{init_logging, ENV_LOG_FILTER};

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_config_builder_chain() {
        let config = ClientConfig::default()
            .with_timeout(Duration::from_secs(3))
            .with_log_file("/tmp/x.log");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.log_file, std::path::PathBuf::from("/tmp/x.log"));
    }
}
