//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn usage() -> String {
    format!(
        "dashport {}\n\
         Browse Grafana dashboards and alerts and export them.\n\
         \n\
         USAGE:\n    dashport [--url <URL>]\n\
         \n\
         OPTIONS:\n\
         \x20   --url <URL>     Exporter backend base URL (env DASHPORT_URL)\n\
         \x20   -V, --version   Print version\n\
         \x20   -h, --help      Print this help\n\
         \n\
         ENVIRONMENT:\n\
         \x20   DASHPORT_DOWNLOAD_DIR   Where exported archives are saved\n\
         \x20   DASHPORT_TIMEOUT_SECS   Request timeout in seconds (default 30)\n\
         \x20   DASHPORT_LOG            Log filter (default info)\n\
         \x20   DASHPORT_LOG_FILE       Log file path\n",
        VERSION
    )
}

/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("dashport {}", VERSION);
    std::process::exit(0)
}

pub fn handle_help_command() -> ! {
    print!("{}", usage());
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_usage_mentions_flags() {
        let text = usage();
        assert!(text.contains("--url <URL>"));
        assert!(text.contains("--version"));
        assert!(text.contains("DASHPORT_DOWNLOAD_DIR"));
    }
}
