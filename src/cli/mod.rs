//! Command-line interface.
//!
//! The dispatcher runs early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use dashport::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! let options = match run_cli_command(command) {
//!     Ok(options) => options,
//!     Err(message) => {
//!         eprintln!("Error: {}", message);
//!         std::process::exit(2);
//!     }
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions};
pub use version::{handle_help_command, handle_version_command, usage, VERSION};

/// Handle the informational commands.
///
/// `Version` and `Help` print and exit. `RunTui` hands its options back;
/// `Invalid` returns the message for the caller to report.
pub fn run_cli_command(command: CliCommand) -> Result<CliOptions, String> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui(options) => Ok(options),
        CliCommand::Invalid(message) => Err(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_options() {
        let options = CliOptions {
            url: Some("http://x".to_string()),
        };
        assert_eq!(
            run_cli_command(CliCommand::RunTui(options.clone())),
            Ok(options)
        );
    }

    #[test]
    fn test_invalid_returns_message() {
        assert_eq!(
            run_cli_command(CliCommand::Invalid("bad".to_string())),
            Err("bad".to_string())
        );
    }
}
