//! Command-line argument parsing.

/// Options that apply when the TUI runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    /// Backend base URL given with `--url`.
    pub url: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOptions),
    /// Arguments that could not be parsed
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over everything else. Unknown flags are
/// ignored.
///
/// # Examples
///
/// ```
/// use dashport::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["dashport".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--url" => match args.next() {
                Some(url) if !url.starts_with('-') => options.url = Some(url),
                _ => return CliCommand::Invalid("--url requires a value".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--url=") {
                    if url.is_empty() {
                        return CliCommand::Invalid("--url requires a value".to_string());
                    }
                    options.url = Some(url.to_string());
                }
            }
        }
    }
    CliCommand::RunTui(options)
}
