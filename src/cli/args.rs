//! Command-line argument parsing.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Forget the stored session and exit
    Logout,
    /// Run the TUI application (default)
    RunTui {
        /// Seed the conversation from this JSON file
        transcript: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("unknown argument: {0}")]
    Unknown(String),
}

/// Parse command-line arguments (including the program name).
///
/// # Examples
///
/// ```
/// use cerina::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["cerina".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut transcript = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--logout" => return Ok(CliCommand::Logout),
            "--transcript" => {
                let path = args.next().ok_or(ArgsError::MissingValue("--transcript"))?;
                transcript = Some(PathBuf::from(path));
            }
            other => match other.strip_prefix("--transcript=") {
                Some(path) if !path.is_empty() => transcript = Some(PathBuf::from(path)),
                Some(_) => return Err(ArgsError::MissingValue("--transcript")),
                None => return Err(ArgsError::Unknown(other.to_string())),
            },
        }
    }
    Ok(CliCommand::RunTui { transcript })
}

pub const USAGE: &str = "usage: cerina [--version] [--logout] [--transcript <path>]";
