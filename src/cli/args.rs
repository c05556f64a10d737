//! Command-line argument parsing.

use crate::error::{ProfileError, ProfileResult};
use crate::state::TabSelection;

/// Startup overrides applied to a fresh view state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Start in dark mode
    pub dark: bool,
    /// Tabs to preselect, applied in order
    pub tabs: Vec<TabSelection>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI (default)
    Run(RunOptions),
}

/// Parse command-line arguments (including the program name).
///
/// # Examples
///
/// ```
/// use profile::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["renn-profile".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> ProfileResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--dark" => options.dark = true,
            "--tab" => {
                let value = args
                    .next()
                    .ok_or_else(|| ProfileError::InvalidTabArgument(String::new()))?;
                options.tabs.push(TabSelection::parse_pair(&value)?);
            }
            other => {
                if let Some(value) = other.strip_prefix("--tab=") {
                    options.tabs.push(TabSelection::parse_pair(value)?);
                }
            }
        }
    }

    Ok(CliCommand::Run(options))
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "renn-profile {}\n\
         \n\
         USAGE:\n    renn-profile [--dark] [--tab <group>=<option>]...\n\
         \n\
         OPTIONS:\n\
         \x20   --dark                  start in dark mode\n\
         \x20   --tab <group>=<option>  preselect a tab (stats=anime|manga,\n\
         \x20                           favorites=characters|anime,\n\
         \x20                           skills=webdev|editing|hacking)\n\
         \x20   -V, --version           print version\n\
         \x20   -h, --help              print this help\n\
         \n\
         ENVIRONMENT:\n\
         \x20   PROFILE_ENABLE_ANIMATIONS=true  enable entrance/hover motion\n\
         \x20   PROFILE_LOG=<path>              write logs to <path>\n\
         \x20   RUST_LOG=<filter>               log filter (default: info)\n",
        super::VERSION
    )
}
