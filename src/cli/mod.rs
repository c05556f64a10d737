//! Command-line interface.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use profile::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(options) = run_cli_command(command) {
//!     // start the TUI with `options`
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, RunOptions};
pub use version::{handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// Returns the options to start the TUI with, or `None` when the command was
/// fully handled here. `Version` never returns.
pub fn run_cli_command(command: CliCommand) -> Option<RunOptions> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            print!("{}", usage());
            None
        }
        CliCommand::Run(options) => Some(options),
    }
}
