//! Error types for the profile view.
//!
//! The view state itself cannot fail: tab options are closed enums and the
//! theme toggle accepts any bool. Errors only show up at the edges, where
//! textual input (command-line arguments) is turned into typed selections,
//! and in the terminal/logging setup.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `UnknownTabGroup` | `TabSelection::parse` with a group id outside `stats`/`favorites`/`skills` |
//! | `UnknownTabOption` | `TabSelection::parse` with an option outside the group's set |
//! | `InvalidTabArgument` | `--tab` values that are not `group=option` |
//! | `Io` | terminal and log file operations |
//! | `Logging` | installing the tracing subscriber |

use thiserror::Error;

/// Errors raised outside the (infallible) view state store.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("unknown tab group '{group}' (expected one of: {expected})")]
    UnknownTabGroup { group: String, expected: String },

    #[error("'{option}' is not an option of tab group '{group}' (expected one of: {expected})")]
    UnknownTabOption {
        group: String,
        option: String,
        expected: String,
    },

    #[error("invalid tab argument '{0}', expected <group>=<option>")]
    InvalidTabArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl ProfileError {
    /// Whether the error was caused by caller input rather than the environment.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            ProfileError::UnknownTabGroup { .. }
                | ProfileError::UnknownTabOption { .. }
                | ProfileError::InvalidTabArgument(_)
        )
    }
}

/// Result alias for fallible profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
