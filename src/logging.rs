//! Tracing setup.
//!
//! The TUI owns stdout, so log output only goes to the file named by
//! `PROFILE_LOG`. Without it no subscriber is installed and the `tracing`
//! macros are no-ops.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::ProfileConfig;
use crate::error::{ProfileError, ProfileResult};

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(false)` when logging is not configured.
pub fn init_logging(config: &ProfileConfig) -> ProfileResult<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let file = open_log_file(path)?;
    let filter = build_filter(&config.log_filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| ProfileError::Logging(e.to_string()))?;

    Ok(true)
}

/// Parse a filter directive, e.g. `info` or `profile=debug`.
pub fn build_filter(directive: &str) -> ProfileResult<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| ProfileError::Logging(e.to_string()))
}

fn open_log_file(path: &Path) -> ProfileResult<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
