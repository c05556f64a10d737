//! Process configuration.
//!
//! Read once at startup and never modified afterwards. The animation flag in
//! particular is handed to [`crate::state::ViewState`] at construction.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable enabling entrance/hover animations.
pub const ENV_ENABLE_ANIMATIONS: &str = "PROFILE_ENABLE_ANIMATIONS";
/// Environment variable naming the log file.
pub const ENV_LOG_FILE: &str = "PROFILE_LOG";
/// Environment variable holding the tracing filter.
pub const ENV_LOG_FILTER: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_TICK_MS: u64 = 16;

/// Configuration for one run of the profile view.
///
/// Use the builder methods to customize it.
///
/// # Example
///
/// ```
/// use profile::config::ProfileConfig;
///
/// let config = ProfileConfig::default().with_animations(true);
/// assert!(config.animations_enabled);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    /// Entrance/hover animations (default: false)
    pub animations_enabled: bool,
    /// Where tracing output goes; no logging when unset
    pub log_file: Option<PathBuf>,
    /// tracing `EnvFilter` directive (default: "info")
    pub log_filter: String,
    /// Event loop tick (default: 16ms)
    pub tick_interval: Duration,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            animations_enabled: false,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl ProfileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations_enabled = enabled;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default()
            .with_animations(parse_enabled_flag(lookup(ENV_ENABLE_ANIMATIONS).as_deref()));

        if let Some(path) = lookup(ENV_LOG_FILE).filter(|p| !p.trim().is_empty()) {
            config = config.with_log_file(path);
        }
        if let Some(filter) = lookup(ENV_LOG_FILTER).filter(|f| !f.trim().is_empty()) {
            config = config.with_log_filter(filter);
        }
        config
    }
}

/// Only the literal string `"true"` enables a flag.
pub fn parse_enabled_flag(value: Option<&str>) -> bool {
    value == Some("true")
}
