//! Root-level theme marker.
//!
//! The colour scheme is switched by a single flag on the root render context.
//! [`ThemeMarker`] is the only way the view state touches it, which keeps the
//! store testable without a terminal.

use serde::Serialize;

/// Narrow interface to the root theme flag.
pub trait ThemeMarker {
    /// Add (`true`) or remove (`false`) the dark marker.
    fn set_dark(&mut self, dark: bool);

    /// Whether the dark marker is currently present.
    fn is_dark(&self) -> bool;
}

/// Active colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Theme marker held by the root render context of the terminal UI.
#[derive(Debug, Clone, Default)]
pub struct RootTheme {
    mode: ThemeMode,
}

impl RootTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }
}

impl ThemeMarker for RootTheme {
    fn set_dark(&mut self, dark: bool) {
        self.mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
    }

    fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }
}
