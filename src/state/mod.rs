//! View state store.
//!
//! - [`ViewState`]: theme preference, tab selections, animation flag
//! - [`tabs`]: the three closed tab groups
//! - [`ThemeMarker`]: the root theme flag the store drives

pub mod tabs;
mod theme_marker;
mod view_state;

pub use tabs::{FavoritesTab, SkillsTab, StatsTab, TabGroup, TabOption, TabSelection};
pub use theme_marker::{RootTheme, ThemeMarker, ThemeMode};
pub use view_state::{ViewSnapshot, ViewState};
