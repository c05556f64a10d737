//! Application state and logic for the TUI.
//!
//! [`App`] owns the [`ViewState`] and the purely navigational state around it
//! (focus, cursors, pointer position, animation clock). Rendering reads it
//! through `&App`; only key and mouse handlers mutate it.

mod event_loop;
mod handlers;
mod navigation;
mod state_methods;
mod types;

pub use event_loop::run_app;
pub use types::{Focus, MountTimes, PanelMount, PanelView};

use std::io;
use std::time::Duration;

use crate::cli::RunOptions;
use crate::config::ProfileConfig;
use crate::state::ViewState;

/// Opens an outbound URL.
pub type LinkOpener = fn(&str) -> io::Result<()>;

fn open_in_browser(url: &str) -> io::Result<()> {
    open::that(url)
}

/// Main application state.
pub struct App {
    /// Theme, tab selections and animation flag
    pub view: ViewState,
    /// Panel receiving navigation keys
    pub focus: Focus,
    /// Highlighted social link
    pub link_cursor: usize,
    /// First visible row of the entry list
    pub list_scroll: usize,
    /// Last known mouse position (column, row)
    pub pointer: Option<(u16, u16)>,
    /// Animation clock: time since the page mounted
    pub clock: Duration,
    /// Duration of one tick
    pub tick_interval: Duration,
    /// When each animated region last mounted
    pub mounts: MountTimes,
    /// Set when the next loop iteration must redraw
    pub needs_redraw: bool,
    pub should_quit: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
    link_opener: LinkOpener,
}

impl App {
    /// Build the app from configuration and command-line overrides.
    pub fn new(config: &ProfileConfig, options: RunOptions) -> Self {
        let mut view = ViewState::new(config.animations_enabled);
        if options.dark {
            view.toggle_dark_mode(true);
        }
        for selection in options.tabs {
            view.select_tab(selection);
        }

        Self {
            view,
            focus: Focus::default(),
            link_cursor: 0,
            list_scroll: 0,
            pointer: None,
            clock: Duration::ZERO,
            tick_interval: config.tick_interval,
            mounts: MountTimes::default(),
            needs_redraw: true,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
            link_opener: open_in_browser,
        }
    }

    /// Replace the function used to open social links.
    pub fn with_link_opener(mut self, opener: LinkOpener) -> Self {
        self.link_opener = opener;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&ProfileConfig::default(), RunOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SkillsTab, StatsTab, TabSelection, ThemeMarker};

    #[test]
    fn test_app_default_state() {
        let app = App::default();
        assert_eq!(app.focus, Focus::Sidebar);
        assert!(!app.view.dark_mode());
        assert!(!app.view.animations_enabled());
        assert!(app.needs_redraw);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_app_applies_run_options() {
        let options = RunOptions {
            dark: true,
            tabs: vec![TabSelection::Skills(SkillsTab::Hacking)],
        };
        let config = ProfileConfig::default().with_animations(true);
        let app = App::new(&config, options);

        assert!(app.view.dark_mode());
        assert!(app.view.theme_marker().is_dark());
        assert_eq!(app.view.skills_tab(), SkillsTab::Hacking);
        assert_eq!(app.view.stats_tab(), StatsTab::Anime);
        assert!(app.view.animations_enabled());
    }
}
