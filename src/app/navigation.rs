//! Focus, tab and cursor navigation for App.

use super::App;
use crate::content::{stats_for, SOCIAL_LINKS};
use crate::state::{TabGroup, TabOption, TabSelection};

impl App {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Flip the theme.
    pub fn toggle_theme(&mut self) {
        let next = !self.view.dark_mode();
        self.view.toggle_dark_mode(next);
        tracing::debug!(state = ?self.view.snapshot(), "view state");
    }

    /// Apply a tab selection and replay the group's entrance if it changed.
    pub fn select_tab(&mut self, selection: TabSelection) {
        let group = selection.group();
        let previous = self.view.selected(group);
        if previous == selection {
            return;
        }
        self.view.select_tab(selection);
        if group == TabGroup::Stats {
            self.list_scroll = 0;
        }
        self.remount(group, previous);
        tracing::debug!(state = ?self.view.snapshot(), "view state");
    }

    /// Move the focused group's selection one step, wrapping around.
    pub fn step_tab(&mut self, forward: bool) {
        let Some(group) = self.focus.group() else {
            return;
        };
        let selection = match self.view.selected(group) {
            TabSelection::Stats(tab) => {
                TabSelection::Stats(if forward { tab.next() } else { tab.prev() })
            }
            TabSelection::Favorites(tab) => {
                TabSelection::Favorites(if forward { tab.next() } else { tab.prev() })
            }
            TabSelection::Skills(tab) => {
                TabSelection::Skills(if forward { tab.next() } else { tab.prev() })
            }
        };
        self.select_tab(selection);
    }

    /// Select the `index`-th option of the focused group; out of range is ignored.
    pub fn select_nth_tab(&mut self, index: usize) {
        let Some(selection) = self.focus.group().and_then(|g| TabSelection::nth(g, index)) else {
            return;
        };
        self.select_tab(selection);
    }

    /// Move the social link cursor or scroll the entry list.
    pub fn move_cursor(&mut self, down: bool) {
        match self.focus.group() {
            None => {
                let last = SOCIAL_LINKS.len() - 1;
                self.link_cursor = if down {
                    (self.link_cursor + 1).min(last)
                } else {
                    self.link_cursor.saturating_sub(1)
                };
            }
            Some(TabGroup::Stats) => {
                let last = stats_for(self.view.stats_tab()).entry_count().saturating_sub(1);
                self.list_scroll = if down {
                    (self.list_scroll + 1).min(last)
                } else {
                    self.list_scroll.saturating_sub(1)
                };
            }
            Some(_) => {}
        }
    }

    /// Open the highlighted social link. Failures are logged and ignored.
    pub fn open_selected_link(&mut self) {
        if self.focus.group().is_some() {
            return;
        }
        let Some(link) = SOCIAL_LINKS.get(self.link_cursor) else {
            return;
        };
        match (self.link_opener)(link.url) {
            Ok(()) => tracing::info!(url = link.url, "opened link"),
            Err(e) => tracing::warn!(url = link.url, error = %e, "failed to open link"),
        }
    }

    /// Record the mouse position for hover effects.
    pub fn set_pointer(&mut self, column: u16, row: u16) {
        if self.pointer != Some((column, row)) {
            self.pointer = Some((column, row));
            self.mark_dirty();
        }
    }
}
