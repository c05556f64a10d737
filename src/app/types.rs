//! Type definitions for the app module.

use std::time::Duration;

use crate::motion::VisualState;
use crate::state::{TabGroup, TabSelection};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Social links
    #[default]
    Sidebar,
    Stats,
    Favorites,
    Skills,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Sidebar, Focus::Stats, Focus::Favorites, Focus::Skills];

    /// The tab group owned by this panel, if any.
    pub fn group(self) -> Option<TabGroup> {
        match self {
            Focus::Sidebar => None,
            Focus::Stats => Some(TabGroup::Stats),
            Focus::Favorites => Some(TabGroup::Favorites),
            Focus::Skills => Some(TabGroup::Skills),
        }
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Mount bookkeeping for one tab group's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelMount {
    /// Clock time at which the current content mounts. Lies in the future
    /// while the previous content is still leaving.
    pub at: Duration,
    /// Content fading out until `at`
    pub leaving: Option<TabSelection>,
}

/// Clock time at which each animated region last mounted.
///
/// Tab content remounts when its group changes, replaying its entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MountTimes {
    pub page: Duration,
    pub stats: PanelMount,
    pub favorites: PanelMount,
    pub skills: PanelMount,
}

impl MountTimes {
    pub fn of(&self, group: TabGroup) -> &PanelMount {
        match group {
            TabGroup::Stats => &self.stats,
            TabGroup::Favorites => &self.favorites,
            TabGroup::Skills => &self.skills,
        }
    }

    pub fn of_mut(&mut self, group: TabGroup) -> &mut PanelMount {
        match group {
            TabGroup::Stats => &mut self.stats,
            TabGroup::Favorites => &mut self.favorites,
            TabGroup::Skills => &mut self.skills,
        }
    }
}

/// What a tab group's content area shows at the current clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelView {
    /// Selection whose content is drawn
    pub selection: TabSelection,
    /// Fade applied to the whole content area
    pub fade: VisualState,
    /// Time since mount, sampled by per-item entrance motions
    pub elapsed: Duration,
}
