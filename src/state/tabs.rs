//! Tab groups and their closed option sets.
//!
//! Each panel owns an independent tab group. Options are plain enums so an
//! option of one group can never be handed to another, and an option outside
//! a group's set cannot be constructed.

use serde::Serialize;

use crate::error::{ProfileError, ProfileResult};

/// Identifies one of the three independent tab groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabGroup {
    Stats,
    Favorites,
    Skills,
}

impl TabGroup {
    pub const ALL: [TabGroup; 3] = [TabGroup::Stats, TabGroup::Favorites, TabGroup::Skills];

    pub fn id(self) -> &'static str {
        match self {
            TabGroup::Stats => "stats",
            TabGroup::Favorites => "favorites",
            TabGroup::Skills => "skills",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.id() == id)
    }

    /// Option ids accepted by this group, in display order.
    pub fn option_ids(self) -> Vec<&'static str> {
        match self {
            TabGroup::Stats => StatsTab::ALL.iter().map(|o| o.id()).collect(),
            TabGroup::Favorites => FavoritesTab::ALL.iter().map(|o| o.id()).collect(),
            TabGroup::Skills => SkillsTab::ALL.iter().map(|o| o.id()).collect(),
        }
    }
}

/// Shared behaviour of every tab option enum.
pub trait TabOption: Copy + Eq + Sized + 'static {
    /// The group this option set belongs to.
    const GROUP: TabGroup;
    /// Every option, in display order. The first one is the default.
    const ALL: &'static [Self];

    fn id(self) -> &'static str;
    fn label(self) -> &'static str;

    /// Label used on narrow terminals.
    fn short_label(self) -> &'static str {
        self.label()
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|o| *o == self).unwrap_or(0)
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.id() == id)
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next option, wrapping around.
    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous option, wrapping around.
    fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Anime / manga statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsTab {
    #[default]
    Anime,
    Manga,
}

impl TabOption for StatsTab {
    const GROUP: TabGroup = TabGroup::Stats;
    const ALL: &'static [Self] = &[StatsTab::Anime, StatsTab::Manga];

    fn id(self) -> &'static str {
        match self {
            StatsTab::Anime => "anime",
            StatsTab::Manga => "manga",
        }
    }

    fn label(self) -> &'static str {
        match self {
            StatsTab::Anime => "Anime Stats",
            StatsTab::Manga => "Manga Stats",
        }
    }

    fn short_label(self) -> &'static str {
        match self {
            StatsTab::Anime => "Anime",
            StatsTab::Manga => "Manga",
        }
    }
}

/// Favorites panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoritesTab {
    #[default]
    Characters,
    Anime,
}

impl TabOption for FavoritesTab {
    const GROUP: TabGroup = TabGroup::Favorites;
    const ALL: &'static [Self] = &[FavoritesTab::Characters, FavoritesTab::Anime];

    fn id(self) -> &'static str {
        match self {
            FavoritesTab::Characters => "characters",
            FavoritesTab::Anime => "anime",
        }
    }

    fn label(self) -> &'static str {
        match self {
            FavoritesTab::Characters => "Favorite Characters",
            FavoritesTab::Anime => "Favorite Anime",
        }
    }

    fn short_label(self) -> &'static str {
        match self {
            FavoritesTab::Characters => "Characters",
            FavoritesTab::Anime => "Anime",
        }
    }
}

/// Skills panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillsTab {
    #[default]
    WebDev,
    Editing,
    Hacking,
}

impl TabOption for SkillsTab {
    const GROUP: TabGroup = TabGroup::Skills;
    const ALL: &'static [Self] = &[SkillsTab::WebDev, SkillsTab::Editing, SkillsTab::Hacking];

    fn id(self) -> &'static str {
        match self {
            SkillsTab::WebDev => "webdev",
            SkillsTab::Editing => "editing",
            SkillsTab::Hacking => "hacking",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SkillsTab::WebDev => "Web Development",
            SkillsTab::Editing => "Editing",
            SkillsTab::Hacking => "Hacking",
        }
    }

    fn short_label(self) -> &'static str {
        match self {
            SkillsTab::WebDev => "Web Dev",
            SkillsTab::Editing => "Editing",
            SkillsTab::Hacking => "Hacking",
        }
    }
}

/// A selection in exactly one tab group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSelection {
    Stats(StatsTab),
    Favorites(FavoritesTab),
    Skills(SkillsTab),
}

impl TabSelection {
    pub fn group(self) -> TabGroup {
        match self {
            TabSelection::Stats(_) => TabGroup::Stats,
            TabSelection::Favorites(_) => TabGroup::Favorites,
            TabSelection::Skills(_) => TabGroup::Skills,
        }
    }

    pub fn option_id(self) -> &'static str {
        match self {
            TabSelection::Stats(o) => o.id(),
            TabSelection::Favorites(o) => o.id(),
            TabSelection::Skills(o) => o.id(),
        }
    }

    /// The `index`-th option of `group`, if it exists.
    pub fn nth(group: TabGroup, index: usize) -> Option<Self> {
        match group {
            TabGroup::Stats => StatsTab::from_index(index).map(TabSelection::Stats),
            TabGroup::Favorites => FavoritesTab::from_index(index).map(TabSelection::Favorites),
            TabGroup::Skills => SkillsTab::from_index(index).map(TabSelection::Skills),
        }
    }

    /// Parse textual group and option ids into a typed selection.
    pub fn parse(group: &str, option: &str) -> ProfileResult<Self> {
        let tab_group = TabGroup::from_id(group).ok_or_else(|| ProfileError::UnknownTabGroup {
            group: group.to_string(),
            expected: TabGroup::ALL
                .iter()
                .map(|g| g.id())
                .collect::<Vec<_>>()
                .join(", "),
        })?;

        let selection = match tab_group {
            TabGroup::Stats => StatsTab::from_id(option).map(TabSelection::Stats),
            TabGroup::Favorites => FavoritesTab::from_id(option).map(TabSelection::Favorites),
            TabGroup::Skills => SkillsTab::from_id(option).map(TabSelection::Skills),
        };

        selection.ok_or_else(|| ProfileError::UnknownTabOption {
            group: group.to_string(),
            option: option.to_string(),
            expected: tab_group.option_ids().join(", "),
        })
    }

    /// Parse a `group=option` argument.
    pub fn parse_pair(arg: &str) -> ProfileResult<Self> {
        let (group, option) = arg
            .split_once('=')
            .ok_or_else(|| ProfileError::InvalidTabArgument(arg.to_string()))?;
        Self::parse(group.trim(), option.trim())
    }
}

impl From<StatsTab> for TabSelection {
    fn from(tab: StatsTab) -> Self {
        TabSelection::Stats(tab)
    }
}

impl From<FavoritesTab> for TabSelection {
    fn from(tab: FavoritesTab) -> Self {
        TabSelection::Favorites(tab)
    }
}

impl From<SkillsTab> for TabSelection {
    fn from(tab: SkillsTab) -> Self {
        TabSelection::Skills(tab)
    }
}
