//! Anime / manga statistics and favorites.

use crate::state::{FavoritesTab, StatsTab};

/// A labelled figure shown in a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
}

/// One row of the scrollable entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub title: String,
    pub progress: &'static str,
    pub thumbnail: &'static str,
}

/// Statistics and tracked entries for one medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSheet {
    pub cards: [StatCard; 4],
    title: &'static str,
    progress: &'static str,
    thumbnail: &'static str,
    entry_count: usize,
}

impl StatsSheet {
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Entries are numbered from 1.
    pub fn entries(&self) -> impl Iterator<Item = ListEntry> + '_ {
        (1..=self.entry_count).map(move |n| ListEntry {
            title: format!("{} {}", self.title, n),
            progress: self.progress,
            thumbnail: self.thumbnail,
        })
    }
}

pub const ANIME_STATS: StatsSheet = StatsSheet {
    cards: [
        StatCard {
            label: "Days Watched",
            value: "33.1",
        },
        StatCard {
            label: "Mean Score",
            value: "8.23",
        },
        StatCard {
            label: "Total Entries",
            value: "162",
        },
        StatCard {
            label: "Episodes",
            value: "2,039",
        },
    ],
    title: "Bleach: Thousand-Year Blood War",
    progress: "12/24",
    thumbnail: "/anime1.jpg",
    entry_count: 10,
};

pub const MANGA_STATS: StatsSheet = StatsSheet {
    cards: [
        StatCard {
            label: "Days Read",
            value: "45.7",
        },
        StatCard {
            label: "Mean Score",
            value: "7.89",
        },
        StatCard {
            label: "Total Entries",
            value: "98",
        },
        StatCard {
            label: "Chapters",
            value: "3,542",
        },
    ],
    title: "Bleach Soul Resonance",
    progress: "56/120",
    thumbnail: "/manga2.jpg",
    entry_count: 10,
};

pub fn stats_for(tab: StatsTab) -> &'static StatsSheet {
    match tab {
        StatsTab::Anime => &ANIME_STATS,
        StatsTab::Manga => &MANGA_STATS,
    }
}

/// A row of favorite tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteShelf {
    caption: &'static str,
    pub thumbnail: &'static str,
    count: usize,
}

impl FavoriteShelf {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn captions(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.count).map(move |n| format!("{} {}", self.caption, n))
    }
}

pub const FAVORITE_CHARACTERS: FavoriteShelf = FavoriteShelf {
    caption: "Character",
    thumbnail: "/char1.jpg",
    count: 5,
};

pub const FAVORITE_ANIME: FavoriteShelf = FavoriteShelf {
    caption: "Anime",
    thumbnail: "/fav2.jpg",
    count: 5,
};

pub fn favorites_for(tab: FavoritesTab) -> &'static FavoriteShelf {
    match tab {
        FavoritesTab::Characters => &FAVORITE_CHARACTERS,
        FavoritesTab::Anime => &FAVORITE_ANIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_numbered_from_one() {
        let entries: Vec<_> = ANIME_STATS.entries().collect();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].title, "Bleach: Thousand-Year Blood War 1");
        assert_eq!(entries[9].title, "Bleach: Thousand-Year Blood War 10");
        assert_eq!(entries[0].progress, "12/24");
    }

    #[test]
    fn test_stats_lookup() {
        assert_eq!(stats_for(StatsTab::Manga).cards[3].label, "Chapters");
        assert_eq!(stats_for(StatsTab::Anime).cards[0].value, "33.1");
    }

    #[test]
    fn test_favorite_captions() {
        let captions: Vec<_> = favorites_for(FavoritesTab::Anime).captions().collect();
        assert_eq!(captions, vec!["Anime 1", "Anime 2", "Anime 3", "Anime 4", "Anime 5"]);
        assert_eq!(FAVORITE_CHARACTERS.len(), 5);
        assert!(!FAVORITE_CHARACTERS.is_empty());
    }
}
