//! Hardcoded page content.
//!
//! Everything here is immutable reference data. Image paths are opaque asset
//! names kept for parity with the web version of the page; the terminal UI
//! only shows them as captions.

mod library;
mod profile;
mod skills;

pub use library::{
    favorites_for, stats_for, FavoriteShelf, ListEntry, StatCard, StatsSheet, ANIME_STATS,
    FAVORITE_ANIME, FAVORITE_CHARACTERS, MANGA_STATS,
};
pub use profile::{Profile, SocialLink, PROFILE, SOCIAL_LINKS};
pub use skills::{skills_for, Skill, EDITING_SKILLS, HACKING_SKILLS, WEB_DEV_SKILLS};
