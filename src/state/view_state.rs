//! Session-local view state of the profile page.

use serde::Serialize;

use crate::error::ProfileResult;
use crate::motion::{Motion, MotionPreset};

use super::tabs::{FavoritesTab, SkillsTab, StatsTab, TabGroup, TabSelection};
use super::theme_marker::{RootTheme, ThemeMarker};

/// Theme preference, tab selections and the animation flag of one view.
///
/// Created once per view and dropped with it; nothing here is persisted.
/// `animations_enabled` is fixed at construction and has no setter.
#[derive(Debug, Clone)]
pub struct ViewState<M = RootTheme> {
    dark_mode: bool,
    stats_tab: StatsTab,
    favorites_tab: FavoritesTab,
    skills_tab: SkillsTab,
    animations_enabled: bool,
    marker: M,
}

/// Serializable copy of the state, used for debug logging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub dark_mode: bool,
    pub stats_tab: StatsTab,
    pub favorites_tab: FavoritesTab,
    pub skills_tab: SkillsTab,
    pub animations_enabled: bool,
}

impl ViewState<RootTheme> {
    pub fn new(animations_enabled: bool) -> Self {
        Self::with_marker(animations_enabled, RootTheme::new())
    }
}

impl Default for ViewState<RootTheme> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<M: ThemeMarker> ViewState<M> {
    /// Create a view state driving the given theme marker.
    ///
    /// The marker is cleared so it agrees with the initial light theme.
    pub fn with_marker(animations_enabled: bool, mut marker: M) -> Self {
        marker.set_dark(false);
        Self {
            dark_mode: false,
            stats_tab: StatsTab::default(),
            favorites_tab: FavoritesTab::default(),
            skills_tab: SkillsTab::default(),
            animations_enabled,
            marker,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn stats_tab(&self) -> StatsTab {
        self.stats_tab
    }

    pub fn favorites_tab(&self) -> FavoritesTab {
        self.favorites_tab
    }

    pub fn skills_tab(&self) -> SkillsTab {
        self.skills_tab
    }

    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }

    pub fn theme_marker(&self) -> &M {
        &self.marker
    }

    /// Set the theme preference and update the root marker in the same call.
    pub fn toggle_dark_mode(&mut self, next: bool) {
        self.dark_mode = next;
        self.marker.set_dark(next);
        tracing::debug!(dark_mode = next, "theme changed");
    }

    /// Change the selection of one tab group. Other groups are untouched.
    pub fn select_tab(&mut self, selection: impl Into<TabSelection>) {
        let selection = selection.into();
        match selection {
            TabSelection::Stats(tab) => self.stats_tab = tab,
            TabSelection::Favorites(tab) => self.favorites_tab = tab,
            TabSelection::Skills(tab) => self.skills_tab = tab,
        }
        tracing::debug!(
            group = selection.group().id(),
            option = selection.option_id(),
            "tab selected"
        );
    }

    /// Select a tab from textual ids; invalid pairs leave the state unchanged.
    pub fn select_tab_by_id(&mut self, group: &str, option: &str) -> ProfileResult<()> {
        let selection = TabSelection::parse(group, option)?;
        self.select_tab(selection);
        Ok(())
    }

    /// Current selection of `group`.
    pub fn selected(&self, group: TabGroup) -> TabSelection {
        match group {
            TabGroup::Stats => TabSelection::Stats(self.stats_tab),
            TabGroup::Favorites => TabSelection::Favorites(self.favorites_tab),
            TabGroup::Skills => TabSelection::Skills(self.skills_tab),
        }
    }

    /// Motion for `preset`, or [`Motion::Empty`] when animations are disabled.
    pub fn animation_preset(&self, preset: MotionPreset) -> Motion {
        if !self.animations_enabled {
            return Motion::Empty;
        }
        Motion::Animated(preset.spec())
    }

    /// Like [`ViewState::animation_preset`], keyed by preset name.
    /// Unknown names yield [`Motion::Empty`].
    pub fn animation_preset_by_name(&self, name: &str) -> Motion {
        if !self.animations_enabled {
            return Motion::Empty;
        }
        MotionPreset::from_name(name)
            .map(|preset| self.animation_preset(preset))
            .unwrap_or(Motion::Empty)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            dark_mode: self.dark_mode,
            stats_tab: self.stats_tab,
            favorites_tab: self.favorites_tab,
            skills_tab: self.skills_tab,
            animations_enabled: self.animations_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tabs::TabOption;

    /// Marker that counts writes, to check the toggle always reaches it.
    #[derive(Debug, Default)]
    struct CountingMarker {
        dark: bool,
        writes: usize,
    }

    impl ThemeMarker for CountingMarker {
        fn set_dark(&mut self, dark: bool) {
            self.dark = dark;
            self.writes += 1;
        }

        fn is_dark(&self) -> bool {
            self.dark
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new(true);
        assert!(!state.dark_mode());
        assert_eq!(state.stats_tab(), StatsTab::Anime);
        assert_eq!(state.favorites_tab(), FavoritesTab::Characters);
        assert_eq!(state.skills_tab(), SkillsTab::WebDev);
        assert!(state.animations_enabled());
        assert!(!state.theme_marker().is_dark());
    }

    #[test]
    fn test_with_marker_clears_preexisting_dark_marker() {
        let marker = CountingMarker {
            dark: true,
            writes: 0,
        };
        let state = ViewState::with_marker(false, marker);
        assert!(!state.theme_marker().is_dark());
        assert_eq!(state.theme_marker().writes, 1);
    }

    #[test]
    fn test_toggle_dark_mode_writes_marker_every_time() {
        let mut state = ViewState::with_marker(false, CountingMarker::default());
        state.toggle_dark_mode(true);
        state.toggle_dark_mode(true);
        assert!(state.dark_mode());
        assert!(state.theme_marker().is_dark());
        assert_eq!(state.theme_marker().writes, 3);

        state.toggle_dark_mode(false);
        assert!(!state.dark_mode());
        assert!(!state.theme_marker().is_dark());
    }

    #[test]
    fn test_select_tab_only_touches_its_group() {
        let mut state = ViewState::new(false);
        state.select_tab(FavoritesTab::Anime);
        assert_eq!(state.favorites_tab(), FavoritesTab::Anime);
        assert_eq!(state.stats_tab(), StatsTab::Anime);
        assert_eq!(state.skills_tab(), SkillsTab::WebDev);
    }

    #[test]
    fn test_select_tab_by_id_rejects_and_keeps_state() {
        let mut state = ViewState::new(false);
        state.select_tab(SkillsTab::Editing);
        assert!(state.select_tab_by_id("skills", "anime").is_err());
        assert!(state.select_tab_by_id("nope", "anime").is_err());
        assert_eq!(state.skills_tab(), SkillsTab::Editing);

        state.select_tab_by_id("stats", "manga").unwrap();
        assert_eq!(state.stats_tab(), StatsTab::Manga);
    }

    #[test]
    fn test_selected_reflects_each_group() {
        let mut state = ViewState::new(false);
        for skill in SkillsTab::ALL {
            state.select_tab(*skill);
            assert_eq!(state.selected(TabGroup::Skills), TabSelection::Skills(*skill));
        }
    }

    #[test]
    fn test_animation_preset_disabled_is_empty() {
        let state = ViewState::new(false);
        for preset in MotionPreset::ALL {
            assert_eq!(state.animation_preset(preset), Motion::Empty);
        }
        assert_eq!(state.animation_preset_by_name("unknown"), Motion::Empty);
    }

    #[test]
    fn test_animation_preset_enabled() {
        let state = ViewState::new(true);
        assert_eq!(
            state.animation_preset(MotionPreset::SidebarSlide),
            Motion::Animated(MotionPreset::SidebarSlide.spec())
        );
        assert_eq!(
            state.animation_preset_by_name("sidebar-slide"),
            state.animation_preset(MotionPreset::SidebarSlide)
        );
        assert_eq!(state.animation_preset_by_name("unknown"), Motion::Empty);
    }

    #[test]
    fn test_snapshot_serializes_ids() {
        let mut state = ViewState::new(false);
        state.select_tab(SkillsTab::Hacking);
        state.toggle_dark_mode(true);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["skills_tab"], "hacking");
        assert_eq!(json["stats_tab"], "anime");
        assert_eq!(json["dark_mode"], true);
    }
}
