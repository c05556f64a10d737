// Integration tests for the view state: tab independence, theme marker
// synchronisation and animation gating.

use std::time::Duration;

use profile::motion::{Motion, MotionPreset, VisualState};
use profile::state::{
    FavoritesTab, SkillsTab, StatsTab, TabGroup, TabOption, TabSelection, ThemeMarker, ViewState,
};

/// Marker recording every write, standing in for the document root.
#[derive(Debug, Default)]
struct RecordingMarker {
    dark: bool,
    writes: Vec<bool>,
}

impl ThemeMarker for RecordingMarker {
    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
        self.writes.push(dark);
    }

    fn is_dark(&self) -> bool {
        self.dark
    }
}

fn every_selection() -> Vec<TabSelection> {
    let mut all = Vec::new();
    all.extend(StatsTab::ALL.iter().copied().map(TabSelection::from));
    all.extend(FavoritesTab::ALL.iter().copied().map(TabSelection::from));
    all.extend(SkillsTab::ALL.iter().copied().map(TabSelection::from));
    all
}

// =============================================================================
// Initial State
// =============================================================================

#[test]
fn test_fresh_state_defaults() {
    let state = ViewState::new(false);
    assert!(!state.dark_mode());
    assert!(!state.theme_marker().is_dark());
    assert_eq!(state.stats_tab(), StatsTab::Anime);
    assert_eq!(state.favorites_tab(), FavoritesTab::Characters);
    assert_eq!(state.skills_tab(), SkillsTab::WebDev);
    assert_eq!(state.stats_tab().id(), "anime");
    assert_eq!(state.favorites_tab().id(), "characters");
    assert_eq!(state.skills_tab().id(), "webdev");
}

#[test]
fn test_fresh_state_clears_stale_marker() {
    let marker = RecordingMarker {
        dark: true,
        writes: Vec::new(),
    };
    let state = ViewState::with_marker(true, marker);
    assert!(!state.theme_marker().is_dark());
    assert!(state.animations_enabled());
}

// =============================================================================
// Tab Independence
// =============================================================================

#[test]
fn test_select_tab_touches_only_its_group() {
    for selection in every_selection() {
        let mut state = ViewState::new(false);
        let before = state.snapshot();
        state.select_tab(selection);

        let group = selection.group();
        assert_eq!(state.selected(group), selection);
        for other in TabGroup::ALL.iter().copied().filter(|g| *g != group) {
            assert_eq!(
                state.selected(other),
                ViewState::new(false).selected(other),
                "selecting {:?} changed {:?}",
                selection,
                other
            );
        }
        assert_eq!(state.dark_mode(), before.dark_mode);
        assert_eq!(state.animations_enabled(), before.animations_enabled);
    }
}

#[test]
fn test_select_tab_from_non_default_state() {
    let mut state = ViewState::new(true);
    state.select_tab(StatsTab::Manga);
    state.select_tab(FavoritesTab::Anime);
    state.toggle_dark_mode(true);

    state.select_tab(SkillsTab::Editing);
    assert_eq!(state.stats_tab(), StatsTab::Manga);
    assert_eq!(state.favorites_tab(), FavoritesTab::Anime);
    assert_eq!(state.skills_tab(), SkillsTab::Editing);
    assert!(state.dark_mode());
}

#[test]
fn test_scenario_skills_hacking_then_editing() {
    let mut state = ViewState::new(false);
    state.select_tab(SkillsTab::Hacking);
    state.select_tab(SkillsTab::Editing);
    assert_eq!(state.skills_tab(), SkillsTab::Editing);
    assert_eq!(state.stats_tab(), StatsTab::Anime);
    assert_eq!(state.favorites_tab(), FavoritesTab::Characters);
}

#[test]
fn test_select_tab_by_id_rejects_unknown_values() {
    let mut state = ViewState::new(false);
    assert!(state.select_tab_by_id("skills", "cooking").is_err());
    assert!(state.select_tab_by_id("hobbies", "anime").is_err());
    // favorites has "anime" but skills does not
    assert!(state.select_tab_by_id("skills", "anime").is_err());
    assert_eq!(state.snapshot(), ViewState::new(false).snapshot());

    state.select_tab_by_id("favorites", "anime").unwrap();
    assert_eq!(state.favorites_tab(), FavoritesTab::Anime);
}

// =============================================================================
// Theme Marker
// =============================================================================

#[test]
fn test_toggle_dark_mode_sets_marker() {
    let mut state = ViewState::with_marker(false, RecordingMarker::default());

    state.toggle_dark_mode(true);
    assert!(state.dark_mode());
    assert!(state.theme_marker().is_dark());

    state.toggle_dark_mode(false);
    assert!(!state.dark_mode());
    assert!(!state.theme_marker().is_dark());
}

#[test]
fn test_toggle_dark_mode_idempotent() {
    let mut state = ViewState::with_marker(false, RecordingMarker::default());
    state.toggle_dark_mode(true);
    state.toggle_dark_mode(true);
    assert!(state.dark_mode());
    assert!(state.theme_marker().is_dark());

    state.toggle_dark_mode(false);
    state.toggle_dark_mode(false);
    assert!(!state.dark_mode());
    assert!(!state.theme_marker().is_dark());
}

#[test]
fn test_every_toggle_reaches_marker() {
    let mut state = ViewState::with_marker(false, RecordingMarker::default());
    state.toggle_dark_mode(true);
    state.toggle_dark_mode(false);
    state.toggle_dark_mode(true);
    // Construction clears the marker first.
    assert_eq!(state.theme_marker().writes, vec![false, true, false, true]);
}

#[test]
fn test_tab_selection_leaves_marker_alone() {
    let mut state = ViewState::with_marker(false, RecordingMarker::default());
    state.toggle_dark_mode(true);
    let writes = state.theme_marker().writes.len();
    state.select_tab(StatsTab::Manga);
    assert_eq!(state.theme_marker().writes.len(), writes);
    assert!(state.theme_marker().is_dark());
}

// =============================================================================
// Animation Gating
// =============================================================================

#[test]
fn test_disabled_animations_are_empty_for_every_preset() {
    let state = ViewState::new(false);
    for preset in MotionPreset::ALL {
        assert_eq!(state.animation_preset(preset), Motion::Empty);
        assert_eq!(state.animation_preset_by_name(preset.name()), Motion::Empty);
    }
    assert_eq!(state.animation_preset_by_name("confetti"), Motion::Empty);
    assert_eq!(state.animation_preset_by_name(""), Motion::Empty);
}

#[test]
fn test_enabled_animations_return_presets() {
    let state = ViewState::new(true);
    for preset in MotionPreset::ALL {
        assert_eq!(state.animation_preset(preset), Motion::Animated(preset.spec()));
        assert_eq!(
            state.animation_preset_by_name(preset.name()),
            Motion::Animated(preset.spec())
        );
    }
    assert_eq!(state.animation_preset_by_name("confetti"), Motion::Empty);
}

#[test]
fn test_animation_preset_is_pure() {
    let mut state = ViewState::new(true);
    let first: Vec<Motion> = MotionPreset::ALL
        .iter()
        .map(|p| state.animation_preset(*p))
        .collect();

    // Unrelated state changes do not affect the result.
    state.toggle_dark_mode(true);
    state.select_tab(SkillsTab::Hacking);

    let second: Vec<Motion> = MotionPreset::ALL
        .iter()
        .map(|p| state.animation_preset(*p))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_scenario_disabled_stat_card_hover_is_empty() {
    let state = ViewState::new(false);
    let motion = state.animation_preset(MotionPreset::StatCardHover);
    assert!(motion.is_empty());
    assert!(motion.spec().is_none());
    // No offset, delay or duration: the settled state at time zero.
    assert_eq!(motion.hover_state(true), VisualState::SETTLED);
    assert_eq!(motion.sample(0, Duration::ZERO), VisualState::SETTLED);
    assert_eq!(motion.settle_time(4), Duration::ZERO);
}

#[test]
fn test_enabled_stat_card_hover_scales() {
    let state = ViewState::new(true);
    let motion = state.animation_preset(MotionPreset::StatCardHover);
    let spec = motion.spec().unwrap();
    assert_eq!(spec.duration, Duration::from_millis(200));
    assert!(motion.hover_state(true).scale > 1.0);
    assert_eq!(motion.hover_state(false).scale, 1.0);
}
