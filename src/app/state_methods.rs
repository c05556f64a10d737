//! Clock and lifecycle methods for App.

use std::time::Duration;

use super::{App, PanelView};
use crate::content::{favorites_for, skills_for, stats_for, SOCIAL_LINKS};
use crate::motion::MotionPreset;
use crate::state::{FavoritesTab, SkillsTab, StatsTab, TabGroup, TabSelection};

impl App {
    /// Advance the animation clock by one tick.
    pub fn tick(&mut self) {
        self.advance_clock(self.clock + self.tick_interval);
    }

    /// Move the animation clock forward to `now`, measured from page mount.
    /// The clock never runs backwards.
    pub fn advance_clock(&mut self, now: Duration) {
        if now <= self.clock {
            return;
        }
        self.clock = now;
        if self.is_animating() {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Time elapsed since `mounted_at`; zero if that is still ahead.
    pub fn elapsed_since(&self, mounted_at: Duration) -> Duration {
        self.clock.saturating_sub(mounted_at)
    }

    /// Time since the page first rendered.
    pub fn page_elapsed(&self) -> Duration {
        self.elapsed_since(self.mounts.page)
    }

    /// Time since the content of `group` last mounted.
    pub fn panel_elapsed(&self, group: TabGroup) -> Duration {
        self.elapsed_since(self.mounts.of(group).at)
    }

    /// Remount a tab group's content so its entrance motion replays.
    ///
    /// With animations enabled the previous content fades out first and the
    /// new content mounts once it is gone.
    pub(super) fn remount(&mut self, group: TabGroup, previous: TabSelection) {
        let now = self.clock;
        let exit = self
            .view
            .animation_preset(MotionPreset::TabContentFade)
            .exit_time();
        let mount = self.mounts.of_mut(group);
        if mount.at > now {
            // Still leaving: the latest selection waits behind the same exit.
            return;
        }
        mount.leaving = (!exit.is_zero()).then_some(previous);
        mount.at = now + exit;
    }

    /// Content, fade and entrance clock of a tab group's content area.
    pub fn panel_view(&self, group: TabGroup) -> PanelView {
        let fade = self.view.animation_preset(MotionPreset::TabContentFade);
        let mount = self.mounts.of(group);
        match mount.leaving {
            Some(selection) if self.clock < mount.at => {
                let exit_started = mount.at.saturating_sub(fade.exit_time());
                PanelView {
                    selection,
                    fade: fade.exit(self.clock.saturating_sub(exit_started)),
                    // Leaving content finished its entrance long ago.
                    elapsed: Duration::MAX,
                }
            }
            _ => {
                let elapsed = self.panel_elapsed(group);
                PanelView {
                    selection: self.view.selected(group),
                    fade: fade.sample(0, elapsed),
                    elapsed,
                }
            }
        }
    }

    /// Stats tab whose content is on screen.
    pub fn shown_stats_tab(&self) -> StatsTab {
        match self.panel_view(TabGroup::Stats).selection {
            TabSelection::Stats(tab) => tab,
            _ => self.view.stats_tab(),
        }
    }

    /// Favorites tab whose content is on screen.
    pub fn shown_favorites_tab(&self) -> FavoritesTab {
        match self.panel_view(TabGroup::Favorites).selection {
            TabSelection::Favorites(tab) => tab,
            _ => self.view.favorites_tab(),
        }
    }

    /// Skills tab whose content is on screen.
    pub fn shown_skills_tab(&self) -> SkillsTab {
        match self.panel_view(TabGroup::Skills).selection {
            TabSelection::Skills(tab) => tab,
            _ => self.view.skills_tab(),
        }
    }

    /// Whether any entrance motion is still running.
    pub fn is_animating(&self) -> bool {
        if !self.view.animations_enabled() {
            return false;
        }

        let view = &self.view;
        let settle = |preset: MotionPreset, count: usize| {
            view.animation_preset(preset).settle_time(count)
        };

        let page = [
            settle(MotionPreset::PageFade, 1),
            settle(MotionPreset::SidebarSlide, 1),
            settle(MotionPreset::MainSlide, 1),
            settle(MotionPreset::SocialLink, SOCIAL_LINKS.len()),
        ];
        let stats = [
            settle(MotionPreset::TabContentFade, 1),
            settle(MotionPreset::ListEntry, stats_for(view.stats_tab()).entry_count()),
        ];
        let favorites = [
            settle(MotionPreset::TabContentFade, 1),
            settle(MotionPreset::FavoriteCard, favorites_for(view.favorites_tab()).len()),
        ];
        let skill_count = skills_for(view.skills_tab()).len();
        let skills = [
            settle(MotionPreset::TabContentFade, 1),
            settle(MotionPreset::SkillRow, skill_count),
            settle(MotionPreset::SkillBar, skill_count),
        ];

        let running = |elapsed: Duration, settles: &[Duration]| {
            settles.iter().any(|settle| elapsed < *settle)
        };

        running(self.page_elapsed(), &page[..])
            || running(self.panel_elapsed(TabGroup::Stats), &stats[..])
            || running(self.panel_elapsed(TabGroup::Favorites), &favorites[..])
            || running(self.panel_elapsed(TabGroup::Skills), &skills[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::RunOptions;
    use crate::config::ProfileConfig;

    fn animated_app() -> App {
        App::new(&ProfileConfig::default().with_animations(true), RunOptions::default())
    }

    #[test]
    fn test_tick_advances_clock() {
        let mut app = App::default();
        app.tick();
        app.tick();
        assert_eq!(app.clock, Duration::from_millis(32));
        assert_eq!(app.page_elapsed(), Duration::from_millis(32));
    }

    #[test]
    fn test_advance_clock_follows_wall_time() {
        let mut app = animated_app();
        app.needs_redraw = false;
        app.advance_clock(Duration::from_millis(900));
        assert_eq!(app.page_elapsed(), Duration::from_millis(900));
        assert!(app.needs_redraw);

        // Never runs backwards
        app.advance_clock(Duration::from_millis(100));
        assert_eq!(app.clock, Duration::from_millis(900));
    }

    #[test]
    fn test_static_app_never_animates() {
        let app = App::default();
        assert!(!app.is_animating());
    }

    #[test]
    fn test_animated_app_settles() {
        let mut app = animated_app();
        assert!(app.is_animating());

        // Longest entrance: web dev skill bars, 200 + 8 * 100 + 500 ms.
        app.advance_clock(Duration::from_millis(1500));
        assert!(!app.is_animating());
    }

    #[test]
    fn test_tab_change_fades_old_content_out_first() {
        let mut app = animated_app();
        app.advance_clock(Duration::from_secs(2));
        assert!(!app.is_animating());

        app.select_tab(TabSelection::Stats(StatsTab::Manga));
        assert_eq!(app.view.stats_tab(), StatsTab::Manga);
        assert_eq!(app.shown_stats_tab(), StatsTab::Anime);
        assert!(app.is_animating());

        app.tick();
        let leaving = app.panel_view(TabGroup::Stats);
        assert!(leaving.fade.opacity < 1.0);
        assert_eq!(leaving.selection, TabSelection::Stats(StatsTab::Anime));

        // Exit over: new content mounts and starts its entrance
        app.advance_clock(Duration::from_millis(2300));
        assert_eq!(app.shown_stats_tab(), StatsTab::Manga);
        assert_eq!(app.panel_elapsed(TabGroup::Stats), Duration::ZERO);
        assert_eq!(app.panel_view(TabGroup::Stats).fade.opacity, 0.0);
        assert!(app.is_animating());

        // Other groups keep their content
        assert_eq!(app.shown_skills_tab(), SkillsTab::WebDev);
        assert_eq!(app.panel_view(TabGroup::Skills).fade.opacity, 1.0);
    }

    #[test]
    fn test_switch_during_exit_keeps_leaving_content() {
        let mut app = animated_app();
        app.advance_clock(Duration::from_secs(2));

        app.select_tab(TabSelection::Skills(SkillsTab::Editing));
        app.tick();
        app.select_tab(TabSelection::Skills(SkillsTab::Hacking));
        assert_eq!(app.shown_skills_tab(), SkillsTab::WebDev);

        app.advance_clock(Duration::from_millis(2300));
        assert_eq!(app.shown_skills_tab(), SkillsTab::Hacking);
    }

    #[test]
    fn test_static_tab_change_swaps_immediately() {
        let mut app = App::default();
        app.select_tab(TabSelection::Favorites(FavoritesTab::Anime));
        assert_eq!(app.shown_favorites_tab(), FavoritesTab::Anime);
        assert_eq!(app.panel_view(TabGroup::Favorites).fade.opacity, 1.0);
        assert!(!app.is_animating());
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = App::default();
        app.quit();
        assert!(app.should_quit);
    }
}
