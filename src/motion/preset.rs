//! Named motion presets used by the profile view.

use std::time::Duration;

use serde::Serialize;

use super::visual::VisualState;

/// Timing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Easing {
    /// Cubic ease-out.
    EaseOut,
    /// Critically damped spring; `stiffness` controls how fast it settles.
    Spring { stiffness: f32 },
}

impl Easing {
    /// Map progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::Spring { stiffness } => {
                // Over the whole duration the spring covers ~`omega` radians.
                let omega = stiffness.sqrt() * 0.6;
                let x = omega * t;
                1.0 - (1.0 + x) * (-x).exp()
            }
        }
    }
}

/// Parameters of one animated transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionSpec {
    pub initial: VisualState,
    pub target: VisualState,
    pub duration: Duration,
    /// Delay before the first item starts.
    pub delay: Duration,
    /// Extra delay added per item index in a list.
    pub stagger: Option<Duration>,
    pub easing: Easing,
}

impl MotionSpec {
    const fn new(initial: VisualState, target: VisualState, duration_ms: u64) -> Self {
        Self {
            initial,
            target,
            duration: Duration::from_millis(duration_ms),
            delay: Duration::ZERO,
            stagger: None,
            easing: Easing::EaseOut,
        }
    }

    const fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay = Duration::from_millis(delay_ms);
        self
    }

    const fn with_stagger(mut self, stagger_ms: u64) -> Self {
        self.stagger = Some(Duration::from_millis(stagger_ms));
        self
    }

    const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start offset of the item at `index`.
    pub fn start_for(&self, index: usize) -> Duration {
        let stagger = self.stagger.unwrap_or(Duration::ZERO);
        self.delay + stagger * index as u32
    }

    /// Time at which the item at `index` reaches its target.
    pub fn end_for(&self, index: usize) -> Duration {
        self.start_for(index) + self.duration
    }

    /// State of the item at `index`, `elapsed` after the element mounted.
    pub fn sample(&self, index: usize, elapsed: Duration) -> VisualState {
        let start = self.start_for(index);
        if elapsed <= start {
            return self.initial;
        }
        let running = elapsed - start;
        if running >= self.duration || self.duration.is_zero() {
            return self.target;
        }
        let t = running.as_secs_f32() / self.duration.as_secs_f32();
        self.initial.lerp(&self.target, self.easing.apply(t))
    }

    /// State `elapsed` into leaving: the entrance played backwards in time,
    /// from target back to initial over the same duration.
    pub fn sample_exit(&self, elapsed: Duration) -> VisualState {
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.initial;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.target.lerp(&self.initial, self.easing.apply(t))
    }
}

/// Every named motion the view applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionPreset {
    PageFade,
    SidebarSlide,
    MainSlide,
    AvatarHover,
    SocialLink,
    StatCardHover,
    TabContentFade,
    ListEntry,
    FavoriteCard,
    SkillRow,
    SkillBar,
}

impl MotionPreset {
    pub const ALL: [MotionPreset; 11] = [
        MotionPreset::PageFade,
        MotionPreset::SidebarSlide,
        MotionPreset::MainSlide,
        MotionPreset::AvatarHover,
        MotionPreset::SocialLink,
        MotionPreset::StatCardHover,
        MotionPreset::TabContentFade,
        MotionPreset::ListEntry,
        MotionPreset::FavoriteCard,
        MotionPreset::SkillRow,
        MotionPreset::SkillBar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MotionPreset::PageFade => "page-fade",
            MotionPreset::SidebarSlide => "sidebar-slide",
            MotionPreset::MainSlide => "main-slide",
            MotionPreset::AvatarHover => "avatar-hover",
            MotionPreset::SocialLink => "social-link",
            MotionPreset::StatCardHover => "stat-card-hover",
            MotionPreset::TabContentFade => "tab-content-fade",
            MotionPreset::ListEntry => "list-entry",
            MotionPreset::FavoriteCard => "favorite-card",
            MotionPreset::SkillRow => "skill-row",
            MotionPreset::SkillBar => "skill-bar",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    /// Hover presets are driven by pointer/focus state rather than time.
    pub fn is_hover(self) -> bool {
        matches!(self, MotionPreset::AvatarHover | MotionPreset::StatCardHover)
    }

    /// Parameters of this preset.
    pub fn spec(self) -> MotionSpec {
        let settled = VisualState::SETTLED;
        let hidden = settled.with_opacity(0.0);
        match self {
            MotionPreset::PageFade => MotionSpec::new(hidden, settled, 500),
            MotionPreset::SidebarSlide => {
                MotionSpec::new(hidden.with_offset(-50.0, 0.0), settled, 500)
            }
            MotionPreset::MainSlide => {
                MotionSpec::new(hidden.with_offset(0.0, 50.0), settled, 500).with_delay(200)
            }
            MotionPreset::AvatarHover => MotionSpec::new(settled, settled.with_scale(1.1), 200)
                .with_easing(Easing::Spring { stiffness: 300.0 }),
            MotionPreset::SocialLink => {
                MotionSpec::new(hidden.with_offset(0.0, 20.0), settled, 300).with_stagger(100)
            }
            MotionPreset::StatCardHover => {
                MotionSpec::new(settled, settled.with_scale(1.05), 200)
            }
            MotionPreset::TabContentFade => MotionSpec::new(hidden, settled, 300),
            MotionPreset::ListEntry => {
                MotionSpec::new(hidden.with_offset(0.0, 20.0), settled, 300).with_stagger(50)
            }
            MotionPreset::FavoriteCard => {
                MotionSpec::new(hidden.with_scale(0.8), settled, 300).with_stagger(100)
            }
            MotionPreset::SkillRow => {
                MotionSpec::new(hidden.with_offset(-20.0, 0.0), settled, 300).with_stagger(100)
            }
            MotionPreset::SkillBar => MotionSpec::new(settled.with_fill(0.0), settled, 500)
                .with_delay(200)
                .with_stagger(100),
        }
    }
}
