//! Entrance and hover motion.
//!
//! A [`Motion`] is either a concrete [`MotionSpec`] or [`Motion::Empty`], the
//! no-op motion used when animations are disabled. Sampling an empty motion
//! always yields [`VisualState::SETTLED`], so renderers never need to branch
//! on the animation flag themselves.

mod preset;
mod visual;

pub use preset::{Easing, MotionPreset, MotionSpec};
pub use visual::{VisualState, PX_PER_COLUMN, PX_PER_ROW};

use std::time::Duration;

/// Result of a motion preset lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// No offset, no delay, no duration: render the final state immediately.
    Empty,
    Animated(MotionSpec),
}

impl Motion {
    pub fn is_empty(&self) -> bool {
        matches!(self, Motion::Empty)
    }

    pub fn spec(&self) -> Option<&MotionSpec> {
        match self {
            Motion::Empty => None,
            Motion::Animated(spec) => Some(spec),
        }
    }

    /// State of item `index`, `elapsed` after mount.
    pub fn sample(&self, index: usize, elapsed: Duration) -> VisualState {
        match self {
            Motion::Empty => VisualState::SETTLED,
            Motion::Animated(spec) => spec.sample(index, elapsed),
        }
    }

    /// State of a hover-driven element.
    pub fn hover_state(&self, active: bool) -> VisualState {
        match self {
            Motion::Empty => VisualState::SETTLED,
            Motion::Animated(spec) if active => spec.target,
            Motion::Animated(spec) => spec.initial,
        }
    }

    /// State `elapsed` after the element started leaving.
    pub fn exit(&self, elapsed: Duration) -> VisualState {
        match self {
            Motion::Empty => VisualState::SETTLED,
            Motion::Animated(spec) => spec.sample_exit(elapsed),
        }
    }

    /// How long leaving content stays on screen.
    pub fn exit_time(&self) -> Duration {
        match self {
            Motion::Empty => Duration::ZERO,
            Motion::Animated(spec) => spec.duration,
        }
    }

    /// Time until the last of `count` items settles.
    pub fn settle_time(&self, count: usize) -> Duration {
        match self {
            Motion::Empty => Duration::ZERO,
            Motion::Animated(spec) => spec.end_for(count.saturating_sub(1)),
        }
    }
}
