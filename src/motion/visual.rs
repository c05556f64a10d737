//! Visual state sampled from a motion.

use serde::Serialize;

/// Presentational values a motion drives.
///
/// Offsets are in layout "pixels"; the terminal renderer converts them to
/// cells (see [`VisualState::cell_offset`]). `fill` is the fraction of a
/// progress bar's final width that is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualState {
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub scale: f32,
    pub fill: f32,
}

/// Horizontal pixels per terminal column.
pub const PX_PER_COLUMN: f32 = 10.0;
/// Vertical pixels per terminal row.
pub const PX_PER_ROW: f32 = 20.0;

impl VisualState {
    /// Resting state every element ends in.
    pub const SETTLED: VisualState = VisualState {
        offset_x: 0.0,
        offset_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
        fill: 1.0,
    };

    pub const fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_fill(mut self, fill: f32) -> Self {
        self.fill = fill;
        self
    }

    /// Interpolate towards `to` by `t` (not clamped, springs may overshoot).
    pub fn lerp(&self, to: &VisualState, t: f32) -> VisualState {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        VisualState {
            offset_x: mix(self.offset_x, to.offset_x),
            offset_y: mix(self.offset_y, to.offset_y),
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            scale: mix(self.scale, to.scale),
            fill: mix(self.fill, to.fill).clamp(0.0, 1.0),
        }
    }

    /// Offset rounded to whole terminal cells (columns, rows).
    pub fn cell_offset(&self) -> (i16, i16) {
        (
            (self.offset_x / PX_PER_COLUMN).round() as i16,
            (self.offset_y / PX_PER_ROW).round() as i16,
        )
    }

    /// Nearly transparent elements are not drawn at all.
    pub fn is_hidden(&self) -> bool {
        self.opacity < 0.15
    }

    /// Partially transparent elements are drawn dimmed.
    pub fn is_faded(&self) -> bool {
        self.opacity < 0.85
    }

    /// Scaled-up elements are drawn emphasized.
    pub fn is_emphasized(&self) -> bool {
        self.scale > 1.01
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::SETTLED
    }
}
