//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the render functions ask: side-by-side or stacked, full or short
//! labels, how many columns the stat card grid gets.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Below this the page is replaced by a resize hint.
pub const MIN_TERMINAL_WIDTH: u16 = 40;
pub const MIN_TERMINAL_HEIGHT: u16 = 12;

/// Sidebar width in side-by-side mode.
pub const SIDEBAR_WIDTH: u16 = 32;

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// if ctx.should_stack_panels() {
///     // sidebar above the main column
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Use short labels and tighter spacing.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Put the sidebar above the main column instead of beside it.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::MD_WIDTH - 20
    }

    /// Stat cards per row: four on wide main columns, two otherwise.
    pub fn stat_columns(&self) -> u16 {
        if self.width >= breakpoints::SM_WIDTH {
            4
        } else {
            2
        }
    }

    /// Favorite tiles per row: five on wide main columns, otherwise as many
    /// as fit with a minimum tile width of 14 columns.
    pub fn tile_columns(&self) -> u16 {
        (self.width / 14).clamp(1, 5)
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

pub fn is_terminal_too_small(width: u16, height: u16) -> bool {
    width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT
}

// ============================================================================
// Tests
// ============================================================================
