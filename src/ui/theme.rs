//! Colour palettes.
//!
//! The root theme marker picks one of two palettes; every render function
//! takes its colours from the active [`Palette`] instead of hardcoding them.

use ratatui::style::{Color, Modifier, Style};

use crate::state::ThemeMode;

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    /// Secondary text (bio, labels, progress)
    pub muted: Color,
    pub border: Color,
    /// Border of the focused card
    pub border_focused: Color,
    /// Hover / highlight background
    pub accent: Color,
    pub accent_foreground: Color,
    /// Skill bar fill, selected tab marker
    pub primary: Color,
    /// Unfilled part of skill bars
    pub track: Color,
}

// ============================================================================
// Light Theme
// ============================================================================

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    foreground: Color::Rgb(10, 10, 10),
    muted: Color::Rgb(115, 115, 115),
    border: Color::Rgb(229, 229, 229),
    border_focused: Color::Rgb(23, 23, 23),
    accent: Color::Rgb(245, 245, 245),
    accent_foreground: Color::Rgb(23, 23, 23),
    primary: Color::Rgb(23, 23, 23),
    track: Color::Rgb(229, 229, 229),
};

// ============================================================================
// Dark Theme
// ============================================================================

pub const DARK: Palette = Palette {
    background: Color::Rgb(10, 10, 10),
    foreground: Color::Rgb(250, 250, 250),
    muted: Color::Rgb(163, 163, 163),
    border: Color::Rgb(38, 38, 38),
    border_focused: Color::Rgb(212, 212, 212),
    accent: Color::Rgb(38, 38, 38),
    accent_foreground: Color::Rgb(250, 250, 250),
    primary: Color::Rgb(250, 250, 250),
    track: Color::Rgb(38, 38, 38),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.accent_foreground)
            .bg(self.accent)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_for_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Light), &LIGHT);
        assert_eq!(Palette::for_mode(ThemeMode::Dark), &DARK);
        assert_ne!(LIGHT.background, DARK.background);
    }

    #[test]
    fn test_focused_border_differs() {
        assert_ne!(LIGHT.border(true), LIGHT.border(false));
        assert_ne!(DARK.border(true), DARK.border(false));
    }
}
