//! UI rendering for the profile page
//!
//! The page is a one-row header above a sidebar and a main column:
//! - Header: keybind hints and the theme switch
//! - Sidebar: avatar, name, bio and social links
//! - Main column: Statistics, Favorites and Skills cards, each with its own tabs
//!
//! ## Responsive Layout System
//!
//! Render functions receive a [`LayoutContext`] for sizing decisions. Below
//! 100 columns the sidebar collapses to a two-row strip above the main
//! column; below [`MIN_TERMINAL_WIDTH`]x[`MIN_TERMINAL_HEIGHT`] only a resize
//! hint is drawn.
//!
//! ## Motion
//!
//! Every animated region samples its motion from the view state, so with
//! animations disabled each one renders its settled state immediately.

pub mod components;
mod favorites;
mod header;
mod helpers;
mod layout;
mod sidebar;
mod skills;
mod stats;
mod theme;

pub use header::theme_switch;
pub use helpers::{apply_motion, is_hovered, motion_style, truncate_to_width};
pub use layout::{
    breakpoints, is_terminal_too_small, LayoutContext, MIN_TERMINAL_HEIGHT,
    MIN_TERMINAL_WIDTH, SIDEBAR_WIDTH,
};
pub use theme::{Palette, DARK, LIGHT};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::content::{favorites_for, skills_for};
use crate::motion::{MotionPreset, VisualState};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole page.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::for_mode(app.view.theme_marker().mode());
    frame.render_widget(Block::default().style(palette.base()), area);

    if is_terminal_too_small(area.width, area.height) {
        render_resize_hint(frame, area, palette);
        return;
    }

    let page = app
        .view
        .animation_preset(MotionPreset::PageFade)
        .sample(0, app.page_elapsed());
    with_motion(frame, area, area, &page, |frame, area| {
        render_page(frame, area, app, palette);
    });
}

fn render_page(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let ctx = LayoutContext::from_rect(area);
    let [header_area, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    header::render_header(frame, header_area, app, palette, &ctx);

    let stacked = ctx.should_stack_panels();
    let [sidebar_area, main_area] = if stacked {
        Layout::vertical([
            Constraint::Length(sidebar::STACKED_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(body)
    } else {
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(body)
    };

    let elapsed = app.page_elapsed();
    let slide = app
        .view
        .animation_preset(MotionPreset::SidebarSlide)
        .sample(0, elapsed);
    with_motion(frame, sidebar_area, body, &slide, |frame, area| {
        if stacked {
            sidebar::render_sidebar_stacked(frame, area, app, palette);
        } else {
            sidebar::render_sidebar(frame, area, app, palette);
        }
    });

    let slide = app
        .view
        .animation_preset(MotionPreset::MainSlide)
        .sample(0, elapsed);
    with_motion(frame, main_area, body, &slide, |frame, area| {
        render_main_column(frame, area, app, palette, &ctx);
    });
}

fn render_main_column(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
    ctx: &LayoutContext,
) {
    let favorites_height =
        favorites::panel_height(area.width, favorites_for(app.shown_favorites_tab()).len());
    let skill_count = skills_for(app.shown_skills_tab()).len();
    let roomy = skills::roomy_height(skill_count);
    let skills_height = if area.height >= STATS_MIN_HEIGHT + favorites_height + roomy {
        roomy
    } else {
        skills::compact_height(skill_count)
    };

    let [stats_area, favorites_area, skills_area] = Layout::vertical([
        Constraint::Min(STATS_MIN_HEIGHT),
        Constraint::Length(favorites_height),
        Constraint::Length(skills_height),
    ])
    .areas(area);

    stats::render_stats(frame, stats_area, app, palette, ctx);
    favorites::render_favorites(frame, favorites_area, app, palette, ctx);
    skills::render_skills(frame, skills_area, app, palette, ctx);
}

const STATS_MIN_HEIGHT: u16 = 8;

fn render_resize_hint(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::styled("Terminal too small", palette.heading()),
        Line::styled(
            format!(
                "{}x{}, need {}x{}",
                area.width, area.height, MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
            ),
            palette.muted(),
        ),
    ];
    let top = area.height.saturating_sub(2) / 2;
    let hint_area = Rect::new(area.x, area.y + top, area.width, area.height.min(2));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        hint_area,
    );
}

/// Draw a region through its motion: offset, clipped to `bounds`, then
/// dimmed or emboldened as a whole. Hidden regions are skipped.
pub(crate) fn with_motion<F>(
    frame: &mut Frame,
    area: Rect,
    bounds: Rect,
    visual: &VisualState,
    draw: F,
) where
    F: FnOnce(&mut Frame, Rect),
{
    let Some(placed) = apply_motion(area, bounds, visual) else {
        return;
    };
    draw(frame, placed);

    let style = motion_style(Style::default(), visual);
    if style != Style::default() {
        frame.buffer_mut().set_style(placed, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_static_page() {
        let app = App::default();
        let text = buffer_text(&draw(&app, 120, 40));
        assert!(text.contains("Renn Baelish"));
        assert!(text.contains("Statistics"));
        assert!(text.contains("Favorites"));
        assert!(text.contains("Skills"));
    }

    #[test]
    fn test_render_too_small() {
        let app = App::default();
        let text = buffer_text(&draw(&app, 30, 10));
        assert!(text.contains("Terminal too small"));
        assert!(!text.contains("Statistics"));
    }

    #[test]
    fn test_background_follows_theme() {
        let mut app = App::default();
        let light = draw(&app, 120, 40);
        assert_eq!(light.backend().buffer()[(0, 39)].bg, LIGHT.background);

        app.view.toggle_dark_mode(true);
        let dark = draw(&app, 120, 40);
        assert_eq!(dark.backend().buffer()[(0, 39)].bg, DARK.background);
    }
}
