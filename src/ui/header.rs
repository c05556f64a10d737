//! Top bar: keybind hints on the left, theme switch on the right.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::layout::LayoutContext;
use super::theme::Palette;

const SUN: &str = "☀";
const MOON: &str = "☾";

/// Sun and moon glyphs around a two-position switch.
pub fn theme_switch(dark: bool, palette: &Palette) -> Line<'static> {
    let active = palette.heading();
    let inactive = palette.muted();
    let (sun_style, moon_style) = if dark {
        (inactive, active)
    } else {
        (active, inactive)
    };
    let knob = if dark { "[  ●]" } else { "[●  ]" };

    Line::from(vec![
        Span::styled(SUN, sun_style),
        Span::raw(" "),
        Span::styled(knob, palette.border(true).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(MOON, moon_style),
    ])
}

fn keybind_hints(ctx: &LayoutContext, palette: &Palette) -> Line<'static> {
    let hints: &[(&str, &str)] = if ctx.is_compact() {
        &[("Tab", "focus"), ("d", "theme"), ("q", "quit")]
    } else {
        &[
            ("Tab", "focus"),
            ("←/→", "tab"),
            ("↑/↓", "move"),
            ("Enter", "open"),
            ("d", "theme"),
            ("q", "quit"),
        ]
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (idx, (key, action)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ", palette.muted()));
        }
        spans.push(Span::styled(key.to_string(), palette.heading()));
        spans.push(Span::styled(format!(" {}", action), palette.muted()));
    }
    Line::from(spans)
}

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
    ctx: &LayoutContext,
) {
    let switch = theme_switch(app.view.dark_mode(), palette);
    let [hints_area, switch_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(switch.width() as u16 + 1),
    ])
    .areas(area);

    if !ctx.is_extra_small() {
        frame.render_widget(
            Paragraph::new(keybind_hints(ctx, palette)).style(palette.base()),
            hints_area,
        );
    }
    frame.render_widget(
        Paragraph::new(switch)
            .alignment(Alignment::Right)
            .style(palette.base()),
        switch_area,
    );
}
