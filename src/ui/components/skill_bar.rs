//! Skill Bar Component
//!
//! One skill per two rows: the name and percentage on the first row, the bar
//! on the second. Short panels fall back to [`skill_line`], one row per skill.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::content::Skill;
use crate::ui::helpers::truncate_to_width;
use crate::ui::theme::Palette;

const FILLED: &str = "█";
const TRACK: &str = "░";

/// Number of filled cells for `level` percent of `width`, scaled by `fill`.
pub fn filled_cells(level: u8, width: u16, fill: f32) -> u16 {
    let level = level.min(100) as f32 / 100.0;
    let cells = (width as f32 * level * fill.clamp(0.0, 1.0)).round() as u16;
    cells.min(width)
}

/// Header row: name on the left, percentage on the right.
pub fn skill_header(skill: &Skill, width: u16, palette: &Palette) -> Line<'static> {
    let percent = format!("{}%", skill.level);
    let name_width = (width as usize).saturating_sub(percent.width() + 1);
    let name = truncate_to_width(skill.name, name_width);
    let gap = (width as usize).saturating_sub(name.width() + percent.width());

    Line::from(vec![
        Span::styled(name, palette.heading()),
        Span::raw(" ".repeat(gap)),
        Span::styled(percent, palette.muted()),
    ])
}

/// Bar row. `fill` is the animated fraction of the final width (1.0 when settled).
pub fn skill_bar(skill: &Skill, width: u16, fill: f32, palette: &Palette) -> Line<'static> {
    let filled = filled_cells(skill.level, width, fill);
    let empty = width - filled;

    Line::from(vec![
        Span::styled(
            FILLED.repeat(filled as usize),
            Style::default().fg(palette.primary),
        ),
        Span::styled(TRACK.repeat(empty as usize), Style::default().fg(palette.track)),
    ])
}

/// Single-row form: name column, bar, percentage.
pub fn skill_line(
    skill: &Skill,
    name_width: u16,
    width: u16,
    fill: f32,
    palette: &Palette,
) -> Line<'static> {
    let name = truncate_to_width(skill.name, name_width.saturating_sub(1) as usize);
    let name_pad = (name_width as usize).saturating_sub(name.width());
    let percent = format!("{:>4}", format!("{}%", skill.level));
    let bar_width = width.saturating_sub(name_width + percent.width() as u16 + 1);

    let mut spans = vec![
        Span::styled(name, palette.heading()),
        Span::raw(" ".repeat(name_pad)),
    ];
    spans.extend(skill_bar(skill, bar_width, fill, palette).spans);
    spans.push(Span::raw(" "));
    spans.push(Span::styled(percent, palette.muted()));
    Line::from(spans)
}
