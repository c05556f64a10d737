//! Rendering helpers shared by the panels.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::motion::VisualState;
use crate::ui::theme::Palette;

/// Rounded card frame; the focused card gets the strong border colour.
pub fn card_block<'a>(title: Option<&'a str>, focused: bool, palette: &Palette) -> Block<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(focused))
        .style(palette.base());
    match title {
        Some(title) => block.title(format!(" {} ", title)).title_style(palette.heading()),
        None => block,
    }
}

/// Where an element lands after its motion offset, clipped to `bounds`.
///
/// Returns `None` when the element is invisible or fully clipped.
pub fn apply_motion(area: Rect, bounds: Rect, visual: &VisualState) -> Option<Rect> {
    if visual.is_hidden() {
        return None;
    }
    let (dx, dy) = visual.cell_offset();
    let x = (area.x as i32 + dx as i32).max(0) as u16;
    let y = (area.y as i32 + dy as i32).max(0) as u16;
    let moved = Rect::new(x, y, area.width, area.height).intersection(bounds);
    if moved.is_empty() {
        None
    } else {
        Some(moved)
    }
}

/// Style adjusted for opacity and scale.
pub fn motion_style(style: Style, visual: &VisualState) -> Style {
    let mut style = style;
    if visual.is_faded() {
        style = style.add_modifier(Modifier::DIM);
    }
    if visual.is_emphasized() {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Whether the mouse pointer is inside `area`.
pub fn is_hovered(area: Rect, pointer: Option<(u16, u16)>) -> bool {
    pointer.is_some_and(|(x, y)| area.contains(Position::new(x, y)))
}

/// Truncate `text` to `max_width` display columns, appending `…` if cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Center `text` within `width` columns.
pub fn center(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let pad = width.saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
