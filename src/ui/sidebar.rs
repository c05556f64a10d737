//! Profile sidebar: avatar, name, bio and social links.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::content::{PROFILE, SOCIAL_LINKS};
use crate::motion::MotionPreset;

use super::helpers::{apply_motion, card_block, is_hovered, motion_style, truncate_to_width};
use super::theme::Palette;

const AVATAR_WIDTH: u16 = 9;
const AVATAR_HEIGHT: u16 = 5;

/// Rows taken by the one-line sidebar used when panels stack.
pub const STACKED_HEIGHT: u16 = 4;

// ============================================================================
// Full Sidebar
// ============================================================================

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Sidebar;
    let block = card_block(None, focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bio_rows = (PROFILE.bio.width() as u16)
        .div_ceil(inner.width.max(1))
        .saturating_add(1)
        .min(6);
    let [avatar_area, name_area, bio_area, _, links_area] = Layout::vertical([
        Constraint::Length(AVATAR_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(bio_rows),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_avatar(frame, avatar_area, app, palette);

    frame.render_widget(
        Paragraph::new(PROFILE.name)
            .alignment(Alignment::Center)
            .style(palette.heading()),
        name_area,
    );
    frame.render_widget(
        Paragraph::new(PROFILE.bio)
            .alignment(Alignment::Center)
            .style(palette.muted())
            .wrap(Wrap { trim: true }),
        bio_area,
    );

    render_links(frame, links_area, app, palette);
}

fn render_avatar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let width = AVATAR_WIDTH.min(area.width);
    let avatar = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    );

    let hovered = is_hovered(avatar, app.pointer);
    let visual = app
        .view
        .animation_preset(MotionPreset::AvatarHover)
        .hover_state(hovered);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(visual.is_emphasized()));
    let inner = block.inner(avatar);
    frame.render_widget(block, avatar);

    let [initials_area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(inner);
    let initials_style = Style::default().fg(palette.foreground);
    frame.render_widget(
        Paragraph::new(PROFILE.initials)
            .alignment(Alignment::Center)
            .style(motion_style(initials_style, &visual)),
        initials_area,
    );
}

fn render_links(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let motion = app.view.animation_preset(MotionPreset::SocialLink);
    let elapsed = app.page_elapsed();
    let show_urls = area.width >= 28;

    for (idx, link) in SOCIAL_LINKS.iter().enumerate() {
        let row = Rect::new(area.x, area.y + idx as u16, area.width, 1);
        if row.y >= area.bottom() {
            break;
        }
        let visual = motion.sample(idx, elapsed);
        let Some(placed) = apply_motion(row, area, &visual) else {
            continue;
        };

        let selected = app.focus == Focus::Sidebar && app.link_cursor == idx;
        let style = if selected || is_hovered(row, app.pointer) {
            palette.highlight()
        } else {
            palette.base()
        };

        let marker = if selected { "▶ " } else { "  " };
        let mut spans = vec![
            Span::raw(marker),
            Span::raw(format!("{} ", link.glyph)),
            Span::raw(link.label),
        ];
        if show_urls {
            let used = marker.width() + link.glyph.width() + 1 + link.label.width() + 2;
            let url = link.url.trim_start_matches("https://");
            let url = truncate_to_width(url, (placed.width as usize).saturating_sub(used));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(url, palette.muted()));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(motion_style(style, &visual)),
            placed,
        );
    }
}

// ============================================================================
// Stacked Sidebar
// ============================================================================

/// Name and bio on one row, links on the next.
pub fn render_sidebar_stacked(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Sidebar;
    let block = card_block(None, focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [intro_area, links_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    let name_width = PROFILE.name.width();
    let bio = truncate_to_width(
        PROFILE.bio,
        (inner.width as usize).saturating_sub(name_width + 3),
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(PROFILE.name, palette.heading()),
            Span::styled(" · ", palette.muted()),
            Span::styled(bio, palette.muted()),
        ])),
        intro_area,
    );

    let motion = app.view.animation_preset(MotionPreset::SocialLink);
    let elapsed = app.page_elapsed();
    let mut spans = Vec::with_capacity(SOCIAL_LINKS.len() * 2);
    for (idx, link) in SOCIAL_LINKS.iter().enumerate() {
        let visual = motion.sample(idx, elapsed);
        if visual.is_hidden() {
            continue;
        }
        let selected = focused && app.link_cursor == idx;
        let style = if selected {
            palette.highlight()
        } else {
            palette.base()
        };
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{} {}", link.glyph, link.label),
            motion_style(style, &visual),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), links_area);
}
