//! Statistics panel: anime / manga tabs, stat cards and the entry list.

use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::content::{stats_for, StatCard, StatsSheet};
use crate::motion::MotionPreset;
use crate::state::{StatsTab, TabGroup, TabOption};

use super::components::{render_tab_selector, tab_items};
use super::helpers::{apply_motion, card_block, is_hovered, motion_style, truncate_to_width};
use super::layout::LayoutContext;
use super::theme::Palette;
use super::with_motion;

const CARD_HEIGHT: u16 = 3;

pub fn render_stats(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
    ctx: &LayoutContext,
) {
    let focused = app.focus == Focus::Stats;
    let block = card_block(Some("Statistics"), focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tab = app.view.stats_tab();
    let panel = app.panel_view(TabGroup::Stats);
    let sheet = stats_for(app.shown_stats_tab());
    let grid = LayoutContext::from_rect(inner);
    let card_rows = (sheet.cards.len() as u16).div_ceil(grid.stat_columns());

    let [tabs_area, content_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    frame.render_widget(
        Paragraph::new(render_tab_selector(
            &tab_items::<StatsTab>(),
            tab.index(),
            focused,
            palette,
            ctx,
        )),
        tabs_area,
    );

    with_motion(frame, content_area, content_area, &panel.fade, |frame, area| {
        let [cards_area, list_area] = Layout::vertical([
            Constraint::Length(card_rows * CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);
        render_cards(frame, cards_area, sheet, grid.stat_columns(), app, palette);
        render_entries(frame, list_area, sheet, panel.elapsed, app, palette);
    });
}

fn render_cards(
    frame: &mut Frame,
    area: Rect,
    sheet: &StatsSheet,
    columns: u16,
    app: &App,
    palette: &Palette,
) {
    let motion = app.view.animation_preset(MotionPreset::StatCardHover);
    let columns = columns.max(1) as usize;
    let rows = sheet.cards.len().div_ceil(columns);
    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area);

    for (row_idx, row_area) in row_areas.iter().enumerate() {
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        for (col_idx, cell) in cells.iter().enumerate() {
            let Some(card) = sheet.cards.get(row_idx * columns + col_idx) else {
                break;
            };
            let hovered = is_hovered(*cell, app.pointer);
            let value_style = motion_style(palette.heading(), &motion.hover_state(hovered));
            render_card(frame, *cell, card, hovered, value_style, palette);
        }
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    card: &StatCard,
    hovered: bool,
    value_style: Style,
    palette: &Palette,
) {
    let base = if hovered {
        palette.highlight()
    } else {
        palette.base()
    };
    let label = truncate_to_width(card.label, area.width.saturating_sub(4) as usize);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(hovered))
        .title(Span::styled(format!(" {} ", label), palette.muted()))
        .style(base);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Span::styled(card.value, value_style)).alignment(Alignment::Center),
        inner,
    );
}

fn render_entries(
    frame: &mut Frame,
    area: Rect,
    sheet: &StatsSheet,
    elapsed: Duration,
    app: &App,
    palette: &Palette,
) {
    let motion = app.view.animation_preset(MotionPreset::ListEntry);

    for (row, (idx, entry)) in sheet
        .entries()
        .enumerate()
        .skip(app.list_scroll)
        .take(area.height as usize)
        .enumerate()
    {
        let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        let visual = motion.sample(idx, elapsed);
        let Some(placed) = apply_motion(row_area, area, &visual) else {
            continue;
        };

        let progress = format!("Progress: {}", entry.progress);
        let title_width = (placed.width as usize).saturating_sub(progress.width() + 4);
        let title = truncate_to_width(&entry.title, title_width);
        let gap = (placed.width as usize).saturating_sub(2 + title.width() + progress.width());

        let style = if is_hovered(row_area, app.pointer) {
            palette.highlight()
        } else {
            palette.base()
        };
        let line = Line::from(vec![
            Span::styled("▪ ", palette.muted()),
            Span::raw(title),
            Span::raw(" ".repeat(gap)),
            Span::styled(progress, palette.muted()),
        ]);
        frame.render_widget(
            Paragraph::new(line).style(motion_style(style, &visual)),
            placed,
        );
    }
}
