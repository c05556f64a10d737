//! Favorites panel: a grid of tiles per tab.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::content::favorites_for;
use crate::motion::MotionPreset;
use crate::state::{FavoritesTab, TabGroup, TabOption};

use super::components::{render_tab_selector, tab_items};
use super::helpers::{apply_motion, card_block, center, is_hovered, motion_style};
use super::layout::LayoutContext;
use super::theme::Palette;
use super::with_motion;

const TILE_HEIGHT: u16 = 3;

/// Height of the panel for a main column `width` columns wide.
pub fn panel_height(width: u16, tiles: usize) -> u16 {
    let columns = LayoutContext::new(width.saturating_sub(2), 0).tile_columns() as usize;
    let rows = tiles.div_ceil(columns) as u16;
    2 + 1 + rows * TILE_HEIGHT
}

pub fn render_favorites(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
    ctx: &LayoutContext,
) {
    let focused = app.focus == Focus::Favorites;
    let block = card_block(Some("Favorites"), focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tab = app.view.favorites_tab();
    let [tabs_area, grid_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    frame.render_widget(
        Paragraph::new(render_tab_selector(
            &tab_items::<FavoritesTab>(),
            tab.index(),
            focused,
            palette,
            ctx,
        )),
        tabs_area,
    );

    let panel = app.panel_view(TabGroup::Favorites);
    let elapsed = panel.elapsed;
    let motion = app.view.animation_preset(MotionPreset::FavoriteCard);
    let columns = LayoutContext::from_rect(inner).tile_columns() as usize;

    with_motion(frame, grid_area, grid_area, &panel.fade, |frame, area| {
        let shelf = favorites_for(app.shown_favorites_tab());
        let captions: Vec<String> = shelf.captions().collect();
        let rows = captions.len().div_ceil(columns);
        let row_areas =
            Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); rows]).split(area);

        for (idx, caption) in captions.iter().enumerate() {
            let Some(row_area) = row_areas.get(idx / columns) else {
                break;
            };
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);
            let tile = cells[idx % columns];
            let visual = motion.sample(idx, elapsed);
            let Some(placed) = apply_motion(tile, area, &visual) else {
                continue;
            };

            let hovered = is_hovered(tile, app.pointer);
            let style = if hovered {
                palette.highlight()
            } else {
                palette.base()
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border(hovered))
                .style(style);
            let tile_inner = block.inner(placed);
            frame.render_widget(block, placed);
            frame.render_widget(
                Paragraph::new(center(caption, tile_inner.width as usize))
                    .alignment(Alignment::Left)
                    .style(motion_style(style, &visual)),
                tile_inner,
            );
        }
    });
}
