//! Skills panel: one labelled bar per skill.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Text,
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::content::skills_for;
use crate::motion::MotionPreset;
use crate::state::{SkillsTab, TabGroup, TabOption};

use super::components::{render_tab_selector, skill_bar, skill_header, skill_line, tab_items};
use super::helpers::{apply_motion, card_block, motion_style};
use super::layout::LayoutContext;
use super::theme::Palette;
use super::with_motion;

/// Height with two rows per skill.
pub fn roomy_height(skills: usize) -> u16 {
    3 + 2 * skills as u16
}

/// Height with one row per skill.
pub fn compact_height(skills: usize) -> u16 {
    3 + skills as u16
}

pub fn render_skills(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
    ctx: &LayoutContext,
) {
    let focused = app.focus == Focus::Skills;
    let block = card_block(Some("Skills"), focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tab = app.view.skills_tab();
    let [tabs_area, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    frame.render_widget(
        Paragraph::new(render_tab_selector(
            &tab_items::<SkillsTab>(),
            tab.index(),
            focused,
            palette,
            ctx,
        )),
        tabs_area,
    );

    let skills = skills_for(app.shown_skills_tab());
    let panel = app.panel_view(TabGroup::Skills);
    let elapsed = panel.elapsed;
    let row_motion = app.view.animation_preset(MotionPreset::SkillRow);
    let bar_motion = app.view.animation_preset(MotionPreset::SkillBar);
    let roomy = area.height >= roomy_height(skills.len());
    let row_height: u16 = if roomy { 2 } else { 1 };
    let name_width = (list_area.width / 3).clamp(8, 20);

    with_motion(frame, list_area, list_area, &panel.fade, |frame, area| {
        for (idx, skill) in skills.iter().enumerate() {
            let y = area.y + idx as u16 * row_height;
            if y >= area.bottom() {
                break;
            }
            let row = Rect::new(area.x, y, area.width, row_height.min(area.bottom() - y));
            let visual = row_motion.sample(idx, elapsed);
            let Some(placed) = apply_motion(row, area, &visual) else {
                continue;
            };
            let fill = bar_motion.sample(idx, elapsed).fill;

            let text = if roomy {
                Text::from(vec![
                    skill_header(skill, placed.width, palette),
                    skill_bar(skill, placed.width, fill, palette),
                ])
            } else {
                Text::from(skill_line(skill, name_width, placed.width, fill, palette))
            };
            frame.render_widget(
                Paragraph::new(text).style(motion_style(palette.base(), &visual)),
                placed,
            );
        }
    });
}
