//! Reusable UI Components
//!
//! - `TabSelector` - Horizontal tab selector with arrow markers
//! - `SkillBar` - Labelled percentage bar

mod skill_bar;
mod tab_selector;

pub use skill_bar::{filled_cells, skill_bar, skill_header, skill_line};
pub use tab_selector::{render_tab_selector, tab_items, TabItem};
