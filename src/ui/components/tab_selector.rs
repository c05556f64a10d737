//! Tab Selector Component
//!
//! A horizontal tab selector. Uses `▶` marker for the selected item with
//! responsive label sizing.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::TabOption;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    /// Create a new tab item with different labels for normal and compact modes
    pub fn with_short_label(label: &'a str, short_label: &'a str) -> Self {
        Self { label, short_label }
    }
}

/// Tab items for every option of a tab group, in display order.
pub fn tab_items<T: TabOption>() -> Vec<TabItem<'static>> {
    T::ALL
        .iter()
        .map(|option| TabItem::with_short_label(option.label(), option.short_label()))
        .collect()
}

/// Render a horizontal tab selector
///
/// # Arguments
/// * `items` - The tab items to display
/// * `selected` - Index of the currently selected tab
/// * `focused` - Whether the owning panel is focused
/// * `palette` - Active colours
/// * `ctx` - Layout context for responsive sizing
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    focused: bool,
    palette: &Palette,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let is_selected = idx == selected;

        // Use short labels on compact screens
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if is_selected {
            let marker_style = if focused {
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                palette.muted()
            };
            let text_style = if focused {
                palette.highlight().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.foreground)
            };

            spans.push(Span::styled("▶ ".to_string(), marker_style));
            spans.push(Span::styled(label.to_string(), text_style));
        } else {
            let text_style = palette.muted();
            spans.push(Span::styled("  ".to_string(), text_style));
            spans.push(Span::styled(label.to_string(), text_style));
        }

        // Add spacing between tabs (except after last)
        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing.to_string()));
        }
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
