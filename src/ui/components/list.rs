//! Catalog list component renderer.
//!
//! Each item takes one row: a thumbnail tag, the title in a fixed-width
//! column and the dimmed subtitle. Query matches are highlighted in both.

use crate::ui::helpers::{self, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the title column, including the thumbnail marker.
const TITLE_COLUMN_WIDTH: usize = 32;

/// Renders all rows starting at `row`. Returns the next free row.
pub fn render_list(frame: &mut Frame, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_list_row(frame, current, item, theme, cols))
}

fn render_list_row(frame: &mut Frame, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    frame.goto(row, 1);

    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    frame.push(&base);
    frame.push(if item.is_selected { " ▌ " } else { "   " });
    helpers::push_highlighted(frame, &item.title, &item.title_highlights, theme, &base);

    let used = 3 + item.title.chars().count();
    frame.spaces(TITLE_COLUMN_WIDTH.saturating_sub(used));

    let dim = if item.is_selected {
        base.clone()
    } else {
        Theme::fg(&theme.colors.text_dim)
    };
    frame.push(&dim);
    helpers::push_highlighted(frame, &item.subtitle, &item.subtitle_highlights, theme, &dim);

    let line_len = TITLE_COLUMN_WIDTH.max(used) + item.subtitle.chars().count();
    frame.spaces(cols.saturating_sub(line_len));
    frame.reset();

    row + 1
}
