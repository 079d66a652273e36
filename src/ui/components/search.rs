//! Search bar component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin around the search box.
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line search box. Returns `row + 3`.
///
/// ```text
///   ┌──────────────────┐
///   │ Search: query▏   │
///   └──────────────────┘
/// ```
///
/// The border switches to the focused color and a cursor is drawn while the
/// query is being typed.
pub fn render_search_bar(frame: &mut Frame, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let border = if search.is_focused {
        Theme::fg(&theme.colors.search_bar_focused)
    } else {
        Theme::fg(&theme.colors.search_bar_border)
    };

    frame.goto(row, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("┌{}┐", "─".repeat(inner_width)));
    frame.reset();

    let cursor = if search.is_focused { "▏" } else { "" };
    let text: String = format!(" Search: {}{cursor}", search.query)
        .chars()
        .take(inner_width)
        .collect();
    let padding = inner_width.saturating_sub(text.chars().count());

    frame.goto(row + 1, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push("│");
    if search.query.is_empty() && !search.is_focused {
        frame.push(&Theme::fg(&theme.colors.text_dim));
    } else {
        frame.push(&Theme::fg(&theme.colors.text_normal));
    }
    frame.push(&text);
    frame.spaces(padding);
    frame.push(&border);
    frame.push("│");
    frame.reset();

    frame.goto(row + 2, 1);
    frame.spaces(SEARCH_BOX_MARGIN);
    frame.push(&border);
    frame.push(&format!("└{}┘", "─".repeat(inner_width)));
    frame.reset();

    row + 3
}
