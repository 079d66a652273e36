//! Empty state component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a two-line centered message starting at `row`.
///
/// Shown in place of the list when the query matches nothing.
pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    frame.goto(row + 1, 1);
    frame.push(&Theme::fg(&theme.colors.empty_state_fg));
    frame.centered(&empty.message, cols);
    frame.reset();

    frame.goto(row + 2, 1);
    frame.push(Theme::dim());
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.centered(&empty.subtitle, cols);
    frame.reset();

    row + 3
}
