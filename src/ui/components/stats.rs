//! Statistics panel renderer.
//!
//! Drawn as a framed box over the list area while the panel is open.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatsPanelInfo;

const PANEL_WIDTH: usize = 36;

/// Renders the panel with its top edge at `row`. Returns the row below it.
pub fn render_stats_panel(frame: &mut Frame, row: usize, panel: &StatsPanelInfo, theme: &Theme, cols: usize) -> usize {
    let width = PANEL_WIDTH.min(cols.saturating_sub(2));
    let inner = width.saturating_sub(2);
    let left = cols.saturating_sub(width) / 2 + 1;
    let border = Theme::fg(&theme.colors.panel_border);

    frame.goto(row, left);
    frame.push(&border);
    frame.push("┌");
    frame.push(Theme::bold());
    frame.centered(&format!(" {} ", panel.title), inner);
    frame.reset();
    frame.push(&border);
    frame.push("┐");

    let mut current = row + 1;
    for line in &panel.lines {
        frame.goto(current, left);
        frame.push(&border);
        frame.push("│");
        frame.push(&Theme::fg(&theme.colors.text_normal));
        let text: String = format!(" {line}").chars().take(inner).collect();
        let len = text.chars().count();
        frame.push(&text);
        frame.spaces(inner - len);
        frame.push(&border);
        frame.push("│");
        current += 1;
    }

    frame.goto(current, left);
    frame.push(&border);
    frame.push(&format!("└{}┘", "─".repeat(inner)));
    frame.reset();

    current + 1
}
