//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with item counts
//! - [`carousel`]: Active page card and page dots
//! - [`search`]: Search input box
//! - [`list`]: Catalog rows with match highlighting
//! - [`empty`]: Message shown when nothing matches
//! - [`stats`]: Modal statistics panel
//! - [`splash`]: Launch title card
//! - [`footer`]: Keybinding hints
//!
//! # Home Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Carousel card - 3 lines]
//! [Page dots]
//! [Search bar - 3 lines]
//! [List rows | empty state]       ← statistics panel drawn over this area
//! [Border]
//! [Footer]
//! ```

mod carousel;
mod empty;
mod footer;
mod header;
mod list;
mod search;
mod splash;
mod stats;

pub use splash::render_splash;

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HomeViewModel;

use carousel::render_carousel;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use search::render_search_bar;
use stats::render_stats_panel;

/// Renders a full-width horizontal rule. Returns the next free row.
fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame.goto(row, 1);
    frame.push(&Theme::fg(color));
    frame.push(&"─".repeat(cols));
    frame.reset();
    row + 1
}

/// Renders the home screen.
pub fn render_home(frame: &mut Frame, vm: &HomeViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut row = 2;

    row = render_header(frame, row, &vm.header, theme, cols);
    row = render_border(frame, row, &theme.colors.border, cols);
    row = render_carousel(frame, row, &vm.carousel, theme, cols);
    row = render_search_bar(frame, row, &vm.search_bar, theme, cols);

    let list_top = row;
    if let Some(empty) = &vm.empty_state {
        render_empty_state(frame, list_top, empty, theme, cols);
    } else {
        render_list(frame, list_top, &vm.display_items, theme, cols);
    }

    if let Some(panel) = &vm.stats_panel {
        render_stats_panel(frame, list_top, panel, theme, cols);
    }

    let footer_row = rows.max(list_top + 2);
    render_border(frame, footer_row - 1, &theme.colors.border, cols);
    render_footer(frame, footer_row, &vm.footer, theme, cols);
}
