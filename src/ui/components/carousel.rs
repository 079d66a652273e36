//! Carousel component renderer.
//!
//! The terminal cannot show the page image itself, so the active page is drawn
//! as a framed card naming the image, followed by a row of page dots.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CarouselInfo;

const CARD_MARGIN: usize = 4;

/// Renders the page card and the page indicator. Returns `row + 4`.
pub fn render_carousel(frame: &mut Frame, row: usize, carousel: &CarouselInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(CARD_MARGIN * 2 + 2);
    let label = carousel
        .image_name
        .as_deref()
        .map_or_else(|| "no images".to_string(), |name| format!("◀  {name}  ▶"));

    frame.goto(row, 1);
    frame.spaces(CARD_MARGIN);
    frame.push(&Theme::fg(&theme.colors.border));
    frame.push(&format!("╭{}╮", "─".repeat(inner_width)));

    frame.goto(row + 1, 1);
    frame.spaces(CARD_MARGIN);
    frame.push("│");
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.carousel_fg));
    frame.centered(&label, inner_width);
    frame.reset();
    frame.push(&Theme::fg(&theme.colors.border));
    frame.push("│");

    frame.goto(row + 2, 1);
    frame.spaces(CARD_MARGIN);
    frame.push(&format!("╰{}╯", "─".repeat(inner_width)));
    frame.reset();

    frame.goto(row + 3, 1);
    let dots_width = carousel.page_count * 2;
    frame.spaces(cols.saturating_sub(dots_width) / 2);
    for page in 0..carousel.page_count {
        if page == carousel.page {
            frame.push(&Theme::fg(&theme.colors.page_dot_active));
            frame.push("● ");
        } else {
            frame.push(&Theme::fg(&theme.colors.page_dot_inactive));
            frame.push("○ ");
        }
    }
    frame.reset();

    row + 4
}
