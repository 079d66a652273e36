//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: truncated strings, match
//! highlight ranges, pre-formatted statistics lines.

use crate::domain::ItemId;

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIViewModel {
    Splash(SplashViewModel),
    Home(HomeViewModel),
}

/// The title card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashViewModel {
    pub title: String,
}

/// Everything drawn on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeViewModel {
    pub header: HeaderInfo,
    pub carousel: CarouselInfo,
    pub search_bar: SearchBarInfo,

    /// Visible window of the filtered list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Shown instead of the list when nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Modal statistics panel, drawn over the list when open.
    pub stats_panel: Option<StatsPanelInfo>,

    pub footer: FooterInfo,
}

/// One row of the catalog list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: ItemId,
    pub title: String,
    pub subtitle: String,
    pub image_name: String,
    pub is_selected: bool,

    /// Char-index ranges `(start, end)` of the query match inside `title`.
    pub title_highlights: Vec<(usize, usize)>,

    /// Char-index ranges of the query match inside `subtitle`.
    pub subtitle_highlights: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Current carousel page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselInfo {
    /// Image of the active page, `None` when the carousel has no pages.
    pub image_name: Option<String>,
    pub page: usize,
    pub page_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently go to the query.
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Pre-formatted content of the statistics panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsPanelInfo {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
