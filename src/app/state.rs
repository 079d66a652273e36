//! Application state and view model computation.
//!
//! [`AppState`] is the imperative shell around the pure catalog and stats
//! functions. It owns every piece of mutable view state: the current screen,
//! the search query and its derived filtered list, the list cursor, the
//! carousel page, the open statistics panel and the splash timer.
//!
//! The filtered list is recomputed from the full catalog whenever the query
//! changes; the catalog itself is never modified after loading.

use super::modes::{InputMode, Screen};
use super::splash::{Clock, SplashState, SplashTimer, SystemClock, DEFAULT_SPLASH_DELAY};
use crate::domain::catalog::{match_range, MatchPolicy};
use crate::domain::{compute_stats, filter, Carousel, Catalog, Item, StatsSnapshot};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CarouselInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, HomeViewModel, SearchBarInfo,
    SplashViewModel, StatsPanelInfo, UIViewModel,
};
use std::rc::Rc;
use std::time::Duration;

/// Rows used by everything on the home screen except the list.
///
/// Blank line, header, border, carousel (3) and page dots, search box (3),
/// bottom border and footer.
const HOME_CHROME_ROWS: usize = 12;

/// Longest title shown before truncation.
const MAX_TITLE_CHARS: usize = 28;

/// Title shown on the splash screen when none is configured.
pub const DEFAULT_SPLASH_TITLE: &str = "Showcase";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub input_mode: InputMode,

    /// Loaded once on launch, read-only afterwards.
    pub catalog: Catalog,

    pub search_query: String,

    /// Catalog items matching `search_query`, in catalog order.
    pub filtered_items: Vec<Item>,

    /// Cursor within `filtered_items`. Clamped after every refilter.
    pub selected_index: usize,

    pub carousel: Carousel,

    /// Snapshot shown by the statistics panel while it is open.
    pub stats_panel: Option<StatsSnapshot>,

    /// Running splash timer, `None` once the home screen is shown.
    pub splash: Option<SplashTimer>,

    pub splash_delay: Duration,
    pub splash_title: String,
    pub match_policy: MatchPolicy,
    pub theme: Theme,
    clock: Rc<dyn Clock>,
}

impl AppState {
    /// Creates an empty state on the splash screen using the system clock.
    ///
    /// The catalog stays empty until [`AppState::launch`] runs.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            screen: Screen::Splash,
            input_mode: InputMode::Normal,
            catalog: Catalog::default(),
            search_query: String::new(),
            filtered_items: Vec::new(),
            selected_index: 0,
            carousel: Carousel::default(),
            stats_panel: None,
            splash: None,
            splash_delay: DEFAULT_SPLASH_DELAY,
            splash_title: DEFAULT_SPLASH_TITLE.to_string(),
            match_policy: MatchPolicy::default(),
            theme,
            clock: Rc::new(SystemClock::new()),
        }
    }

    /// Replaces the time source used by the splash timer.
    #[must_use]
    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_splash_delay(mut self, delay: Duration) -> Self {
        self.splash_delay = delay;
        self
    }

    #[must_use]
    pub fn with_splash_title(mut self, title: impl Into<String>) -> Self {
        self.splash_title = title.into();
        self
    }

    #[must_use]
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Loads the catalog and resets the derived views over it.
    pub fn load_catalog(&mut self) {
        self.catalog = Catalog::load();
        self.carousel = Carousel::new(self.catalog.images().len());
        self.apply_search_filter();
    }

    /// Loads the catalog and starts the splash timer.
    ///
    /// Returns the delay the host should wait before ticking, or `None` when
    /// the splash was skipped because the delay is zero.
    pub fn launch(&mut self) -> Option<Duration> {
        self.load_catalog();
        self.screen = Screen::Splash;

        if self.splash_delay.is_zero() {
            self.show_home();
            return None;
        }

        self.splash = Some(SplashTimer::start(self.clock.now(), self.splash_delay));
        Some(self.splash_delay)
    }

    /// Checks the splash timer against the clock.
    ///
    /// Switches to the home screen once the delay has elapsed. Returns the
    /// remaining time when the deadline has not been reached yet.
    pub fn poll_splash(&mut self) -> SplashState {
        let Some(timer) = &self.splash else {
            return SplashState::Cancelled;
        };

        let state = timer.state(self.clock.now());
        if state == SplashState::Elapsed {
            tracing::debug!("splash elapsed");
            self.show_home();
        }
        state
    }

    /// Cancels the splash timer and shows the home screen right away.
    pub fn skip_splash(&mut self) {
        if let Some(timer) = &self.splash {
            timer.cancel();
        }
        self.show_home();
    }

    fn show_home(&mut self) {
        self.splash = None;
        self.screen = Screen::Home;
    }

    /// Replaces the query and refilters.
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.apply_search_filter();
    }

    /// Recomputes `filtered_items` from the full catalog and clamps the cursor.
    pub fn apply_search_filter(&mut self) {
        self.filtered_items = filter(self.catalog.items(), &self.search_query, self.match_policy);

        if self.filtered_items.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_items.len() - 1);
        }
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered_items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_items.len();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered_items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.filtered_items.get(self.selected_index)
    }

    /// Computes statistics over the full catalog and opens the panel.
    ///
    /// The active search filter does not narrow the statistics.
    pub fn open_stats(&mut self) -> &StatsSnapshot {
        self.stats_panel.insert(compute_stats(self.catalog.items()))
    }

    pub fn close_stats(&mut self) {
        self.stats_panel = None;
    }

    /// Computes the view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        match self.screen {
            Screen::Splash => UIViewModel::Splash(SplashViewModel {
                title: self.splash_title.clone(),
            }),
            Screen::Home => UIViewModel::Home(self.compute_home(rows, cols)),
        }
    }

    fn compute_home(&self, rows: usize, cols: usize) -> HomeViewModel {
        let available_rows = rows.saturating_sub(HOME_CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_items.len());
        if visible_end - visible_start < available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = self.filtered_items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, item)| self.compute_display_item(item, visible_start + offset, cols))
            .collect();

        let empty_state = self.filtered_items.is_empty().then(|| self.compute_empty_state());

        HomeViewModel {
            header: HeaderInfo {
                title: format!(" Catalog ({}/{}) ", self.filtered_items.len(), self.catalog.items().len()),
            },
            carousel: CarouselInfo {
                image_name: self
                    .catalog
                    .images()
                    .get(self.carousel.current_page())
                    .map(|image| image.image_name.clone()),
                page: self.carousel.current_page(),
                page_count: self.carousel.page_count(),
            },
            search_bar: SearchBarInfo {
                query: self.search_query.clone(),
                is_focused: self.input_mode == InputMode::Search,
            },
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state,
            stats_panel: self.stats_panel.as_ref().map(Self::compute_stats_panel),
            footer: self.compute_footer(),
        }
    }

    fn compute_display_item(&self, item: &Item, absolute_idx: usize, cols: usize) -> DisplayItem {
        let highlights = |text: &str| -> Vec<(usize, usize)> {
            if self.search_query.is_empty() {
                return vec![];
            }
            match_range(text, &self.search_query, self.match_policy)
                .filter(|(start, end)| start < end)
                .into_iter()
                .collect()
        };

        let subtitle_width = cols.saturating_sub(MAX_TITLE_CHARS + 4);

        DisplayItem {
            id: item.id,
            title: truncate_chars(&item.title, MAX_TITLE_CHARS),
            subtitle: truncate_chars(&item.subtitle, subtitle_width),
            image_name: item.image_name.clone(),
            is_selected: absolute_idx == self.selected_index,
            title_highlights: highlights(&item.title),
            subtitle_highlights: highlights(&item.subtitle),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.catalog.is_empty() {
            EmptyState {
                message: "Catalog is empty".to_string(),
                subtitle: "Nothing was loaded".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No items match \"{}\"", self.search_query),
                subtitle: "Esc clears the search".to_string(),
            }
        }
    }

    fn compute_stats_panel(stats: &StatsSnapshot) -> StatsPanelInfo {
        let mut lines = vec![
            format!("Item Count: {}", stats.count),
            format!("Top {} Characters:", stats.top_chars.len()),
        ];
        lines.extend(
            stats
                .top_chars
                .iter()
                .map(|freq| format!("  {:?} = {}", freq.ch, freq.count)),
        );
        StatsPanelInfo {
            title: "Statistics".to_string(),
            lines,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.stats_panel.is_some() {
            "Esc/s: close statistics  q: quit"
        } else {
            match self.input_mode {
                InputMode::Search => "Type to filter  Enter/Esc: done  Ctrl+n/p: navigate",
                InputMode::Normal => {
                    "h/l: page  j/k: navigate  /: search  Esc: clear  s: stats  q: quit"
                }
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Shortens `text` to at most `max` chars, ending in `...` when cut.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
