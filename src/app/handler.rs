//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point the plugin shim calls for every
//! host event it cares about. It mutates [`AppState`] and returns whether the
//! pane needs a re-render together with the [`Action`]s to execute.
//!
//! # Event Types
//!
//! - **Lifecycle**: `AppLaunch`, `Tick`, `SkipSplash`, `CloseFocus`
//! - **Search**: `SearchChanged`, `SearchMode`, `Char`, `Backspace`,
//!   `ExitSearch`, `ClearSearch`
//! - **Carousel**: `CarouselPageChanged`, `NextPage`, `PreviousPage`
//! - **List**: `KeyDown`, `KeyUp`
//! - **Statistics**: `StatsRequested`, `StatsDismissed`
//!
//! While the splash screen is up only lifecycle events have an effect. While
//! the statistics panel is open it is modal: everything except dismissing it,
//! refreshing it, ticks and closing is ignored.

use crate::app::modes::{InputMode, Screen};
use crate::app::splash::SplashState;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events produced by user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Plugin loaded: load the catalog and start the splash timer.
    AppLaunch,
    /// Host timer fired.
    Tick,
    /// Leave the splash screen before the timer elapses.
    SkipSplash,
    /// Hide the plugin pane.
    CloseFocus,

    /// Replace the whole search query.
    SearchChanged(String),
    /// Start typing into the search bar.
    SearchMode,
    /// Append a character to the query (search mode only).
    Char(char),
    /// Remove the last character of the query (search mode only).
    Backspace,
    /// Stop typing, keeping the query.
    ExitSearch,
    /// Clear the query and stop typing.
    ClearSearch,

    /// Jump to a carousel page; out-of-range indices are clamped.
    CarouselPageChanged(i64),
    NextPage,
    PreviousPage,

    /// Move the list cursor down (wraps).
    KeyDown,
    /// Move the list cursor up (wraps).
    KeyUp,

    /// Open the statistics panel.
    StatsRequested,
    /// Close the statistics panel.
    StatsDismissed,
}

impl Event {
    const fn is_lifecycle(&self) -> bool {
        matches!(self, Self::AppLaunch | Self::Tick | Self::SkipSplash | Self::CloseFocus)
    }
}

/// Processes an event, mutates application state and returns the actions to
/// execute.
///
/// The boolean is `true` when the pane should be re-rendered.
///
/// # Errors
///
/// None of the current transitions fail; the `Result` keeps the signature
/// uniform with the rest of the plugin's fallible entry points.
///
/// # Example
///
/// ```
/// use showcase::{handle_event, AppState, Event, Theme};
/// use std::time::Duration;
///
/// let mut state = AppState::new(Theme::default()).with_splash_delay(Duration::ZERO);
/// handle_event(&mut state, &Event::AppLaunch)?;
/// let (render, _actions) = handle_event(&mut state, &Event::SearchChanged("lem".into()))?;
/// assert!(render);
/// assert_eq!(state.filtered_items.len(), 1);
/// # Ok::<(), showcase::ShowcaseError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.screen == Screen::Splash && !event.is_lifecycle() {
        tracing::trace!("ignoring input during splash");
        return Ok((false, vec![]));
    }

    if state.stats_panel.is_some()
        && !event.is_lifecycle()
        && !matches!(event, Event::StatsDismissed | Event::StatsRequested)
    {
        tracing::trace!("statistics panel is modal, ignoring input");
        return Ok((false, vec![]));
    }

    match event {
        Event::AppLaunch => {
            tracing::debug!("app launch");
            let actions = state
                .launch()
                .map(Action::ScheduleTimer)
                .into_iter()
                .collect();
            Ok((true, actions))
        }
        Event::Tick => match state.poll_splash() {
            SplashState::Elapsed => Ok((true, vec![])),
            SplashState::Pending { remaining } => {
                tracing::debug!(remaining = ?remaining, "tick before splash deadline, rescheduling");
                Ok((false, vec![Action::ScheduleTimer(remaining)]))
            }
            SplashState::Cancelled => Ok((false, vec![])),
        },
        Event::SkipSplash => {
            if state.screen != Screen::Splash {
                return Ok((false, vec![]));
            }
            tracing::debug!("splash skipped");
            state.skip_splash();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::SearchChanged(text) => {
            if *text == state.search_query {
                return Ok((false, vec![]));
            }
            state.set_search_query(text.clone());
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut query = state.search_query.clone();
            query.push(*c);
            tracing::trace!(query = %query, "search query updated");
            state.set_search_query(query);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut query = state.search_query.clone();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.set_search_query(query);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "leaving search input");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            state.input_mode = InputMode::Normal;
            state.set_search_query(String::new());
            Ok((true, vec![]))
        }

        Event::CarouselPageChanged(index) => {
            let before = state.carousel.current_page();
            let page = state.carousel.update_page(*index);
            tracing::debug!(requested = index, page = page, "carousel page changed");
            Ok((page != before, vec![]))
        }
        Event::NextPage => {
            let before = state.carousel.current_page();
            Ok((state.carousel.next_page() != before, vec![]))
        }
        Event::PreviousPage => {
            let before = state.carousel.current_page();
            Ok((state.carousel.previous_page() != before, vec![]))
        }

        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }

        Event::StatsRequested => {
            let stats = state.open_stats();
            tracing::debug!(count = stats.count, top = ?stats.top_chars, "statistics opened");
            Ok((true, vec![]))
        }
        Event::StatsDismissed => {
            if state.stats_panel.is_none() {
                return Ok((false, vec![]));
            }
            state.close_stats();
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::splash::ManualClock;
    use crate::ui::Theme;
    use std::rc::Rc;
    use std::time::Duration;

    fn launched() -> AppState {
        let mut state = AppState::new(Theme::default()).with_splash_delay(Duration::ZERO);
        handle_event(&mut state, &Event::AppLaunch).unwrap();
        state
    }

    #[test]
    fn test_launch_schedules_splash_timer() {
        let mut state = AppState::new(Theme::default()).with_clock(Rc::new(ManualClock::new()));
        let (render, actions) = handle_event(&mut state, &Event::AppLaunch).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::ScheduleTimer(Duration::from_secs(2))]);
        assert_eq!(state.screen, Screen::Splash);
    }

    #[test]
    fn test_early_tick_reschedules_remaining() {
        let clock = ManualClock::new();
        let mut state = AppState::new(Theme::default()).with_clock(Rc::new(clock.clone()));
        handle_event(&mut state, &Event::AppLaunch).unwrap();

        clock.advance(Duration::from_millis(1200));
        let (render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::ScheduleTimer(Duration::from_millis(800))]);

        clock.advance(Duration::from_millis(800));
        let (render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn test_input_ignored_during_splash() {
        let mut state = AppState::new(Theme::default()).with_clock(Rc::new(ManualClock::new()));
        handle_event(&mut state, &Event::AppLaunch).unwrap();
        let (render, _) = handle_event(&mut state, &Event::StatsRequested).unwrap();
        assert!(!render);
        assert!(state.stats_panel.is_none());
    }

    #[test]
    fn test_skip_splash_cancels_timer() {
        let clock = ManualClock::new();
        let mut state = AppState::new(Theme::default()).with_clock(Rc::new(clock.clone()));
        handle_event(&mut state, &Event::AppLaunch).unwrap();
        let token = state.splash.as_ref().map(|t| t.token()).unwrap();

        handle_event(&mut state, &Event::SkipSplash).unwrap();
        assert!(token.is_cancelled());
        assert_eq!(state.screen, Screen::Home);

        clock.advance(Duration::from_secs(2));
        let (render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_typing_requires_search_mode() {
        let mut state = launched();
        let (render, _) = handle_event(&mut state, &Event::Char('k')).unwrap();
        assert!(!render);
        assert!(state.search_query.is_empty());

        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "kiw".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.search_query, "kiw");
        assert_eq!(state.filtered_items.len(), 1);

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.search_query, "ki");
    }

    #[test]
    fn test_exit_keeps_query_clear_drops_it() {
        let mut state = launched();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('m')).unwrap();
        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "m");

        handle_event(&mut state, &Event::ClearSearch).unwrap();
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered_items.len(), state.catalog.items().len());
    }

    #[test]
    fn test_backspace_on_empty_query_is_noop() {
        let mut state = launched();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
    }

    #[test]
    fn test_carousel_events_clamp() {
        let mut state = launched();
        let (render, _) = handle_event(&mut state, &Event::CarouselPageChanged(2)).unwrap();
        assert!(render);
        assert_eq!(state.carousel.current_page(), 2);

        let (render, _) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(!render);

        handle_event(&mut state, &Event::CarouselPageChanged(-1)).unwrap();
        assert_eq!(state.carousel.current_page(), 0);
    }

    #[test]
    fn test_stats_panel_is_modal() {
        let mut state = launched();
        handle_event(&mut state, &Event::StatsRequested).unwrap();
        assert!(state.stats_panel.is_some());

        let (render, _) = handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(!render);
        assert_eq!(state.selected_index, 0);

        handle_event(&mut state, &Event::StatsDismissed).unwrap();
        assert!(state.stats_panel.is_none());
    }

    #[test]
    fn test_close_focus_action() {
        let mut state = launched();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
