//! End-to-end flows driven through the public event API.

use showcase::app::{Clock, ManualClock};
use showcase::ui::{render_to_string, UIViewModel};
use showcase::{handle_event, initialize, Action, AppState, Config, Event, InputMode, Screen};
use std::rc::Rc;
use std::time::Duration;

fn launched_with_clock(clock: &ManualClock) -> AppState {
    let shared: Rc<dyn Clock> = Rc::new(clock.clone());
    let mut state = initialize(&Config::default()).with_clock(shared);
    handle_event(&mut state, &Event::AppLaunch).unwrap();
    state
}

fn home() -> AppState {
    let config = Config {
        splash_delay_ms: 0,
        ..Default::default()
    };
    let mut state = initialize(&config);
    handle_event(&mut state, &Event::AppLaunch).unwrap();
    state
}

fn titles(state: &AppState) -> Vec<&str> {
    state.filtered_items.iter().map(|i| i.title.as_str()).collect()
}

fn type_query(state: &mut AppState, query: &str) {
    handle_event(state, &Event::SearchMode).unwrap();
    for c in query.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
}

#[test]
fn test_splash_then_home_on_timer() {
    let clock = ManualClock::new();
    let mut state = launched_with_clock(&clock);
    assert_eq!(state.screen, Screen::Splash);

    clock.advance(Duration::from_millis(1500));
    let (render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
    assert!(!render);
    assert_eq!(actions, vec![Action::ScheduleTimer(Duration::from_millis(500))]);

    clock.advance(Duration::from_millis(500));
    let (render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.screen, Screen::Home);
}

#[test]
fn test_skipped_splash_ignores_late_timer() {
    let clock = ManualClock::new();
    let mut state = launched_with_clock(&clock);

    handle_event(&mut state, &Event::SkipSplash).unwrap();
    assert_eq!(state.screen, Screen::Home);

    clock.advance(Duration::from_secs(5));
    let (render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.screen, Screen::Home);
}

#[test]
fn test_search_narrows_and_restores_list() {
    let mut state = home();
    assert_eq!(state.filtered_items.len(), 12);

    type_query(&mut state, "berry");
    assert_eq!(titles(&state), ["Elderberry"]);

    handle_event(&mut state, &Event::ExitSearch).unwrap();
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.search_query, "berry");

    handle_event(&mut state, &Event::ClearSearch).unwrap();
    assert_eq!(state.filtered_items.len(), 12);
}

#[test]
fn test_search_is_case_insensitive_by_default() {
    let mut state = home();
    handle_event(&mut state, &Event::SearchChanged("KIWI".to_string())).unwrap();
    assert_eq!(titles(&state), ["Kiwi"]);
}

#[test]
fn test_case_sensitive_config() {
    let config = Config {
        splash_delay_ms: 0,
        case_sensitive: true,
        ..Default::default()
    };
    let mut state = initialize(&config);
    handle_event(&mut state, &Event::AppLaunch).unwrap();

    handle_event(&mut state, &Event::SearchChanged("KIWI".to_string())).unwrap();
    assert!(state.filtered_items.is_empty());
    handle_event(&mut state, &Event::SearchChanged("Kiwi".to_string())).unwrap();
    assert_eq!(titles(&state), ["Kiwi"]);
}

#[test]
fn test_selection_follows_narrowed_list() {
    let mut state = home();
    for _ in 0..11 {
        handle_event(&mut state, &Event::KeyDown).unwrap();
    }
    assert_eq!(state.selected_item().map(|i| i.title.as_str()), Some("Papaya"));

    handle_event(&mut state, &Event::SearchChanged("an".to_string())).unwrap();
    let last = state.filtered_items.len() - 1;
    assert_eq!(state.selected_index, last);
}

#[test]
fn test_carousel_pages_clamp() {
    let mut state = home();
    handle_event(&mut state, &Event::CarouselPageChanged(99)).unwrap();
    assert_eq!(state.carousel.current_page(), 2);

    let (render, _) = handle_event(&mut state, &Event::NextPage).unwrap();
    assert!(!render);

    handle_event(&mut state, &Event::CarouselPageChanged(-3)).unwrap();
    assert_eq!(state.carousel.current_page(), 0);
}

#[test]
fn test_stats_cover_full_catalog_while_filtered() {
    let mut state = home();
    handle_event(&mut state, &Event::SearchChanged("fig".to_string())).unwrap();
    handle_event(&mut state, &Event::StatsRequested).unwrap();

    let stats = state.stats_panel.as_ref().unwrap();
    assert_eq!(stats.count, 12);
    let top: Vec<(char, usize)> = stats.top_chars.iter().map(|f| (f.ch, f.count)).collect();
    assert_eq!(top, [('a', 9), ('e', 8), ('r', 8)]);
}

#[test]
fn test_stats_panel_blocks_input_until_dismissed() {
    let mut state = home();
    handle_event(&mut state, &Event::StatsRequested).unwrap();

    let (render, _) = handle_event(&mut state, &Event::SearchMode).unwrap();
    assert!(!render);
    assert_eq!(state.input_mode, InputMode::Normal);

    handle_event(&mut state, &Event::StatsDismissed).unwrap();
    assert!(state.stats_panel.is_none());
    handle_event(&mut state, &Event::SearchMode).unwrap();
    assert_eq!(state.input_mode, InputMode::Search);
}

#[test]
fn test_viewmodel_highlights_match() {
    let mut state = home();
    handle_event(&mut state, &Event::SearchChanged("ang".to_string())).unwrap();

    let UIViewModel::Home(vm) = state.compute_viewmodel(30, 100) else {
        panic!("expected home view model");
    };
    let mango = vm
        .display_items
        .iter()
        .find(|i| i.title == "Mango")
        .unwrap();
    assert_eq!(mango.title_highlights, vec![(1, 4)]);
}

#[test]
fn test_rendered_home_lists_catalog() {
    let state = home();
    let out = render_to_string(&state, 40, 100);
    for title in ["Apple", "Banana", "Cherry"] {
        assert!(out.contains(title), "missing {title}");
    }
}

#[test]
fn test_close_focus_emits_action() {
    let mut state = home();
    let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
    assert_eq!(actions, vec![Action::CloseFocus]);
}
