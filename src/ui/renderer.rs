//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → Frame → stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin pane to stdout.
///
/// Zellij captures the plugin's stdout as the pane content.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders the pane into a string of text and ANSI escape sequences.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut frame = Frame::new();
    render_viewmodel(&mut frame, &viewmodel, &state.theme, rows, cols);
    frame.into_string()
}

fn render_viewmodel(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match vm {
        UIViewModel::Splash(splash) => components::render_splash(frame, splash, theme, rows, cols),
        UIViewModel::Home(home) => components::render_home(frame, home, theme, rows, cols),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use std::time::Duration;

    fn home_state() -> AppState {
        let mut state = AppState::new(Theme::default()).with_splash_delay(Duration::ZERO);
        handle_event(&mut state, &Event::AppLaunch).unwrap();
        state
    }

    #[test]
    fn test_splash_shows_title() {
        let state = AppState::new(Theme::default()).with_splash_title("NeoSoft");
        let out = render_to_string(&state, 24, 80);
        assert!(out.contains("NeoSoft"));
    }

    #[test]
    fn test_home_shows_items_and_carousel() {
        let state = home_state();
        let out = render_to_string(&state, 30, 100);
        assert!(out.contains("Apple"));
        assert!(out.contains("banner-orchard"));
        assert!(out.contains(" Search: "));
        assert!(out.contains("Catalog (12/12)"));
    }

    #[test]
    fn test_home_shows_empty_state() {
        let mut state = home_state();
        handle_event(&mut state, &Event::SearchChanged("qqq".into())).unwrap();
        let out = render_to_string(&state, 30, 100);
        assert!(out.contains("No items match \"qqq\""));
        assert!(!out.contains("Apple"));
    }

    #[test]
    fn test_stats_panel_is_drawn() {
        let mut state = home_state();
        handle_event(&mut state, &Event::StatsRequested).unwrap();
        let out = render_to_string(&state, 30, 100);
        assert!(out.contains("Statistics"));
        assert!(out.contains("Item Count: 12"));
    }

    #[test]
    fn test_tiny_pane_does_not_panic() {
        let mut state = home_state();
        handle_event(&mut state, &Event::StatsRequested).unwrap();
        let _ = render_to_string(&state, 1, 1);
        let _ = render_to_string(&state, 0, 0);
    }
}
