//! Zellij plugin wrapper and entry point.
//!
//! Translates Zellij events into [`showcase::Event`]s, feeds them through
//! [`showcase::handle_event`] and carries out the returned actions. All
//! application logic lives in the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: `Key`, `Timer`, `PermissionRequestResult`
//! 3. **Launch**: Dispatch `AppLaunch`, which loads the catalog and arms the
//!    splash timer through `set_timeout`
//! 4. **Update**: `Timer` becomes `Tick`, keys are mapped per screen and mode
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Splash screen: any key skips straight to home.
//!
//! Statistics panel open:
//! - `Esc`/`s`: Close the panel
//! - `q`: Hide the plugin
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move through the list
//! - `h`/`Left`, `l`/`Right`: Previous / next carousel page
//! - `/`: Focus the search bar
//! - `Esc`: Clear the search
//! - `s`: Show statistics
//! - `q`: Hide the plugin
//!
//! Search mode:
//! - Printable keys: Edit the query
//! - `Backspace`: Delete the last character
//! - `Ctrl+n`/`Ctrl+p`: Move through the list
//! - `Enter`/`Esc`: Leave the search bar, keeping the query

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use std::collections::BTreeMap;
#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
use showcase::{handle_event, Action, AppState, Config, Event, InputMode, Screen};

#[cfg(target_arch = "wasm32")]
register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
#[cfg(target_arch = "wasm32")]
struct State {
    app: AppState,
}

#[cfg(target_arch = "wasm32")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: showcase::initialize(&Config::default()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        showcase::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = showcase::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        self.dispatch(&Event::AppLaunch);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                if matches!(status, PermissionStatus::Denied) {
                    tracing::warn!("permission denied - hiding the plugin will not work");
                }
                return false;
            }
            _ => return false,
        };

        let span = tracing::debug_span!("plugin_update", event = ?our_event);
        let _guard = span.entered();
        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        showcase::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_arch = "wasm32")]
impl State {
    /// Runs one event through the library and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if self.app.screen == Screen::Splash {
            return Some(Event::SkipSplash);
        }

        if self.app.stats_panel.is_some() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Char('s') => Some(Event::StatsDismissed),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        match self.app.input_mode {
            InputMode::Search => Some(match key.bare_key {
                BareKey::Char('n') if ctrl => Event::KeyDown,
                BareKey::Char('p') if ctrl => Event::KeyUp,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Enter | BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !ctrl => Event::Char(c),
                _ => return None,
            }),
            InputMode::Normal => Some(match key.bare_key {
                BareKey::Char('n') if ctrl => Event::KeyDown,
                BareKey::Char('p') if ctrl => Event::KeyUp,
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Left | BareKey::Char('h') => Event::PreviousPage,
                BareKey::Right | BareKey::Char('l') => Event::NextPage,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Esc => Event::ClearSearch,
                BareKey::Char('s') => Event::StatsRequested,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
        }
    }

    fn execute_action(action: &Action) {
        tracing::debug!(action = ?action, "executing action");
        match action {
            Action::ScheduleTimer(delay) => set_timeout(delay.as_secs_f64()),
            Action::CloseFocus => hide_self(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("showcase is a Zellij plugin; build it with `cargo build --target wasm32-wasip1`");
}
