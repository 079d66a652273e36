//! Showcase: a Zellij plugin presenting a small fruit catalog.
//!
//! On launch the plugin shows a splash card for a short delay, then a home
//! screen with:
//! - An image carousel with page dots
//! - A searchable list of catalog items with match highlighting
//! - A modal statistics panel (item count and most frequent title characters)

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Splash timer                                     │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain Layer (domain/)│
//! │ - Rendering           │   │ - Catalog + filtering │
//! │ - Theming             │   │ - Carousel paging     │
//! │ - Components          │   │ - Title statistics    │
//! └───────────────────────┘   └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (infrastructure/)                   │  ← Sandbox paths
//! │  Observability (observability/)                     │  ← OTLP file traces
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Catalog, filtering, carousel and statistics
//! - [`infrastructure`]: Sandbox path helpers
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/showcase.wasm" {
//!         theme "showcase-light"
//!         splash_delay_ms "1500"
//!         case_sensitive "false"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use showcase::{handle_event, initialize, Config, Event, Screen};
//!
//! let config = Config {
//!     splash_delay_ms: 0,
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::AppLaunch)?;
//! assert_eq!(state.screen, Screen::Home);
//!
//! handle_event(&mut state, &Event::SearchChanged("ap".to_string()))?;
//! let titles: Vec<_> = state.filtered_items.iter().map(|i| i.title.as_str()).collect();
//! assert_eq!(titles, ["Apple", "Grape", "Papaya"]);
//! # Ok::<(), showcase::ShowcaseError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Screen};
pub use domain::{Catalog, Item, ItemId, MatchPolicy, Result, ShowcaseError, StatsSnapshot};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

/// Default splash delay in milliseconds.
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 2000;

/// Plugin configuration parsed from Zellij's KDL plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name (`showcase-dark`, `showcase-light`).
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` resolves to the sandbox host mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,

    /// How long the splash card stays up. `0` skips it.
    pub splash_delay_ms: u64,

    /// Title drawn on the splash card.
    pub splash_title: Option<String>,

    /// Match search queries case-sensitively.
    pub case_sensitive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            splash_title: None,
            case_sensitive: false,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Values that fail to parse are logged and
    /// replaced by their defaults, so a typo never stops the plugin loading.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use showcase::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("splash_delay_ms".to_string(), "500".to_string());
    /// map.insert("case_sensitive".to_string(), "true".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.splash_delay_ms, 500);
    /// assert!(config.case_sensitive);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            theme_name: non_empty(config, "theme"),
            theme_file: non_empty(config, "theme_file"),
            trace_level: non_empty(config, "trace_level"),
            splash_delay_ms: parsed_or(config, "splash_delay_ms", defaults.splash_delay_ms),
            splash_title: non_empty(config, "splash_title"),
            case_sensitive: parsed_or(config, "case_sensitive", defaults.case_sensitive),
        }
    }

    #[must_use]
    pub const fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    #[must_use]
    pub const fn match_policy(&self) -> MatchPolicy {
        if self.case_sensitive {
            MatchPolicy::CaseSensitive
        } else {
            MatchPolicy::CaseInsensitive
        }
    }

    /// Resolves the theme: `theme_file` first, then `theme`, then the default.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Theme`] if the file cannot be loaded or the
    /// name is not a built-in theme.
    pub fn resolve_theme(&self) -> Result<Theme> {
        if let Some(file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(file));
        }
        match &self.theme_name {
            Some(name) => Theme::from_name(name)
                .ok_or_else(|| ShowcaseError::Theme(format!("unknown theme '{name}'"))),
            None => Ok(Theme::default()),
        }
    }
}

fn non_empty(config: &BTreeMap<String, String>, key: &str) -> Option<String> {
    config
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn parse_value<T: FromStr>(config: &BTreeMap<String, String>, key: &str) -> Result<Option<T>> {
    config
        .get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ShowcaseError::Config(format!("invalid value for {key}: '{raw}'")))
        })
        .transpose()
}

fn parsed_or<T: FromStr>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    match parse_value(config, key) {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            tracing::warn!(error = %e, "using default");
            default
        }
    }
}

/// Builds the initial application state from configuration.
///
/// Theme problems are logged and fall back to the default theme. The catalog
/// is loaded later, when the state receives [`Event::AppLaunch`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing showcase plugin");

    let theme = config.resolve_theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    let state = AppState::new(theme)
        .with_splash_delay(config.splash_delay())
        .with_match_policy(config.match_policy());

    match &config.splash_title {
        Some(title) => state.with_splash_title(title.clone()),
        None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("splash_delay_ms", "soon"),
            ("case_sensitive", "yes"),
        ]));
        assert_eq!(config.splash_delay_ms, DEFAULT_SPLASH_DELAY_MS);
        assert!(!config.case_sensitive);
    }

    #[test]
    fn test_parse_value_reports_key() {
        let err = parse_value::<u64>(&map(&[("splash_delay_ms", "-1")]), "splash_delay_ms")
            .unwrap_err();
        assert!(matches!(err, ShowcaseError::Config(_)));
        assert!(err.to_string().contains("splash_delay_ms"));
    }

    #[test]
    fn test_blank_strings_are_unset() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("splash_title", "")]));
        assert_eq!(config.theme_name, None);
        assert_eq!(config.splash_title, None);
    }

    #[test]
    fn test_case_sensitive_selects_policy() {
        let config = Config::from_zellij(&map(&[("case_sensitive", "true")]));
        assert_eq!(config.match_policy(), MatchPolicy::CaseSensitive);
        assert_eq!(Config::default().match_policy(), MatchPolicy::CaseInsensitive);
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.resolve_theme(), Err(ShowcaseError::Theme(_))));
    }

    #[test]
    fn test_theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let light = include_str!("../themes/showcase-light.toml").replace(
            "name = \"showcase-light\"",
            "name = \"from-file\"",
        );
        file.write_all(light.as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("showcase-dark".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        assert_eq!(config.resolve_theme().unwrap().name, "from-file");
    }

    #[test]
    fn test_initialize_applies_config() {
        let config = Config {
            theme_name: Some("showcase-light".to_string()),
            splash_delay_ms: 250,
            splash_title: Some("Orchard".to_string()),
            case_sensitive: true,
            ..Default::default()
        };
        let state = initialize(&config);

        assert_eq!(state.theme.name, "showcase-light");
        assert_eq!(state.splash_delay, Duration::from_millis(250));
        assert_eq!(state.splash_title, "Orchard");
        assert_eq!(state.match_policy, MatchPolicy::CaseSensitive);
        assert_eq!(state.screen, Screen::Splash);
    }

    #[test]
    fn test_initialize_survives_missing_theme_file() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, Theme::default().name);
    }
}
