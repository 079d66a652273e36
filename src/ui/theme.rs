//! Theme management and ANSI escape sequence generation.
//!
//! Two themes are built in (`showcase-dark`, the default, and
//! `showcase-light`). Custom themes are TOML files with the same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e0def4"
//! header_bg = "#26233a"        # optional
//! selection_fg = "#191724"
//! selection_bg = "#9ccfd8"
//! text_normal = "#e0def4"
//! text_dim = "#6e6a86"
//! border = "#403d52"
//! search_bar_border = "#524f67"
//! search_bar_focused = "#c4a7e7"
//! match_highlight_fg = "#191724"
//! match_highlight_bg = "#f6c177"
//! empty_state_fg = "#31748f"
//! carousel_fg = "#ebbcba"
//! page_dot_active = "#ebbcba"
//! page_dot_inactive = "#524f67"
//! panel_border = "#c4a7e7"
//! splash_fg = "#e0def4"
//! ```

use crate::domain::error::{Result, ShowcaseError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, subtitles and other secondary text.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    /// Search box border while keystrokes go to the query.
    pub search_bar_focused: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub carousel_fg: String,
    pub page_dot_active: String,
    pub page_dot_inactive: String,

    /// Border of the statistics panel.
    pub panel_border: String,

    pub splash_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if the name is unknown.
    ///
    /// ```
    /// use showcase::Theme;
    ///
    /// assert_eq!(Theme::from_name("showcase-light").map(|t| t.name), Some("showcase-light".into()));
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "showcase-dark" => include_str!("../../themes/showcase-dark.toml"),
            "showcase-light" => include_str!("../../themes/showcase-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Theme`] if the file cannot be read or does not
    /// parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ShowcaseError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| ShowcaseError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses `#rrggbb` into an RGB triple, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns `showcase-dark`.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("showcase-dark").expect("built-in showcase-dark theme should always parse")
    }
}
