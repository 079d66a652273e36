//! Screen and input mode state types.
//!
//! The plugin shows one of two screens:
//! - **Splash**: the title card shown right after launch
//! - **Home**: carousel, search bar and catalog list
//!
//! On the home screen keys are interpreted according to the [`InputMode`].

/// Which screen is currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Title card shown until the splash timer elapses.
    #[default]
    Splash,
    /// Carousel, search bar and catalog list.
    Home,
}

/// How keyboard input is interpreted on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and commands: h/l page the carousel, j/k move through the
    /// list, `/` starts typing a query, `s` opens statistics, `q` quits.
    #[default]
    Normal,

    /// Characters are appended to the search query.
    Search,
}
