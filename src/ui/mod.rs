//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view model types
//! - [`renderer`]: Top-level rendering entry points
//! - [`components`]: Per-element renderers
//! - [`helpers`]: Output buffer and match highlighting
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    CarouselInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, HomeViewModel, SearchBarInfo,
    SplashViewModel, StatsPanelInfo, UIViewModel,
};
