//! Splash screen renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SplashViewModel;

/// Renders the title card vertically and horizontally centered.
pub fn render_splash(frame: &mut Frame, splash: &SplashViewModel, theme: &Theme, rows: usize, cols: usize) {
    frame.goto((rows / 2).max(1), 1);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(&theme.colors.splash_fg));
    frame.centered(&splash.title, cols);
    frame.reset();
}
