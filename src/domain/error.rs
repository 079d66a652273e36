//! Error types for the Showcase plugin.
//!
//! The catalog and statistics code is infallible; errors only come from the
//! ambient layer (theme files, filesystem access, configuration). All variants
//! are derived with `thiserror`.

use thiserror::Error;

/// The main error type for Showcase plugin operations.
///
/// # Examples
///
/// ```
/// use showcase::ShowcaseError;
///
/// let err = ShowcaseError::Config("splash_delay_ms must be a number".to_string());
/// assert_eq!(err.to_string(), "Configuration error: splash_delay_ms must be a number");
/// ```
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// A theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Showcase operations.
pub type Result<T> = std::result::Result<T, ShowcaseError>;
