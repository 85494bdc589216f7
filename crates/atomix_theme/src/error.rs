//! Theme engine error taxonomy

use thiserror::Error;

/// Errors surfaced by theme I/O and the theme manager.
///
/// Structural problems with a theme are never reported here; they are
/// collected by [`crate::validate::validate_theme`] as plain data.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Import received text that is not valid JSON.
    #[error("Invalid theme JSON")]
    InvalidJson(#[source] serde_json::Error),

    /// The requested theme is not registered.
    #[error("Theme not found: {0}")]
    ThemeNotFound(String),

    /// An alias was added for a theme that is not registered.
    #[error("Alias target not registered: {0}")]
    AliasTarget(String),

    /// A dot-notation override path does not resolve to a known field.
    #[error("Invalid override path: {0}")]
    InvalidOverridePath(String),
}
