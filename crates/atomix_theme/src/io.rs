//! Theme JSON import and export
//!
//! Export writes a pretty-printed snapshot of every serializable theme
//! field. Import parses back into [`ThemeOptions`] without validating;
//! callers gate with [`crate::validate::validate_theme`] when they need
//! the structural minimum. The spacing function never crosses the JSON
//! boundary, composition rebuilds it from the default spec.

use crate::error::ThemeError;
use crate::theme::{Theme, ThemeOptions};

/// Serialize a theme to pretty-printed JSON.
pub fn export_theme(theme: &Theme) -> String {
    // Serialization cannot fail here: every map key is a string and no
    // field has a fallible Serialize impl.
    serde_json::to_string_pretty(theme).unwrap_or_default()
}

/// Parse theme JSON into options, without validation.
pub fn import_theme(json: &str) -> Result<ThemeOptions, ThemeError> {
    serde_json::from_str(json).map_err(ThemeError::InvalidJson)
}
