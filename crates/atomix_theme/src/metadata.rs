//! Theme metadata projection
//!
//! [`ThemeMetadata`] is the read-only summary of a theme that pickers and
//! registries display. It is derived from a [`Theme`] on demand and never
//! persisted on its own.

use serde::{Deserialize, Serialize};

use crate::theme::{A11y, Theme, ThemeStatus};
use crate::tokens::PaletteMode;

/// Display summary of a theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeMetadata {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Vec<String>>,
    pub supports_dark_mode: bool,
    pub status: ThemeStatus,
    /// Representative color, taken from the primary main color.
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub a11y: Option<A11y>,
}

/// Project a theme into its display metadata.
pub fn theme_metadata(theme: &Theme) -> ThemeMetadata {
    ThemeMetadata {
        name: theme.name.clone(),
        description: theme.description.clone(),
        author: theme.author.clone(),
        version: Some(theme.version.clone()),
        tags: theme.tags.clone(),
        supports_dark_mode: supports_dark_mode(theme),
        status: theme.status,
        color: theme.palette.primary.main.clone(),
        a11y: theme.a11y.clone(),
    }
}

/// Whether a theme advertises dark-mode support.
///
/// True when the palette mode is dark, the theme flags it explicitly, or
/// the accessibility modes list `"dark"`.
pub fn supports_dark_mode(theme: &Theme) -> bool {
    if theme.palette.mode == Some(PaletteMode::Dark) {
        return true;
    }
    if theme.supports_dark_mode == Some(true) {
        return true;
    }
    theme
        .a11y
        .as_ref()
        .and_then(|a11y| a11y.modes.as_ref())
        .is_some_and(|modes| modes.iter().any(|mode| mode == "dark"))
}
