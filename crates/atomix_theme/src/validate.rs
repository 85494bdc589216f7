//! Theme validation
//!
//! Structural problems are collected into result values, never raised as
//! errors. [`validate_theme`] gates composition input; [`validate_metadata`]
//! checks display metadata and additionally reports soft warnings.

use crate::metadata::ThemeMetadata;
use crate::theme::ThemeOptions;

/// Outcome of [`validate_theme`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check the structural minimum for theme options.
///
/// A theme needs a non-empty name and a palette with a primary color.
/// The primary check only fires when a palette is present, so empty
/// options yield exactly two errors.
pub fn validate_theme(options: &ThemeOptions) -> ThemeValidation {
    let mut errors = Vec::new();

    if options.name.as_deref().map_or(true, str::is_empty) {
        errors.push("Theme must have a name".to_string());
    }

    match &options.palette {
        None => errors.push("Theme must have a palette".to_string()),
        Some(palette) => {
            let has_primary = palette
                .primary
                .as_ref()
                .and_then(|primary| primary.main.as_deref())
                .is_some_and(|main| !main.is_empty());
            if !has_primary {
                errors.push("Theme palette must have a primary color".to_string());
            }
        }
    }

    ThemeValidation {
        valid: errors.is_empty(),
        errors,
    }
}

/// Outcome of [`validate_metadata`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Check display metadata.
///
/// Missing description, version, or author are warnings only; a missing
/// name or a non-positive contrast target is an error.
pub fn validate_metadata(metadata: &ThemeMetadata) -> MetadataValidation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if metadata.name.is_empty() {
        errors.push("Theme must have a valid name".to_string());
    }
    if metadata.description.as_deref().map_or(true, str::is_empty) {
        warnings.push("Theme should have a description".to_string());
    }
    if metadata.version.as_deref().map_or(true, str::is_empty) {
        warnings.push("Theme should have a version".to_string());
    }
    if metadata.author.as_deref().map_or(true, str::is_empty) {
        warnings.push("Theme should have an author".to_string());
    }

    if let Some(a11y) = &metadata.a11y {
        if let Some(target) = a11y.contrast_target {
            if target <= 0.0 {
                errors.push("Theme a11y.contrastTarget must be a positive number".to_string());
            }
        }
    }

    MetadataValidation {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Whether a name is usable as a registry key.
///
/// Lowercase alphanumeric segments joined by single hyphens.
pub fn is_valid_theme_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{A11y, PaletteColorOptions, PaletteOptions};

    fn minimal_options() -> ThemeOptions {
        ThemeOptions {
            name: Some("Test Theme".to_string()),
            palette: Some(PaletteOptions {
                primary: Some(PaletteColorOptions::from_main("#7AFFD7")),
                ..PaletteOptions::default()
            }),
            ..ThemeOptions::default()
        }
    }

    #[test]
    fn minimal_options_are_valid() {
        let result = validate_theme(&minimal_options());
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn missing_name_is_reported() {
        let mut options = minimal_options();
        options.name = None;
        let result = validate_theme(&options);
        assert!(!result.valid);
        assert_eq!(result.errors, ["Theme must have a name"]);
    }

    #[test]
    fn missing_palette_is_reported() {
        let mut options = minimal_options();
        options.palette = None;
        let result = validate_theme(&options);
        assert_eq!(result.errors, ["Theme must have a palette"]);
    }

    #[test]
    fn missing_primary_is_reported() {
        let mut options = minimal_options();
        options.palette = Some(PaletteOptions::default());
        let result = validate_theme(&options);
        assert_eq!(result.errors, ["Theme palette must have a primary color"]);
    }

    #[test]
    fn empty_options_yield_exactly_two_errors() {
        let result = validate_theme(&ThemeOptions::default());
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            ["Theme must have a name", "Theme must have a palette"]
        );
    }

    #[test]
    fn metadata_warnings_do_not_invalidate() {
        let metadata = ThemeMetadata {
            name: "bare".to_string(),
            description: None,
            author: None,
            version: None,
            tags: None,
            supports_dark_mode: false,
            status: crate::theme::ThemeStatus::Experimental,
            color: "#000000".to_string(),
            a11y: None,
        };
        let result = validate_metadata(&metadata);
        assert!(result.valid);
        assert_eq!(
            result.warnings,
            [
                "Theme should have a description",
                "Theme should have a version",
                "Theme should have an author"
            ]
        );
    }

    #[test]
    fn non_positive_contrast_target_is_an_error() {
        let metadata = ThemeMetadata {
            name: "bare".to_string(),
            description: Some("d".to_string()),
            author: Some("a".to_string()),
            version: Some("1.0.0".to_string()),
            tags: None,
            supports_dark_mode: false,
            status: crate::theme::ThemeStatus::Stable,
            color: "#000000".to_string(),
            a11y: Some(A11y {
                contrast_target: Some(0.0),
                modes: None,
            }),
        };
        let result = validate_metadata(&metadata);
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            ["Theme a11y.contrastTarget must be a positive number"]
        );
    }

    #[test]
    fn name_format_accepts_kebab_case() {
        assert!(is_valid_theme_name("shaj-default"));
        assert!(is_valid_theme_name("theme2"));
        assert!(is_valid_theme_name("a-b-c-1"));
    }

    #[test]
    fn name_format_rejects_everything_else() {
        assert!(!is_valid_theme_name(""));
        assert!(!is_valid_theme_name("Theme"));
        assert!(!is_valid_theme_name("my_theme"));
        assert!(!is_valid_theme_name("-leading"));
        assert!(!is_valid_theme_name("trailing-"));
        assert!(!is_valid_theme_name("double--hyphen"));
    }
}
