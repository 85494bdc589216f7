//! Built-in theme presets
//!
//! Starter option fragments for common visual directions, composed into
//! full themes through [`create_theme`]. `quick_theme` covers the
//! name-plus-brand-colors shortcut.

use std::fmt::{Display, Formatter};

use crate::compose::create_theme;
use crate::theme::{
    BackgroundOptions, PaletteColorOptions, PaletteOptions, Theme, ThemeOptions, TypographyOptions,
};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Black-on-white with a neutral font stack.
    Minimal,
    /// The default mint/coral pairing.
    Modern,
    /// Material-style blue and pink.
    Classic,
    /// Warm coral and teal on a cream background.
    Vibrant,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Vibrant => "vibrant",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Modern => "Modern",
            Self::Classic => "Classic",
            Self::Vibrant => "Vibrant",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 4] = [
            ThemePreset::Minimal,
            ThemePreset::Modern,
            ThemePreset::Classic,
            ThemePreset::Vibrant,
        ];
        &PRESETS
    }

    /// Options fragment for this preset.
    pub fn options(self) -> ThemeOptions {
        match self {
            Self::Minimal => preset_options(
                "Minimal",
                "#000000",
                "#FFFFFF",
                "#FFFFFF",
                "#FAFAFA",
                r#""Helvetica Neue", Helvetica, Arial, sans-serif"#,
            ),
            Self::Modern => preset_options(
                "Modern",
                "#7AFFD7",
                "#FF5733",
                "#FAFAFA",
                "#F5F5F5",
                r#""Inter", "Roboto", sans-serif"#,
            ),
            Self::Classic => preset_options(
                "Classic",
                "#1976D2",
                "#DC004E",
                "#FFFFFF",
                "#EEEEEE",
                r#""Roboto", "Helvetica", "Arial", sans-serif"#,
            ),
            Self::Vibrant => preset_options(
                "Vibrant",
                "#FF6B6B",
                "#4ECDC4",
                "#FFF8F0",
                "#FFF0E0",
                r#""Poppins", "Roboto", sans-serif"#,
            ),
        }
    }

    /// Compose this preset into a complete theme.
    pub fn theme(self) -> Theme {
        create_theme(self.options())
    }

    /// Compose this preset with customizations layered on top.
    pub fn theme_with(self, customizations: ThemeOptions) -> Theme {
        create_theme(ThemeOptions::merge(self.options(), customizations))
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn preset_options(
    name: &str,
    primary: &str,
    secondary: &str,
    background: &str,
    subtle: &str,
    font_family: &str,
) -> ThemeOptions {
    ThemeOptions {
        name: Some(name.to_string()),
        palette: Some(PaletteOptions {
            primary: Some(PaletteColorOptions::from_main(primary)),
            secondary: Some(PaletteColorOptions::from_main(secondary)),
            background: Some(BackgroundOptions {
                default: Some(background.to_string()),
                paper: None,
                subtle: Some(subtle.to_string()),
            }),
            ..PaletteOptions::default()
        }),
        typography: Some(TypographyOptions {
            font_family: Some(font_family.to_string()),
            ..TypographyOptions::default()
        }),
        ..ThemeOptions::default()
    }
}

/// One-call theme from a name and brand colors.
pub fn quick_theme(name: &str, primary: &str, secondary: Option<&str>) -> Theme {
    create_theme(ThemeOptions {
        name: Some(name.to_string()),
        palette: Some(PaletteOptions {
            primary: Some(PaletteColorOptions::from_main(primary)),
            secondary: secondary.map(PaletteColorOptions::from_main),
            ..PaletteOptions::default()
        }),
        ..ThemeOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_stable() {
        let ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
        assert_eq!(ids, ["minimal", "modern", "classic", "vibrant"]);
    }

    #[test]
    fn preset_themes_carry_their_palette() {
        let theme = ThemePreset::Classic.theme();
        assert_eq!(theme.name, "Classic");
        assert_eq!(theme.palette.primary.main, "#1976D2");
        assert_eq!(theme.palette.secondary.main, "#DC004E");
        assert_eq!(theme.palette.background.default, "#FFFFFF");
        assert_eq!(theme.palette.background.subtle, "#EEEEEE");
    }

    #[test]
    fn minimal_uses_its_font_stack() {
        let theme = ThemePreset::Minimal.theme();
        assert_eq!(
            theme.typography.font_family,
            r#""Helvetica Neue", Helvetica, Arial, sans-serif"#
        );
    }

    #[test]
    fn customizations_win_over_the_preset() {
        let theme = ThemePreset::Modern.theme_with(ThemeOptions {
            name: Some("Branded".to_string()),
            palette: Some(PaletteOptions {
                primary: Some(PaletteColorOptions::from_main("#112233")),
                ..PaletteOptions::default()
            }),
            ..ThemeOptions::default()
        });
        assert_eq!(theme.name, "Branded");
        assert_eq!(theme.palette.primary.main, "#112233");
        assert_eq!(theme.palette.secondary.main, "#FF5733");
    }

    #[test]
    fn quick_theme_fills_in_brand_colors() {
        let theme = quick_theme("My Theme", "#ff0000", None);
        assert_eq!(theme.name, "My Theme");
        assert_eq!(theme.palette.primary.main, "#ff0000");

        let theme = quick_theme("My Theme", "#ff0000", Some("#00ff00"));
        assert_eq!(theme.palette.secondary.main, "#00ff00");
    }

    #[test]
    fn display_uses_the_display_name() {
        assert_eq!(ThemePreset::Vibrant.to_string(), "Vibrant");
    }
}
