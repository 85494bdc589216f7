//! Theme composition
//!
//! [`create_theme`] turns a partial [`ThemeOptions`] into a complete
//! [`Theme`] by filling section defaults and deriving the missing pieces
//! of each brand color from its `main` value. Everything else in this
//! module is built on top of that one entry point: extension re-composes
//! a merged option set, the dark variant swaps in a fixed dark surface
//! palette, and dot-path overrides are parsed back into typed options
//! before re-composition.

use atomix_color::{contrast_text, darken, lighten};
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ThemeError;
use crate::theme::{PaletteColorOptions, PaletteOptions, Theme, ThemeOptions, ThemeStatus};
use crate::tokens::{
    BackgroundPalette, BorderRadius, Breakpoints, Palette, PaletteColor, PaletteMode, Shadows,
    Spacing, TextPalette, Transitions, Typography, ZIndex,
};

/// Default background for derived dark variants.
pub const DARK_BACKGROUND_DEFAULT: &str = "#121212";
/// Default elevated surface for derived dark variants.
pub const DARK_BACKGROUND_PAPER: &str = "#1e1e1e";

/// Build a complete theme from partial options.
///
/// Missing sections fall back to the default token set. A brand color
/// given only a `main` value gets `light`/`dark` derived by moving 20%
/// toward white and black, and a `contrast_text` picked for readability
/// against `main`.
pub fn create_theme(options: ThemeOptions) -> Theme {
    let palette = resolve_palette(options.palette);
    let color = options
        .color
        .unwrap_or_else(|| palette.primary.main.clone());

    Theme {
        name: options.name.unwrap_or_else(|| "Custom Theme".to_string()),
        description: options.description,
        author: options.author,
        version: options.version.unwrap_or_else(|| "1.0.0".to_string()),
        tags: options.tags,
        status: options.status.unwrap_or(ThemeStatus::Experimental),
        color,
        supports_dark_mode: options.supports_dark_mode,
        a11y: options.a11y,
        palette,
        typography: resolve_typography(options.typography),
        spacing: Spacing::new(options.spacing.unwrap_or_default()),
        breakpoints: resolve_breakpoints(options.breakpoints),
        shadows: resolve_shadows(options.shadows),
        transitions: resolve_transitions(options.transitions),
        z_index: resolve_z_index(options.z_index),
        border_radius: resolve_border_radius(options.border_radius),
        custom: options.custom.unwrap_or_default(),
    }
}

/// Fold option sets left to right; later sets win on conflicts.
pub fn merge_theme_options(options: impl IntoIterator<Item = ThemeOptions>) -> ThemeOptions {
    options
        .into_iter()
        .fold(ThemeOptions::default(), ThemeOptions::merge)
}

/// Re-compose a theme with an extension layered on top.
pub fn extend_theme(base: &Theme, extension: ThemeOptions) -> Theme {
    create_theme(ThemeOptions::merge(base.to_options(), extension))
}

/// Derive the dark counterpart of a theme.
///
/// The result is named `"<name> Dark"` with `palette.mode = dark` and a
/// fixed dark surface/text palette. Brand colors and all non-palette
/// sections carry over unchanged.
pub fn create_dark_variant(theme: &Theme) -> Theme {
    let mut dark = theme.clone();
    dark.name = format!("{} Dark", theme.name);
    dark.palette.mode = Some(PaletteMode::Dark);
    dark.palette.background = BackgroundPalette {
        default: DARK_BACKGROUND_DEFAULT.to_string(),
        paper: DARK_BACKGROUND_PAPER.to_string(),
        subtle: DARK_BACKGROUND_PAPER.to_string(),
    };
    dark.palette.text = TextPalette {
        primary: "#ffffff".to_string(),
        secondary: "rgba(255,255,255,0.7)".to_string(),
        disabled: "rgba(255,255,255,0.38)".to_string(),
    };
    dark
}

/// A light/dark theme pair built from one option set.
#[derive(Clone, Debug)]
pub struct ThemeVariants {
    pub light: Theme,
    pub dark: Theme,
}

/// Build `"<name> Light"` and `"<name> Dark"` themes from one option set.
///
/// The dark side goes through the same surface/text rules as
/// [`create_dark_variant`]; palette fields the options set explicitly
/// still win.
pub fn create_theme_variants(options: ThemeOptions) -> ThemeVariants {
    let base_name = options.name.clone().unwrap_or_else(|| "Custom".to_string());

    let mut light_options = options.clone();
    light_options.name = Some(format!("{base_name} Light"));
    light_options.supports_dark_mode = Some(false);

    let mut dark_options = options;
    dark_options.name = Some(format!("{base_name} Dark"));
    dark_options.supports_dark_mode = Some(true);
    dark_options.palette = Some(PaletteOptions::merge(
        dark_palette_base(),
        dark_options.palette.take().unwrap_or_default(),
    ));

    ThemeVariants {
        light: create_theme(light_options),
        dark: create_theme(dark_options),
    }
}

fn dark_palette_base() -> PaletteOptions {
    PaletteOptions {
        mode: Some(PaletteMode::Dark),
        background: Some(crate::theme::BackgroundOptions {
            default: Some(DARK_BACKGROUND_DEFAULT.to_string()),
            paper: Some(DARK_BACKGROUND_PAPER.to_string()),
            subtle: Some(DARK_BACKGROUND_PAPER.to_string()),
        }),
        text: Some(crate::theme::TextOptions {
            primary: Some("#ffffff".to_string()),
            secondary: Some("rgba(255,255,255,0.7)".to_string()),
            disabled: Some("rgba(255,255,255,0.38)".to_string()),
        }),
        ..PaletteOptions::default()
    }
}

/// Re-compose a theme with a flat dot-path override map applied on top.
///
/// Paths address serialized field names (`"palette.primary.main"`,
/// `"typography.fontSize"`). A path that does not land on a known field,
/// or carries a value of the wrong type, is rejected with
/// [`ThemeError::InvalidOverridePath`] rather than silently dropped.
pub fn override_theme(
    base: &Theme,
    overrides: &IndexMap<String, Value>,
) -> Result<Theme, ThemeError> {
    let mut options = base.to_options();

    for (path, value) in overrides {
        let segments: Vec<&str> = path.split('.').collect();
        let patch = nest_value(&segments, value.clone());

        let parsed: ThemeOptions = serde_json::from_value(patch)
            .map_err(|_| ThemeError::InvalidOverridePath(path.clone()))?;

        // Unknown field names deserialize to nothing; catch them by
        // checking the leaf survived the typed round trip.
        let round_trip = serde_json::to_value(&parsed)
            .map_err(|_| ThemeError::InvalidOverridePath(path.clone()))?;
        if !leaf_survives(&round_trip, &segments) {
            return Err(ThemeError::InvalidOverridePath(path.clone()));
        }

        options = ThemeOptions::merge(options, parsed);
    }

    Ok(create_theme(options))
}

fn nest_value(segments: &[&str], value: Value) -> Value {
    let mut nested = value;
    for segment in segments.iter().rev() {
        let mut object = serde_json::Map::new();
        object.insert((*segment).to_string(), nested);
        nested = Value::Object(object);
    }
    nested
}

fn leaf_survives(tree: &Value, segments: &[&str]) -> bool {
    let mut current = tree;
    for segment in segments {
        match current.get(segment) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

// ── Section resolvers ───────────────────────────────────────────────

fn resolve_palette(options: Option<PaletteOptions>) -> Palette {
    let defaults = Palette::default();
    let Some(options) = options else {
        return defaults;
    };
    Palette {
        mode: options.mode.or(defaults.mode),
        primary: resolve_brand(options.primary, &defaults.primary),
        secondary: resolve_brand(options.secondary, &defaults.secondary),
        error: resolve_brand(options.error, &defaults.error),
        warning: resolve_brand(options.warning, &defaults.warning),
        info: resolve_brand(options.info, &defaults.info),
        success: resolve_brand(options.success, &defaults.success),
        background: match options.background {
            Some(background) => BackgroundPalette {
                default: background.default.unwrap_or(defaults.background.default),
                paper: background.paper.unwrap_or(defaults.background.paper),
                subtle: background.subtle.unwrap_or(defaults.background.subtle),
            },
            None => defaults.background,
        },
        text: match options.text {
            Some(text) => TextPalette {
                primary: text.primary.unwrap_or(defaults.text.primary),
                secondary: text.secondary.unwrap_or(defaults.text.secondary),
                disabled: text.disabled.unwrap_or(defaults.text.disabled),
            },
            None => defaults.text,
        },
    }
}

fn resolve_brand(slot: Option<PaletteColorOptions>, defaults: &PaletteColor) -> PaletteColor {
    let Some(slot) = slot else {
        return defaults.clone();
    };
    let main = slot.main.unwrap_or_else(|| "#000000".to_string());
    let light = slot.light.unwrap_or_else(|| lighten(&main, 0.2));
    let dark = slot.dark.unwrap_or_else(|| darken(&main, 0.2));
    let contrast = slot
        .contrast_text
        .unwrap_or_else(|| contrast_text(&main).to_string());
    PaletteColor {
        main,
        light,
        dark,
        contrast_text: contrast,
    }
}

fn resolve_typography(options: Option<crate::theme::TypographyOptions>) -> Typography {
    let defaults = Typography::default();
    let Some(options) = options else {
        return defaults;
    };
    Typography {
        font_family: options.font_family.unwrap_or(defaults.font_family),
        font_size: options.font_size.unwrap_or(defaults.font_size),
        font_weight_light: options.font_weight_light.unwrap_or(defaults.font_weight_light),
        font_weight_regular: options
            .font_weight_regular
            .unwrap_or(defaults.font_weight_regular),
        font_weight_medium: options
            .font_weight_medium
            .unwrap_or(defaults.font_weight_medium),
        font_weight_semi_bold: options
            .font_weight_semi_bold
            .unwrap_or(defaults.font_weight_semi_bold),
        font_weight_bold: options.font_weight_bold.unwrap_or(defaults.font_weight_bold),
        h1: resolve_variant(options.h1, defaults.h1),
        h2: resolve_variant(options.h2, defaults.h2),
        h3: resolve_variant(options.h3, defaults.h3),
        h4: resolve_variant(options.h4, defaults.h4),
        h5: resolve_variant(options.h5, defaults.h5),
        h6: resolve_variant(options.h6, defaults.h6),
        body1: resolve_variant(options.body1, defaults.body1),
        body2: resolve_variant(options.body2, defaults.body2),
    }
}

fn resolve_variant(
    options: Option<crate::theme::TypeVariantOptions>,
    defaults: crate::tokens::TypeVariant,
) -> crate::tokens::TypeVariant {
    let Some(options) = options else {
        return defaults;
    };
    crate::tokens::TypeVariant {
        font_size: options.font_size.unwrap_or(defaults.font_size),
        font_weight: options.font_weight.unwrap_or(defaults.font_weight),
        line_height: options.line_height.unwrap_or(defaults.line_height),
        letter_spacing: options.letter_spacing.or(defaults.letter_spacing),
    }
}

fn resolve_breakpoints(options: Option<crate::theme::BreakpointsOptions>) -> Breakpoints {
    let mut breakpoints = Breakpoints::default();
    let Some(options) = options else {
        return breakpoints;
    };
    if let Some(values) = options.values {
        breakpoints.values.xs = values.xs.unwrap_or(breakpoints.values.xs);
        breakpoints.values.sm = values.sm.unwrap_or(breakpoints.values.sm);
        breakpoints.values.md = values.md.unwrap_or(breakpoints.values.md);
        breakpoints.values.lg = values.lg.unwrap_or(breakpoints.values.lg);
        breakpoints.values.xl = values.xl.unwrap_or(breakpoints.values.xl);
    }
    if let Some(unit) = options.unit {
        breakpoints.unit = unit;
    }
    breakpoints
}

fn resolve_shadows(options: Option<crate::theme::ShadowsOptions>) -> Shadows {
    let defaults = Shadows::default();
    let Some(options) = options else {
        return defaults;
    };
    Shadows {
        xs: options.xs.unwrap_or(defaults.xs),
        sm: options.sm.unwrap_or(defaults.sm),
        md: options.md.unwrap_or(defaults.md),
        lg: options.lg.unwrap_or(defaults.lg),
        xl: options.xl.unwrap_or(defaults.xl),
        inset: options.inset.unwrap_or(defaults.inset),
    }
}

fn resolve_transitions(options: Option<crate::theme::TransitionsOptions>) -> Transitions {
    let mut transitions = Transitions::default();
    let Some(options) = options else {
        return transitions;
    };
    if let Some(duration) = options.duration {
        let base = &mut transitions.duration;
        base.shortest = duration.shortest.unwrap_or(base.shortest);
        base.shorter = duration.shorter.unwrap_or(base.shorter);
        base.short = duration.short.unwrap_or(base.short);
        base.standard = duration.standard.unwrap_or(base.standard);
        base.complex = duration.complex.unwrap_or(base.complex);
        base.entering_screen = duration.entering_screen.unwrap_or(base.entering_screen);
        base.leaving_screen = duration.leaving_screen.unwrap_or(base.leaving_screen);
    }
    if let Some(easing) = options.easing {
        let base = &mut transitions.easing;
        if let Some(ease_in_out) = easing.ease_in_out {
            base.ease_in_out = ease_in_out;
        }
        if let Some(ease_out) = easing.ease_out {
            base.ease_out = ease_out;
        }
        if let Some(ease_in) = easing.ease_in {
            base.ease_in = ease_in;
        }
        if let Some(sharp) = easing.sharp {
            base.sharp = sharp;
        }
    }
    transitions
}

fn resolve_z_index(options: Option<crate::theme::ZIndexOptions>) -> ZIndex {
    let defaults = ZIndex::default();
    let Some(options) = options else {
        return defaults;
    };
    ZIndex {
        mobile_stepper: options.mobile_stepper.unwrap_or(defaults.mobile_stepper),
        speed_dial: options.speed_dial.unwrap_or(defaults.speed_dial),
        app_bar: options.app_bar.unwrap_or(defaults.app_bar),
        drawer: options.drawer.unwrap_or(defaults.drawer),
        modal: options.modal.unwrap_or(defaults.modal),
        snackbar: options.snackbar.unwrap_or(defaults.snackbar),
        tooltip: options.tooltip.unwrap_or(defaults.tooltip),
    }
}

fn resolve_border_radius(options: Option<crate::theme::BorderRadiusOptions>) -> BorderRadius {
    let defaults = BorderRadius::default();
    let Some(options) = options else {
        return defaults;
    };
    BorderRadius {
        base: options.base.unwrap_or(defaults.base),
        sm: options.sm.unwrap_or(defaults.sm),
        md: options.md.unwrap_or(defaults.md),
        lg: options.lg.unwrap_or(defaults.lg),
        xl: options.xl.unwrap_or(defaults.xl),
        xxl: options.xxl.unwrap_or(defaults.xxl),
        three_xl: options.three_xl.unwrap_or(defaults.three_xl),
        four_xl: options.four_xl.unwrap_or(defaults.four_xl),
        pill: options.pill.unwrap_or(defaults.pill),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_options_fill_every_default() {
        let theme = create_theme(ThemeOptions::default());
        assert_eq!(theme.name, "Custom Theme");
        assert_eq!(theme.version, "1.0.0");
        assert_eq!(theme.status, ThemeStatus::Experimental);
        assert_eq!(theme.palette.primary.main, "#7AFFD7");
        assert_eq!(theme.color, "#7AFFD7");
        assert_eq!(theme.spacing.px(2.0), "8px");
    }

    #[test]
    fn brand_color_derives_from_main() {
        let theme = create_theme(ThemeOptions {
            palette: Some(PaletteOptions {
                primary: Some(PaletteColorOptions::from_main("#336699")),
                ..PaletteOptions::default()
            }),
            ..ThemeOptions::default()
        });
        let primary = &theme.palette.primary;
        assert_eq!(primary.main, "#336699");
        assert_eq!(primary.light, lighten("#336699", 0.2));
        assert_eq!(primary.dark, darken("#336699", 0.2));
        assert_eq!(primary.contrast_text, "#FFFFFF");
    }

    #[test]
    fn brand_slot_without_main_goes_black() {
        let theme = create_theme(ThemeOptions {
            palette: Some(PaletteOptions {
                primary: Some(PaletteColorOptions {
                    light: Some("#eeeeee".to_string()),
                    ..PaletteColorOptions::default()
                }),
                ..PaletteOptions::default()
            }),
            ..ThemeOptions::default()
        });
        assert_eq!(theme.palette.primary.main, "#000000");
        assert_eq!(theme.palette.primary.light, "#eeeeee");
    }

    #[test]
    fn representative_color_prefers_explicit_value() {
        let theme = create_theme(ThemeOptions {
            color: Some("#ABCDEF".to_string()),
            ..ThemeOptions::default()
        });
        assert_eq!(theme.color, "#ABCDEF");
    }

    #[test]
    fn extend_layers_on_top_of_base() {
        let base = create_theme(ThemeOptions {
            name: Some("Base".to_string()),
            palette: Some(PaletteOptions {
                primary: Some(PaletteColorOptions::from_main("#112233")),
                ..PaletteOptions::default()
            }),
            ..ThemeOptions::default()
        });
        let extended = extend_theme(
            &base,
            ThemeOptions {
                name: Some("Extended".to_string()),
                ..ThemeOptions::default()
            },
        );
        assert_eq!(extended.name, "Extended");
        assert_eq!(extended.palette.primary.main, "#112233");
    }

    #[test]
    fn dark_variant_swaps_surfaces_and_keeps_brand() {
        let base = create_theme(ThemeOptions {
            name: Some("Ocean".to_string()),
            ..ThemeOptions::default()
        });
        let dark = create_dark_variant(&base);
        assert_eq!(dark.name, "Ocean Dark");
        assert_eq!(dark.palette.mode, Some(PaletteMode::Dark));
        assert_eq!(dark.palette.background.default, "#121212");
        assert_eq!(dark.palette.background.paper, "#1e1e1e");
        assert_eq!(dark.palette.text.primary, "#ffffff");
        assert_eq!(dark.palette.primary, base.palette.primary);
        assert_eq!(dark.typography, base.typography);
        assert_eq!(dark.shadows, base.shadows);
    }

    #[test]
    fn variants_split_into_light_and_dark() {
        let variants = create_theme_variants(ThemeOptions {
            name: Some("Ocean".to_string()),
            ..ThemeOptions::default()
        });
        assert_eq!(variants.light.name, "Ocean Light");
        assert_eq!(variants.light.supports_dark_mode, Some(false));
        assert_eq!(variants.dark.name, "Ocean Dark");
        assert_eq!(variants.dark.palette.mode, Some(PaletteMode::Dark));
        assert_eq!(variants.dark.palette.background.default, "#121212");
        assert_eq!(
            variants.light.palette.primary.main,
            variants.dark.palette.primary.main
        );
    }

    #[test]
    fn override_sets_nested_fields_by_path() {
        let base = create_theme(ThemeOptions::default());
        let overrides = IndexMap::from([
            ("palette.primary.main".to_string(), json!("#FF0000")),
            ("typography.fontSize".to_string(), json!(16.0)),
        ]);
        let theme = override_theme(&base, &overrides).unwrap();
        assert_eq!(theme.palette.primary.main, "#FF0000");
        assert_eq!(theme.typography.font_size, 16.0);
    }

    #[test]
    fn override_rejects_unknown_path() {
        let base = create_theme(ThemeOptions::default());
        let overrides = IndexMap::from([("palette.primry.main".to_string(), json!("#FF0000"))]);
        let err = override_theme(&base, &overrides).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidOverridePath(path) if path == "palette.primry.main"));
    }

    #[test]
    fn override_rejects_wrong_value_type() {
        let base = create_theme(ThemeOptions::default());
        let overrides = IndexMap::from([("typography.fontSize".to_string(), json!("sixteen"))]);
        assert!(override_theme(&base, &overrides).is_err());
    }
}
