//! Theme value objects
//!
//! [`Theme`] is the complete, immutable configuration object. Its
//! all-optional companion [`ThemeOptions`] is what merging, validation,
//! and import operate on; [`crate::compose::create_theme`] turns options
//! into a theme by filling defaults.
//!
//! Merging is right-biased and typed over the closed set of theme
//! sections: section structs merge field-by-field, while scalars, lists,
//! and the spacing function are replaced wholesale by the later value.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tokens::*;

/// Lifecycle status of a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeStatus {
    Stable,
    Beta,
    Experimental,
    Deprecated,
}

impl ThemeStatus {
    /// Stable id for serialization and display.
    pub fn id(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Beta => "beta",
            Self::Experimental => "experimental",
            Self::Deprecated => "deprecated",
        }
    }
}

/// Accessibility hints attached to a theme.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct A11y {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modes: Option<Vec<String>>,
}

impl A11y {
    fn merge(base: Self, over: Self) -> Self {
        Self {
            contrast_target: over.contrast_target.or(base.contrast_target),
            modes: over.modes.or(base.modes),
        }
    }
}

/// The complete, immutable theme.
///
/// Constructed once via composition and treated as read-only thereafter;
/// derivation and merging always produce a new value.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author: Option<String>,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Vec<String>>,
    pub status: ThemeStatus,
    /// Representative color shown in theme pickers.
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub supports_dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub a11y: Option<A11y>,
    pub palette: Palette,
    pub typography: Typography,
    /// Not serialized; imported themes get the default resolver back.
    #[serde(skip, default)]
    pub spacing: Spacing,
    pub breakpoints: Breakpoints,
    pub shadows: Shadows,
    pub transitions: Transitions,
    pub z_index: ZIndex,
    pub border_radius: BorderRadius,
    #[serde(default)]
    pub custom: IndexMap<String, Value>,
}

impl Theme {
    /// Project this theme back into options, for extension and overrides.
    pub fn to_options(&self) -> ThemeOptions {
        ThemeOptions {
            name: Some(self.name.clone()),
            description: self.description.clone(),
            author: self.author.clone(),
            version: Some(self.version.clone()),
            tags: self.tags.clone(),
            status: Some(self.status),
            color: Some(self.color.clone()),
            supports_dark_mode: self.supports_dark_mode,
            a11y: self.a11y.clone(),
            palette: Some(PaletteOptions::from_palette(&self.palette)),
            typography: Some(TypographyOptions::from_typography(&self.typography)),
            spacing: Some(self.spacing.spec().clone()),
            breakpoints: Some(BreakpointsOptions::from_breakpoints(&self.breakpoints)),
            shadows: Some(ShadowsOptions::from_shadows(&self.shadows)),
            transitions: Some(TransitionsOptions::from_transitions(&self.transitions)),
            z_index: Some(ZIndexOptions::from_z_index(&self.z_index)),
            border_radius: Some(BorderRadiusOptions::from_border_radius(&self.border_radius)),
            custom: Some(self.custom.clone()),
        }
    }
}

/// Merge two optional sections, recursing when both sides are present.
pub(crate) fn merge_opt<T>(
    base: Option<T>,
    over: Option<T>,
    merge: impl FnOnce(T, T) -> T,
) -> Option<T> {
    match (base, over) {
        (Some(base), Some(over)) => Some(merge(base, over)),
        (base, over) => over.or(base),
    }
}

fn merge_json(base: Value, over: Value) -> Value {
    match (base, over) {
        (Value::Object(mut base), Value::Object(over)) => {
            for (key, value) in over {
                let merged = match base.remove(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => value,
                };
                base.insert(key, merged);
            }
            Value::Object(base)
        }
        (_, over) => over,
    }
}

fn merge_custom(
    mut base: IndexMap<String, Value>,
    over: IndexMap<String, Value>,
) -> IndexMap<String, Value> {
    for (key, value) in over {
        // Insert keeps the original position for existing keys, so merged
        // entries do not move to the end of the map.
        let merged = match base.get(&key) {
            Some(existing) => merge_json(existing.clone(), value),
            None => value,
        };
        base.insert(key, merged);
    }
    base
}

// ── Section options ─────────────────────────────────────────────────

/// Partial brand color.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaletteColorOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_text: Option<String>,
}

impl PaletteColorOptions {
    /// Options carrying only a main color; the rest is derived during
    /// composition.
    pub fn from_main(main: impl Into<String>) -> Self {
        Self {
            main: Some(main.into()),
            ..Self::default()
        }
    }

    fn from_color(color: &PaletteColor) -> Self {
        Self {
            main: Some(color.main.clone()),
            light: Some(color.light.clone()),
            dark: Some(color.dark.clone()),
            contrast_text: Some(color.contrast_text.clone()),
        }
    }

    fn merge(base: Self, over: Self) -> Self {
        Self {
            main: over.main.or(base.main),
            light: over.light.or(base.light),
            dark: over.dark.or(base.dark),
            contrast_text: over.contrast_text.or(base.contrast_text),
        }
    }
}

/// Partial surface colors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtle: Option<String>,
}

impl BackgroundOptions {
    fn from_background(background: &BackgroundPalette) -> Self {
        Self {
            default: Some(background.default.clone()),
            paper: Some(background.paper.clone()),
            subtle: Some(background.subtle.clone()),
        }
    }

    fn merge(base: Self, over: Self) -> Self {
        Self {
            default: over.default.or(base.default),
            paper: over.paper.or(base.paper),
            subtle: over.subtle.or(base.subtle),
        }
    }
}

/// Partial text colors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<String>,
}

impl TextOptions {
    fn from_text(text: &TextPalette) -> Self {
        Self {
            primary: Some(text.primary.clone()),
            secondary: Some(text.secondary.clone()),
            disabled: Some(text.disabled.clone()),
        }
    }

    fn merge(base: Self, over: Self) -> Self {
        Self {
            primary: over.primary.or(base.primary),
            secondary: over.secondary.or(base.secondary),
            disabled: over.disabled.or(base.disabled),
        }
    }
}

/// Partial palette.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<PaletteMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<PaletteColorOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<PaletteColorOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PaletteColorOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<PaletteColorOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<PaletteColorOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<PaletteColorOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextOptions>,
}

impl PaletteOptions {
    pub(crate) fn from_palette(palette: &Palette) -> Self {
        Self {
            mode: palette.mode,
            primary: Some(PaletteColorOptions::from_color(&palette.primary)),
            secondary: Some(PaletteColorOptions::from_color(&palette.secondary)),
            error: Some(PaletteColorOptions::from_color(&palette.error)),
            warning: Some(PaletteColorOptions::from_color(&palette.warning)),
            info: Some(PaletteColorOptions::from_color(&palette.info)),
            success: Some(PaletteColorOptions::from_color(&palette.success)),
            background: Some(BackgroundOptions::from_background(&palette.background)),
            text: Some(TextOptions::from_text(&palette.text)),
        }
    }

    pub(crate) fn merge(base: Self, over: Self) -> Self {
        Self {
            mode: over.mode.or(base.mode),
            primary: merge_opt(base.primary, over.primary, PaletteColorOptions::merge),
            secondary: merge_opt(base.secondary, over.secondary, PaletteColorOptions::merge),
            error: merge_opt(base.error, over.error, PaletteColorOptions::merge),
            warning: merge_opt(base.warning, over.warning, PaletteColorOptions::merge),
            info: merge_opt(base.info, over.info, PaletteColorOptions::merge),
            success: merge_opt(base.success, over.success, PaletteColorOptions::merge),
            background: merge_opt(base.background, over.background, BackgroundOptions::merge),
            text: merge_opt(base.text, over.text, TextOptions::merge),
        }
    }
}

/// Partial type variant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeVariantOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
}

impl TypeVariantOptions {
    fn from_variant(variant: &TypeVariant) -> Self {
        Self {
            font_size: Some(variant.font_size.clone()),
            font_weight: Some(variant.font_weight),
            line_height: Some(variant.line_height),
            letter_spacing: variant.letter_spacing.clone(),
        }
    }

    fn merge(base: Self, over: Self) -> Self {
        Self {
            font_size: over.font_size.or(base.font_size),
            font_weight: over.font_weight.or(base.font_weight),
            line_height: over.line_height.or(base.line_height),
            letter_spacing: over.letter_spacing.or(base.letter_spacing),
        }
    }
}

/// Partial typography.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight_light: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight_regular: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight_medium: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight_semi_bold: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight_bold: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1: Option<TypeVariantOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2: Option<TypeVariantOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h3: Option<TypeVariantOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h4: Option<TypeVariantOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h5: Option<TypeVariantOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h6: Option<TypeVariantOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body1: Option<TypeVariantOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body2: Option<TypeVariantOptions>,
}

impl TypographyOptions {
    pub(crate) fn from_typography(typography: &Typography) -> Self {
        Self {
            font_family: Some(typography.font_family.clone()),
            font_size: Some(typography.font_size),
            font_weight_light: Some(typography.font_weight_light),
            font_weight_regular: Some(typography.font_weight_regular),
            font_weight_medium: Some(typography.font_weight_medium),
            font_weight_semi_bold: Some(typography.font_weight_semi_bold),
            font_weight_bold: Some(typography.font_weight_bold),
            h1: Some(TypeVariantOptions::from_variant(&typography.h1)),
            h2: Some(TypeVariantOptions::from_variant(&typography.h2)),
            h3: Some(TypeVariantOptions::from_variant(&typography.h3)),
            h4: Some(TypeVariantOptions::from_variant(&typography.h4)),
            h5: Some(TypeVariantOptions::from_variant(&typography.h5)),
            h6: Some(TypeVariantOptions::from_variant(&typography.h6)),
            body1: Some(TypeVariantOptions::from_variant(&typography.body1)),
            body2: Some(TypeVariantOptions::from_variant(&typography.body2)),
        }
    }

    pub(crate) fn merge(base: Self, over: Self) -> Self {
        Self {
            font_family: over.font_family.or(base.font_family),
            font_size: over.font_size.or(base.font_size),
            font_weight_light: over.font_weight_light.or(base.font_weight_light),
            font_weight_regular: over.font_weight_regular.or(base.font_weight_regular),
            font_weight_medium: over.font_weight_medium.or(base.font_weight_medium),
            font_weight_semi_bold: over.font_weight_semi_bold.or(base.font_weight_semi_bold),
            font_weight_bold: over.font_weight_bold.or(base.font_weight_bold),
            h1: merge_opt(base.h1, over.h1, TypeVariantOptions::merge),
            h2: merge_opt(base.h2, over.h2, TypeVariantOptions::merge),
            h3: merge_opt(base.h3, over.h3, TypeVariantOptions::merge),
            h4: merge_opt(base.h4, over.h4, TypeVariantOptions::merge),
            h5: merge_opt(base.h5, over.h5, TypeVariantOptions::merge),
            h6: merge_opt(base.h6, over.h6, TypeVariantOptions::merge),
            body1: merge_opt(base.body1, over.body1, TypeVariantOptions::merge),
            body2: merge_opt(base.body2, over.body2, TypeVariantOptions::merge),
        }
    }
}

/// Partial breakpoint widths.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointValuesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<f64>,
}

impl BreakpointValuesOptions {
    fn from_values(values: &BreakpointValues) -> Self {
        Self {
            xs: Some(values.xs),
            sm: Some(values.sm),
            md: Some(values.md),
            lg: Some(values.lg),
            xl: Some(values.xl),
        }
    }

    fn merge(base: Self, over: Self) -> Self {
        Self {
            xs: over.xs.or(base.xs),
            sm: over.sm.or(base.sm),
            md: over.md.or(base.md),
            lg: over.lg.or(base.lg),
            xl: over.xl.or(base.xl),
        }
    }
}

/// Partial breakpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<BreakpointValuesOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl BreakpointsOptions {
    pub(crate) fn from_breakpoints(breakpoints: &Breakpoints) -> Self {
        Self {
            values: Some(BreakpointValuesOptions::from_values(&breakpoints.values)),
            unit: Some(breakpoints.unit.clone()),
        }
    }

    pub(crate) fn merge(base: Self, over: Self) -> Self {
        Self {
            values: merge_opt(base.values, over.values, BreakpointValuesOptions::merge),
            unit: over.unit.or(base.unit),
        }
    }
}

/// Partial shadows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inset: Option<String>,
}

impl ShadowsOptions {
    pub(crate) fn from_shadows(shadows: &Shadows) -> Self {
        Self {
            xs: Some(shadows.xs.clone()),
            sm: Some(shadows.sm.clone()),
            md: Some(shadows.md.clone()),
            lg: Some(shadows.lg.clone()),
            xl: Some(shadows.xl.clone()),
            inset: Some(shadows.inset.clone()),
        }
    }

    pub(crate) fn merge(base: Self, over: Self) -> Self {
        Self {
            xs: over.xs.or(base.xs),
            sm: over.sm.or(base.sm),
            md: over.md.or(base.md),
            lg: over.lg.or(base.lg),
            xl: over.xl.or(base.xl),
            inset: over.inset.or(base.inset),
        }
    }
}

/// Partial transition durations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitionDurationsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shorter: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complex: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entering_screen: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaving_screen: Option<u32>,
}

impl TransitionDurationsOptions {
    fn from_durations(duration: &TransitionDurations) -> Self {
        Self {
            shortest: Some(duration.shortest),
            shorter: Some(duration.shorter),
            short: Some(duration.short),
            standard: Some(duration.standard),
            complex: Some(duration.complex),
            entering_screen: Some(duration.entering_screen),
            leaving_screen: Some(duration.leaving_screen),
        }
    }

    fn merge(base: Self, over: Self) -> Self {
        Self {
            shortest: over.shortest.or(base.shortest),
            shorter: over.shorter.or(base.shorter),
            short: over.short.or(base.short),
            standard: over.standard.or(base.standard),
            complex: over.complex.or(base.complex),
            entering_screen: over.entering_screen.or(base.entering_screen),
            leaving_screen: over.leaving_screen.or(base.leaving_screen),
        }
    }
}

/// Partial easing curves.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitionEasingsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease_in_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharp: Option<String>,
}

impl TransitionEasingsOptions {
    fn from_easings(easing: &TransitionEasings) -> Self {
        Self {
            ease_in_out: Some(easing.ease_in_out.clone()),
            ease_out: Some(easing.ease_out.clone()),
            ease_in: Some(easing.ease_in.clone()),
            sharp: Some(easing.sharp.clone()),
        }
    }

    fn merge(base: Self, over: Self) -> Self {
        Self {
            ease_in_out: over.ease_in_out.or(base.ease_in_out),
            ease_out: over.ease_out.or(base.ease_out),
            ease_in: over.ease_in.or(base.ease_in),
            sharp: over.sharp.or(base.sharp),
        }
    }
}

/// Partial transitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<TransitionDurationsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<TransitionEasingsOptions>,
}

impl TransitionsOptions {
    pub(crate) fn from_transitions(transitions: &Transitions) -> Self {
        Self {
            duration: Some(TransitionDurationsOptions::from_durations(
                &transitions.duration,
            )),
            easing: Some(TransitionEasingsOptions::from_easings(&transitions.easing)),
        }
    }

    pub(crate) fn merge(base: Self, over: Self) -> Self {
        Self {
            duration: merge_opt(base.duration, over.duration, TransitionDurationsOptions::merge),
            easing: merge_opt(base.easing, over.easing, TransitionEasingsOptions::merge),
        }
    }
}

/// Partial z-index tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZIndexOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_stepper: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_dial: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_bar: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawer: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snackbar: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<i32>,
}

impl ZIndexOptions {
    pub(crate) fn from_z_index(z_index: &ZIndex) -> Self {
        Self {
            mobile_stepper: Some(z_index.mobile_stepper),
            speed_dial: Some(z_index.speed_dial),
            app_bar: Some(z_index.app_bar),
            drawer: Some(z_index.drawer),
            modal: Some(z_index.modal),
            snackbar: Some(z_index.snackbar),
            tooltip: Some(z_index.tooltip),
        }
    }

    pub(crate) fn merge(base: Self, over: Self) -> Self {
        Self {
            mobile_stepper: over.mobile_stepper.or(base.mobile_stepper),
            speed_dial: over.speed_dial.or(base.speed_dial),
            app_bar: over.app_bar.or(base.app_bar),
            drawer: over.drawer.or(base.drawer),
            modal: over.modal.or(base.modal),
            snackbar: over.snackbar.or(base.snackbar),
            tooltip: over.tooltip.or(base.tooltip),
        }
    }
}

/// Partial border radii.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderRadiusOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xxl: Option<String>,
    #[serde(rename = "3xl", skip_serializing_if = "Option::is_none")]
    pub three_xl: Option<String>,
    #[serde(rename = "4xl", skip_serializing_if = "Option::is_none")]
    pub four_xl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pill: Option<String>,
}

impl BorderRadiusOptions {
    pub(crate) fn from_border_radius(radius: &BorderRadius) -> Self {
        Self {
            base: Some(radius.base.clone()),
            sm: Some(radius.sm.clone()),
            md: Some(radius.md.clone()),
            lg: Some(radius.lg.clone()),
            xl: Some(radius.xl.clone()),
            xxl: Some(radius.xxl.clone()),
            three_xl: Some(radius.three_xl.clone()),
            four_xl: Some(radius.four_xl.clone()),
            pill: Some(radius.pill.clone()),
        }
    }

    pub(crate) fn merge(base: Self, over: Self) -> Self {
        Self {
            base: over.base.or(base.base),
            sm: over.sm.or(base.sm),
            md: over.md.or(base.md),
            lg: over.lg.or(base.lg),
            xl: over.xl.or(base.xl),
            xxl: over.xxl.or(base.xxl),
            three_xl: over.three_xl.or(base.three_xl),
            four_xl: over.four_xl.or(base.four_xl),
            pill: over.pill.or(base.pill),
        }
    }
}

/// Partial theme, the unit of merging, validation, and import.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ThemeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a11y: Option<A11y>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<PaletteOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyOptions>,
    /// Spacing configuration; resolved by composition, never serialized.
    #[serde(skip)]
    pub spacing: Option<SpacingSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<BreakpointsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<ShadowsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<TransitionsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<ZIndexOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadiusOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<IndexMap<String, Value>>,
}

impl ThemeOptions {
    /// Right-biased merge of two option sets.
    ///
    /// Sections merge field-by-field; scalars, tag lists, and the
    /// spacing function are replaced wholesale by `over`.
    pub fn merge(base: Self, over: Self) -> Self {
        Self {
            name: over.name.or(base.name),
            description: over.description.or(base.description),
            author: over.author.or(base.author),
            version: over.version.or(base.version),
            tags: over.tags.or(base.tags),
            status: over.status.or(base.status),
            color: over.color.or(base.color),
            supports_dark_mode: over.supports_dark_mode.or(base.supports_dark_mode),
            a11y: merge_opt(base.a11y, over.a11y, A11y::merge),
            palette: merge_opt(base.palette, over.palette, PaletteOptions::merge),
            typography: merge_opt(base.typography, over.typography, TypographyOptions::merge),
            spacing: over.spacing.or(base.spacing),
            breakpoints: merge_opt(base.breakpoints, over.breakpoints, BreakpointsOptions::merge),
            shadows: merge_opt(base.shadows, over.shadows, ShadowsOptions::merge),
            transitions: merge_opt(base.transitions, over.transitions, TransitionsOptions::merge),
            z_index: merge_opt(base.z_index, over.z_index, ZIndexOptions::merge),
            border_radius: merge_opt(
                base.border_radius,
                over.border_radius,
                BorderRadiusOptions::merge,
            ),
            custom: merge_opt(base.custom, over.custom, merge_custom),
        }
    }
}
