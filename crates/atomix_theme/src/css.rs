//! CSS custom-property generation
//!
//! Turns a [`Theme`] into one flat rule block of `--{prefix}-*`
//! declarations. The flat names are the compatibility surface shared
//! with stylesheet consumers, so emission order and naming are kept
//! stable: variables come out in insertion order, and re-inserting a
//! key overwrites its value in place.
//!
//! Injection is modeled as a [`StyleSink`] resource holding at most one
//! live style slot per id; applying replaces the previous content.

use atomix_color::{alpha, darken, emphasize_by, hex_to_rgb, lighten};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::theme::Theme;
use crate::tokens::{BrandColor, Breakpoint, TypeVariantKey};

/// Default rule selector.
pub const DEFAULT_SELECTOR: &str = ":root";
/// Default variable prefix.
pub const DEFAULT_PREFIX: &str = "atomix";
/// Default style slot id.
pub const DEFAULT_STYLE_ID: &str = "atomix-theme-variables";

const FONT_MONOSPACE: &str =
    r#"SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace"#;

/// Fixed multiplier table behind the `--{prefix}-spacing-*` tokens.
const SPACING_STEPS: [(&str, f64); 36] = [
    ("0", 0.0),
    ("1", 1.0),
    ("px-6", 1.5),
    ("2", 2.0),
    ("px-10", 2.5),
    ("3", 3.0),
    ("px-14", 3.5),
    ("4", 4.0),
    ("5", 5.0),
    ("px-22", 5.5),
    ("6", 6.0),
    ("7", 7.0),
    ("px-30", 7.5),
    ("8", 8.0),
    ("9", 9.0),
    ("10", 10.0),
    ("11", 11.0),
    ("12", 12.0),
    ("14", 14.0),
    ("16", 16.0),
    ("20", 20.0),
    ("24", 24.0),
    ("28", 28.0),
    ("32", 32.0),
    ("36", 36.0),
    ("40", 40.0),
    ("44", 44.0),
    ("48", 48.0),
    ("52", 52.0),
    ("56", 56.0),
    ("60", 60.0),
    ("64", 64.0),
    ("72", 72.0),
    ("80", 80.0),
    ("90", 90.0),
    ("200", 200.0),
];

/// Generation options.
#[derive(Clone, Debug)]
pub struct CssOptions {
    pub selector: String,
    pub prefix: String,
    pub style_id: String,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            style_id: DEFAULT_STYLE_ID.to_string(),
        }
    }
}

/// Generate the full variable block for a theme.
pub fn generate_css_variables(theme: &Theme, options: &CssOptions) -> String {
    let vars = collect_variables(theme, &options.prefix);
    let lines = vars
        .iter()
        .map(|(key, value)| format!("  --{key}: {value};"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{} {{\n{}\n}}", options.selector, lines)
}

/// Generate the variable block under a custom selector, with default
/// prefix and style id.
pub fn theme_to_css(theme: &Theme, selector: &str) -> String {
    generate_css_variables(
        theme,
        &CssOptions {
            selector: selector.to_string(),
            ..CssOptions::default()
        },
    )
}

fn collect_variables(theme: &Theme, prefix: &str) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();
    palette_variables(&mut vars, theme, prefix);
    typography_variables(&mut vars, theme, prefix);
    shadow_variables(&mut vars, theme, prefix);
    transition_variables(&mut vars, theme, prefix);
    z_index_variables(&mut vars, theme, prefix);
    breakpoint_variables(&mut vars, theme, prefix);
    spacing_variables(&mut vars, theme, prefix);
    border_variables(&mut vars, theme, prefix);
    radius_variables(&mut vars, theme, prefix);
    focus_ring_variables(&mut vars, prefix);
    for (key, value) in &theme.custom {
        flatten_custom(&mut vars, format!("{prefix}-custom-{key}"), value);
    }
    vars
}

fn palette_variables(vars: &mut IndexMap<String, String>, theme: &Theme, prefix: &str) {
    let palette = &theme.palette;

    for slot in BrandColor::all() {
        let color = palette.brand(*slot);
        let key = slot.id();
        vars.insert(format!("{prefix}-{key}"), color.main.clone());
        if let Some(rgb) = hex_to_rgb(&color.main) {
            vars.insert(format!("{prefix}-{key}-rgb"), rgb.to_triplet());
        }
        color_scale(vars, &color.main, prefix, key);
        vars.insert(format!("{prefix}-{key}-hover"), color.dark.clone());
        vars.insert(
            format!("{prefix}-{key}-text-emphasis"),
            emphasize_by(&color.main, 0.15),
        );
        vars.insert(format!("{prefix}-{key}-bg-subtle"), alpha(&color.main, 0.1));
        vars.insert(
            format!("{prefix}-{key}-border-subtle"),
            alpha(&color.main, 0.2),
        );
    }

    color_scale(vars, &palette.text.primary, prefix, "gray");
    color_scale(vars, &palette.error.main, prefix, "red");
    color_scale(vars, &palette.success.main, prefix, "green");
    color_scale(vars, &palette.info.main, prefix, "blue");
    color_scale(vars, &palette.warning.main, prefix, "yellow");

    // Surface aliases. Re-inserted keys keep their original position,
    // so the subtle variants below replace the alpha forms emitted in
    // the brand loop.
    vars.insert(
        format!("{prefix}-body-bg"),
        palette.background.default.clone(),
    );
    vars.insert(
        format!("{prefix}-primary-bg-subtle"),
        palette.background.default.clone(),
    );
    vars.insert(
        format!("{prefix}-secondary-bg-subtle"),
        palette.background.paper.clone(),
    );
    vars.insert(
        format!("{prefix}-tertiary-bg-subtle"),
        palette.background.paper.clone(),
    );
    vars.insert(
        format!("{prefix}-invert-bg-subtle"),
        palette.background.subtle.clone(),
    );
    vars.insert(
        format!("{prefix}-brand-bg-subtle"),
        alpha(&palette.primary.main, 0.1),
    );

    vars.insert(format!("{prefix}-body-color"), palette.text.primary.clone());
    vars.insert(
        format!("{prefix}-primary-text-emphasis"),
        palette.text.primary.clone(),
    );
    vars.insert(
        format!("{prefix}-secondary-text-emphasis"),
        palette.text.secondary.clone(),
    );
    vars.insert(
        format!("{prefix}-tertiary-text-emphasis"),
        palette.text.secondary.clone(),
    );
    vars.insert(
        format!("{prefix}-disabled-text-emphasis"),
        palette.text.disabled.clone(),
    );
    vars.insert(
        format!("{prefix}-invert-text-emphasis"),
        palette.text.primary.clone(),
    );
    vars.insert(
        format!("{prefix}-brand-text-emphasis"),
        palette.primary.main.clone(),
    );
    vars.insert(
        format!("{prefix}-brand-border-subtle"),
        alpha(&palette.primary.main, 0.2),
    );

    vars.insert(
        format!("{prefix}-heading-color"),
        palette.text.primary.clone(),
    );

    vars.insert(format!("{prefix}-link-color"), palette.primary.main.clone());
    if let Some(rgb) = hex_to_rgb(&palette.primary.main) {
        vars.insert(format!("{prefix}-link-color-rgb"), rgb.to_triplet());
    }
    vars.insert(
        format!("{prefix}-link-hover-color"),
        palette.primary.dark.clone(),
    );
    if let Some(rgb) = hex_to_rgb(&palette.primary.dark) {
        vars.insert(format!("{prefix}-link-hover-color-rgb"), rgb.to_triplet());
    }
    vars.insert(format!("{prefix}-link-decoration"), "none".to_string());

    vars.insert(
        format!("{prefix}-border-color"),
        alpha(&palette.text.primary, 0.1),
    );
    vars.insert(
        format!("{prefix}-border-color-translucent"),
        alpha(&palette.text.primary, 0.15),
    );
    vars.insert(
        format!("{prefix}-focus-border-color"),
        palette.primary.main.clone(),
    );

    vars.insert(
        format!("{prefix}-form-valid-color"),
        palette.success.main.clone(),
    );
    vars.insert(
        format!("{prefix}-form-valid-border-color"),
        alpha(&palette.success.main, 0.3),
    );
    vars.insert(
        format!("{prefix}-form-invalid-color"),
        palette.error.main.clone(),
    );
    vars.insert(
        format!("{prefix}-form-invalid-border-color"),
        alpha(&palette.error.main, 0.3),
    );

    vars.insert(
        format!("{prefix}-highlight-bg"),
        alpha(&palette.warning.main, 0.2),
    );
    vars.insert(
        format!("{prefix}-code-color"),
        palette.text.secondary.clone(),
    );
}

/// Ten-step scale around a base color: 1-5 lightened, 6 the base,
/// 7-10 darkened. Skipped entirely when the base is not parseable hex.
fn color_scale(vars: &mut IndexMap<String, String>, base: &str, prefix: &str, name: &str) {
    if hex_to_rgb(base).is_none() {
        tracing::warn!(scale = name, color = base, "skipping scale for unparseable color");
        return;
    }
    for step in 1..=10u32 {
        let color = if step < 6 {
            lighten(base, f64::from(6 - step) / 5.0 * 0.8)
        } else if step == 6 {
            base.to_string()
        } else {
            darken(base, f64::from(step - 6) / 4.0 * 0.6)
        };
        vars.insert(format!("{prefix}-{name}-{step}"), color);
    }
}

fn typography_variables(vars: &mut IndexMap<String, String>, theme: &Theme, prefix: &str) {
    let typography = &theme.typography;

    vars.insert(
        format!("{prefix}-body-font-family"),
        typography.font_family.clone(),
    );
    vars.insert(
        format!("{prefix}-font-sans-serif"),
        typography.font_family.clone(),
    );
    vars.insert(
        format!("{prefix}-font-monospace"),
        FONT_MONOSPACE.to_string(),
    );

    let base = typography.font_size;
    vars.insert(format!("{prefix}-root-font-size"), format!("{base}px"));
    vars.insert(format!("{prefix}-body-font-size"), format!("{base}px"));
    vars.insert(
        format!("{prefix}-body-font-weight"),
        typography.font_weight_regular.to_string(),
    );

    vars.insert(
        format!("{prefix}-font-weight-light"),
        typography.font_weight_light.to_string(),
    );
    vars.insert(
        format!("{prefix}-font-weight-normal"),
        typography.font_weight_regular.to_string(),
    );
    vars.insert(
        format!("{prefix}-font-weight-medium"),
        typography.font_weight_medium.to_string(),
    );
    vars.insert(
        format!("{prefix}-font-weight-semibold"),
        typography.font_weight_semi_bold.to_string(),
    );
    vars.insert(
        format!("{prefix}-font-weight-bold"),
        typography.font_weight_bold.to_string(),
    );

    let line_height = typography.body1.line_height;
    vars.insert(
        format!("{prefix}-body-line-height"),
        line_height.to_string(),
    );
    vars.insert(
        format!("{prefix}-line-height-base"),
        line_height.to_string(),
    );
    vars.insert(format!("{prefix}-line-height-sm"), "1.43".to_string());
    vars.insert(format!("{prefix}-line-height-lg"), "1.56".to_string());

    for (name, factor) in [
        ("xs", 0.75),
        ("sm", 0.875),
        ("md", 1.0),
        ("lg", 1.125),
        ("xl", 1.5),
        ("2xl", 2.0),
    ] {
        vars.insert(
            format!("{prefix}-font-size-{name}"),
            format!("{}px", base * factor),
        );
    }

    for heading in TypeVariantKey::headings() {
        if let Some(spacing) = &typography.variant(*heading).letter_spacing {
            vars.insert(
                format!("{prefix}-letter-spacing-{}", heading.id()),
                spacing.clone(),
            );
        }
    }
}

fn shadow_variables(vars: &mut IndexMap<String, String>, theme: &Theme, prefix: &str) {
    let shadows = &theme.shadows;
    vars.insert(format!("{prefix}-box-shadow"), shadows.md.clone());
    vars.insert(format!("{prefix}-box-shadow-xs"), shadows.xs.clone());
    vars.insert(format!("{prefix}-box-shadow-sm"), shadows.sm.clone());
    vars.insert(format!("{prefix}-box-shadow-lg"), shadows.lg.clone());
    vars.insert(format!("{prefix}-box-shadow-xl"), shadows.xl.clone());
    vars.insert(format!("{prefix}-box-shadow-inset"), shadows.inset.clone());
}

fn transition_variables(vars: &mut IndexMap<String, String>, theme: &Theme, prefix: &str) {
    let transitions = &theme.transitions;
    let fast = seconds(transitions.duration.shortest);
    let base = seconds(transitions.duration.standard);
    let slow = seconds(transitions.duration.complex);
    let easing = transitions.easing.ease_in_out.clone();

    vars.insert(
        format!("{prefix}-transition-duration-fast"),
        format!("{fast}s"),
    );
    vars.insert(
        format!("{prefix}-transition-duration-base"),
        format!("{base}s"),
    );
    vars.insert(
        format!("{prefix}-transition-duration-slow"),
        format!("{slow}s"),
    );
    vars.insert(
        format!("{prefix}-transition-duration-slower"),
        "0.7s".to_string(),
    );

    vars.insert(format!("{prefix}-easing-base"), easing.clone());
    vars.insert(format!("{prefix}-easing-ease-in-out"), easing.clone());
    vars.insert(
        format!("{prefix}-easing-ease-out"),
        transitions.easing.ease_out.clone(),
    );
    vars.insert(
        format!("{prefix}-easing-ease-in"),
        transitions.easing.ease_in.clone(),
    );
    vars.insert(format!("{prefix}-easing-ease-linear"), "linear".to_string());

    vars.insert(
        format!("{prefix}-transition-fast"),
        format!("all {fast}s {easing}"),
    );
    vars.insert(
        format!("{prefix}-transition-base"),
        format!("all {base}s {easing}"),
    );
    vars.insert(
        format!("{prefix}-transition-slow"),
        format!("all {slow}s {easing}"),
    );
}

fn seconds(millis: u32) -> f64 {
    f64::from(millis) / 1000.0
}

fn z_index_variables(vars: &mut IndexMap<String, String>, theme: &Theme, prefix: &str) {
    let z_index = &theme.z_index;

    vars.insert(format!("{prefix}-z-n1"), "-1".to_string());
    for step in 0..=5 {
        vars.insert(format!("{prefix}-z-{step}"), step.to_string());
    }

    vars.insert(
        format!("{prefix}-z-dropdown"),
        z_index.mobile_stepper.to_string(),
    );
    vars.insert(format!("{prefix}-z-sticky"), z_index.app_bar.to_string());
    vars.insert(format!("{prefix}-z-fixed"), "1030".to_string());
    vars.insert(format!("{prefix}-z-modal"), z_index.modal.to_string());
    vars.insert(format!("{prefix}-z-popover"), z_index.speed_dial.to_string());
    vars.insert(format!("{prefix}-z-tooltip"), z_index.tooltip.to_string());
    vars.insert(format!("{prefix}-z-drawer"), z_index.drawer.to_string());
    vars.insert(format!("{prefix}-z-snackbar"), z_index.snackbar.to_string());
}

fn breakpoint_variables(vars: &mut IndexMap<String, String>, theme: &Theme, prefix: &str) {
    for key in Breakpoint::all() {
        vars.insert(
            format!("{prefix}-breakpoint-{}", key.id()),
            format!(
                "{}{}",
                theme.breakpoints.value(*key),
                theme.breakpoints.unit
            ),
        );
    }
}

fn spacing_variables(vars: &mut IndexMap<String, String>, theme: &Theme, prefix: &str) {
    for (name, multiplier) in SPACING_STEPS {
        let resolved = theme.spacing.px(multiplier);
        let value = match resolved.strip_suffix("px").and_then(|v| v.parse::<f64>().ok()) {
            Some(px) => format!("{}rem", px / 16.0),
            None => resolved,
        };
        vars.insert(format!("{prefix}-spacing-{name}"), value);
    }
}

fn border_variables(vars: &mut IndexMap<String, String>, theme: &Theme, prefix: &str) {
    vars.insert(format!("{prefix}-border-width"), "1px".to_string());
    vars.insert(format!("{prefix}-border-style"), "solid".to_string());
    vars.insert(
        format!("{prefix}-border-color"),
        alpha(&theme.palette.text.primary, 0.1),
    );
}

fn radius_variables(vars: &mut IndexMap<String, String>, theme: &Theme, prefix: &str) {
    let radius = &theme.border_radius;
    vars.insert(format!("{prefix}-border-radius"), radius.base.clone());
    vars.insert(format!("{prefix}-border-radius-sm"), radius.sm.clone());
    vars.insert(format!("{prefix}-border-radius-lg"), radius.lg.clone());
    vars.insert(format!("{prefix}-border-radius-xl"), radius.xl.clone());
    vars.insert(format!("{prefix}-border-radius-xxl"), radius.xxl.clone());
    // Legacy alias kept for stylesheets still on the old name.
    vars.insert(format!("{prefix}-border-radius-2xl"), radius.xxl.clone());
    vars.insert(
        format!("{prefix}-border-radius-3xl"),
        radius.three_xl.clone(),
    );
    vars.insert(format!("{prefix}-border-radius-4xl"), radius.four_xl.clone());
    vars.insert(format!("{prefix}-border-radius-pill"), radius.pill.clone());
}

fn focus_ring_variables(vars: &mut IndexMap<String, String>, prefix: &str) {
    vars.insert(format!("{prefix}-focus-ring-width"), "3px".to_string());
    vars.insert(format!("{prefix}-focus-ring-offset"), "2px".to_string());
    vars.insert(format!("{prefix}-focus-ring-opacity"), "0.25".to_string());
}

fn flatten_custom(vars: &mut IndexMap<String, String>, key: String, value: &Value) {
    match value {
        Value::Object(object) => {
            for (child, nested) in object {
                flatten_custom(vars, format!("{key}-{child}"), nested);
            }
        }
        Value::String(text) => {
            vars.insert(kebab_case(&key), text.clone());
        }
        Value::Number(number) => {
            vars.insert(kebab_case(&key), number.to_string());
        }
        _ => {}
    }
}

/// `camelCase` to `kebab-case`; a hyphen goes between a lowercase
/// letter and the uppercase one that follows it.
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for c in key.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            out.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        out.push(c.to_ascii_lowercase());
    }
    out
}

// ── Style sink ──────────────────────────────────────────────────────

/// A destination for generated style blocks.
///
/// A sink owns at most one live slot per id; applying the same id again
/// replaces the previous content instead of appending.
pub trait StyleSink {
    fn apply(&mut self, id: &str, css: &str);
    fn dispose(&mut self, id: &str);
}

/// In-memory sink for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySink {
    slots: FxHashMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of a slot.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.slots.get(id).map(String::as_str)
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl StyleSink for MemorySink {
    fn apply(&mut self, id: &str, css: &str) {
        self.slots.insert(id.to_string(), css.to_string());
    }

    fn dispose(&mut self, id: &str) {
        self.slots.remove(id);
    }
}

/// Sink that drops everything, for server environments.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl StyleSink for NullSink {
    fn apply(&mut self, _id: &str, _css: &str) {}

    fn dispose(&mut self, _id: &str) {}
}

/// Shared handle to a sink.
///
/// Lets a caller keep observing slot contents after handing the sink to a
/// [`crate::manager::ThemeManager`].
impl<S: StyleSink> StyleSink for std::rc::Rc<std::cell::RefCell<S>> {
    fn apply(&mut self, id: &str, css: &str) {
        self.borrow_mut().apply(id, css);
    }

    fn dispose(&mut self, id: &str) {
        self.borrow_mut().dispose(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::create_theme;
    use crate::theme::ThemeOptions;
    use serde_json::json;

    fn default_theme() -> Theme {
        create_theme(ThemeOptions::default())
    }

    #[test]
    fn block_uses_selector_and_prefix() {
        let css = theme_to_css(&default_theme(), ":root");
        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("\n}"));
        assert!(css.contains("--atomix-primary: #7AFFD7;"));
    }

    #[test]
    fn custom_selector_and_prefix_flow_through() {
        let css = generate_css_variables(
            &default_theme(),
            &CssOptions {
                selector: ".custom-theme".to_string(),
                prefix: "brand".to_string(),
                ..CssOptions::default()
            },
        );
        assert!(css.starts_with(".custom-theme {"));
        assert!(css.contains("--brand-primary:"));
        assert!(!css.contains("--atomix-"));
    }

    #[test]
    fn brand_colors_carry_scale_and_states() {
        let css = theme_to_css(&default_theme(), ":root");
        assert!(css.contains("--atomix-primary-rgb: 122, 255, 215;"));
        assert!(css.contains("--atomix-primary-6: #7AFFD7;"));
        assert!(css.contains("--atomix-primary-1:"));
        assert!(css.contains("--atomix-primary-10:"));
        assert!(css.contains("--atomix-primary-hover: #00E6C3;"));
        assert!(css.contains("--atomix-error-bg-subtle: rgba(244, 67, 54, 0.1);"));
    }

    #[test]
    fn surface_aliases_override_brand_subtle_forms() {
        let css = theme_to_css(&default_theme(), ":root");
        // Alias wins over the alpha form emitted in the brand loop.
        assert!(css.contains("--atomix-primary-bg-subtle: #FFFFFF;"));
        assert!(css.contains("--atomix-body-bg: #FFFFFF;"));
        assert!(css.contains("--atomix-body-color: rgba(0, 0, 0, 0.87);"));
    }

    #[test]
    fn gray_scale_skipped_for_unparseable_text_color() {
        // Default text primary is rgba(), which the scale cannot parse.
        let css = theme_to_css(&default_theme(), ":root");
        assert!(!css.contains("--atomix-gray-1:"));
        assert!(css.contains("--atomix-red-6: #F44336;"));
    }

    #[test]
    fn typography_ladder_scales_from_base_size() {
        let css = theme_to_css(&default_theme(), ":root");
        assert!(css.contains("--atomix-body-font-size: 14px;"));
        assert!(css.contains("--atomix-font-size-sm: 12.25px;"));
        assert!(css.contains("--atomix-font-size-2xl: 28px;"));
        assert!(css.contains("--atomix-font-weight-semibold: 600;"));
        assert!(css.contains("--atomix-letter-spacing-h1: -0.01562em;"));
    }

    #[test]
    fn transitions_convert_to_seconds() {
        let css = theme_to_css(&default_theme(), ":root");
        assert!(css.contains("--atomix-transition-duration-fast: 0.15s;"));
        assert!(css.contains("--atomix-transition-duration-slow: 0.375s;"));
        assert!(css.contains("--atomix-transition-duration-slower: 0.7s;"));
        assert!(css.contains(
            "--atomix-transition-base: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);"
        ));
    }

    #[test]
    fn z_index_and_breakpoints_are_emitted() {
        let css = theme_to_css(&default_theme(), ":root");
        assert!(css.contains("--atomix-z-fixed: 1030;"));
        assert!(css.contains("--atomix-z-modal: 1040;"));
        assert!(css.contains("--atomix-breakpoint-md: 960px;"));
    }

    #[test]
    fn spacing_steps_convert_to_rem() {
        let css = theme_to_css(&default_theme(), ":root");
        assert!(css.contains("--atomix-spacing-0: 0rem;"));
        assert!(css.contains("--atomix-spacing-1: 0.25rem;"));
        assert!(css.contains("--atomix-spacing-px-6: 0.375rem;"));
        assert!(css.contains("--atomix-spacing-200: 50rem;"));
    }

    #[test]
    fn radius_tokens_include_legacy_alias() {
        let css = theme_to_css(&default_theme(), ":root");
        assert!(css.contains("--atomix-border-radius: 0.5rem;"));
        assert!(css.contains("--atomix-border-radius-xxl: 1rem;"));
        assert!(css.contains("--atomix-border-radius-2xl: 1rem;"));
        assert!(css.contains("--atomix-border-radius-pill: 50rem;"));
    }

    #[test]
    fn custom_map_flattens_to_kebab_case() {
        let mut options = ThemeOptions::default();
        options.custom = Some(indexmap::IndexMap::from([
            ("brandAccent".to_string(), json!("#123456")),
            (
                "layout".to_string(),
                json!({"sidebarWidth": "240px", "gutter": 16}),
            ),
        ]));
        let css = theme_to_css(&create_theme(options), ":root");
        assert!(css.contains("--atomix-custom-brand-accent: #123456;"));
        assert!(css.contains("--atomix-custom-layout-sidebar-width: 240px;"));
        assert!(css.contains("--atomix-custom-layout-gutter: 16;"));
    }

    #[test]
    fn generation_is_deterministic() {
        let theme = default_theme();
        assert_eq!(theme_to_css(&theme, ":root"), theme_to_css(&theme, ":root"));
    }

    #[test]
    fn memory_sink_replaces_instead_of_appending() {
        let mut sink = MemorySink::new();
        sink.apply("slot", "a {}");
        sink.apply("slot", "b {}");
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.get("slot"), Some("b {}"));
        sink.dispose("slot");
        assert!(sink.is_empty());
    }
}
