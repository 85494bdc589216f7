use atomix_theme::{
    create_dark_variant, create_theme, create_theme_variants, export_theme, extend_theme,
    import_theme, override_theme, quick_theme, supports_dark_mode, theme_metadata, theme_to_css,
    validate_theme, PaletteColorOptions, PaletteMode, PaletteOptions, ThemeError, ThemeOptions,
    ThemePreset, ThemeStatus,
};

use indexmap::IndexMap;
use serde_json::json;

fn brand_options(name: &str, primary: &str) -> ThemeOptions {
    ThemeOptions {
        name: Some(name.to_string()),
        palette: Some(PaletteOptions {
            primary: Some(PaletteColorOptions::from_main(primary)),
            ..PaletteOptions::default()
        }),
        ..ThemeOptions::default()
    }
}

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["classic", "minimal", "modern", "vibrant"]);
}

#[test]
fn presets_compose_into_valid_themes() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let validation = validate_theme(&theme.to_options());
        assert!(
            validation.valid,
            "Preset {preset:?} should compose into a valid theme: {:?}",
            validation.errors
        );
        assert_eq!(theme.name, preset.display_name());
    }
}

#[test]
fn composed_theme_derives_light_and_dark_shades() {
    let theme = quick_theme("Brand", "#1976D2", None);
    assert_eq!(theme.palette.primary.main, "#1976D2");
    assert_ne!(theme.palette.primary.light, theme.palette.primary.main);
    assert_ne!(theme.palette.primary.dark, theme.palette.primary.main);
    assert_eq!(theme.status, ThemeStatus::Experimental);
    assert_eq!(theme.version, "1.0.0");
}

#[test]
fn dark_variant_rewrites_surfaces_and_name() {
    let theme = quick_theme("Brand", "#1976D2", None);
    let dark = create_dark_variant(&theme);

    assert_eq!(dark.name, "Brand Dark");
    assert_eq!(dark.palette.mode, Some(PaletteMode::Dark));
    assert_eq!(dark.palette.background.default, "#121212");
    assert_eq!(dark.palette.text.primary, "#ffffff");
    assert_eq!(dark.palette.primary.main, theme.palette.primary.main);
    assert!(supports_dark_mode(&dark));
    assert!(!supports_dark_mode(&theme));
}

#[test]
fn variants_share_a_base_and_differ_in_mode() {
    let variants = create_theme_variants(brand_options("Brand", "#FF6B6B"));

    assert_eq!(variants.light.name, "Brand Light");
    assert_eq!(variants.dark.name, "Brand Dark");
    assert_eq!(variants.light.palette.primary.main, "#FF6B6B");
    assert_eq!(variants.dark.palette.primary.main, "#FF6B6B");
    assert_eq!(variants.dark.palette.mode, Some(PaletteMode::Dark));
    assert!(supports_dark_mode(&variants.dark));
}

#[test]
fn extend_keeps_the_base_where_not_overridden() {
    let base = ThemePreset::Classic.theme();
    let extended = extend_theme(&base, brand_options("Classic Remix", "#112233"));

    assert_eq!(extended.name, "Classic Remix");
    assert_eq!(extended.palette.primary.main, "#112233");
    assert_eq!(extended.palette.secondary.main, base.palette.secondary.main);
    assert_eq!(extended.typography.font_family, base.typography.font_family);
}

#[test]
fn dot_path_overrides_reach_nested_fields() {
    let base = ThemePreset::Modern.theme();
    let mut overrides = IndexMap::new();
    overrides.insert("palette.primary.main".to_string(), json!("#123456"));
    overrides.insert("typography.fontSize".to_string(), json!(16.0));

    let themed = override_theme(&base, &overrides).unwrap();
    assert_eq!(themed.palette.primary.main, "#123456");
    assert_eq!(themed.typography.font_size, 16.0);
    assert_eq!(themed.palette.secondary.main, base.palette.secondary.main);
}

#[test]
fn unknown_override_path_is_rejected() {
    let base = ThemePreset::Modern.theme();
    let mut overrides = IndexMap::new();
    overrides.insert("palette.primary.shade".to_string(), json!("#123456"));

    let err = override_theme(&base, &overrides).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidOverridePath(path) if path.contains("shade")));
}

#[test]
fn metadata_projection_reflects_the_composed_theme() {
    let theme = ThemePreset::Vibrant.theme();
    let metadata = theme_metadata(&theme);
    assert_eq!(metadata.name, "Vibrant");
    assert_eq!(metadata.color, "#FF6B6B");
    assert!(!metadata.supports_dark_mode);
}

#[test]
fn export_import_compose_round_trip() {
    let theme = ThemePreset::Classic.theme();
    let options = import_theme(&export_theme(&theme)).unwrap();
    let reimported = create_theme(options);

    assert_eq!(reimported.name, theme.name);
    assert_eq!(reimported.palette, theme.palette);
    assert_eq!(reimported.typography, theme.typography);
    assert_eq!(reimported.border_radius, theme.border_radius);
    assert_eq!(reimported.spacing.px(3.0), "12px");
}

#[test]
fn generated_css_targets_the_requested_selector() {
    let theme = quick_theme("Brand", "#1976D2", Some("#DC004E"));
    let css = theme_to_css(&theme, "[data-theme='brand']");

    assert!(css.starts_with("[data-theme='brand'] {"));
    assert!(css.contains("--atomix-primary: #1976D2;"));
    assert!(css.contains("--atomix-secondary: #DC004E;"));
    assert!(css.contains("--atomix-breakpoint-md: 960px;"));
}
