//! Atomix Theme Engine
//!
//! Design tokens, theme composition, and CSS custom-property generation
//! for the Atomix design system.
//!
//! # Overview
//!
//! The theme engine provides:
//! - **Design tokens**: Palette, typography, spacing, breakpoints, shadows,
//!   transitions, z-index, border radii
//! - **Composition**: Merge partial [`ThemeOptions`] into a complete
//!   [`Theme`], extend existing themes, derive dark variants
//! - **Validation**: Structural checks collected as data, never panics
//! - **CSS variables**: Flat `--atomix-*` custom properties with a
//!   replace-not-append style sink
//! - **Registry & manager**: Named theme store with aliases and an
//!   active-theme manager that owns the style slot
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use atomix_theme::{create_theme, theme_to_css, PaletteColorOptions, PaletteOptions, ThemeOptions};
//!
//! let theme = create_theme(ThemeOptions {
//!     name: Some("Brand".to_string()),
//!     palette: Some(PaletteOptions {
//!         primary: Some(PaletteColorOptions::from_main("#1976D2")),
//!         ..PaletteOptions::default()
//!     }),
//!     ..ThemeOptions::default()
//! });
//!
//! let css = theme_to_css(&theme, ":root");
//! ```
//!
//! # Architecture
//!
//! Everything flows one way: options merge into a composed [`Theme`], the
//! validator gates it, and the CSS generator renders it. Dark-variant
//! derivation branches off the composed theme without touching the forward
//! pipeline. The single stateful resource is the style slot behind
//! [`StyleSink`]; a theme switch is one atomic replace.
//!
//! # Themes
//!
//! Built-in starting points live in [`presets`]: `Minimal`, `Modern`,
//! `Classic`, and `Vibrant`, plus [`quick_theme`] for a name-and-colors
//! shortcut.

pub mod compose;
pub mod css;
pub mod error;
pub mod io;
pub mod manager;
pub mod metadata;
pub mod presets;
pub mod theme;
pub mod tokens;
pub mod validate;

// Re-export commonly used types
pub use compose::{
    create_dark_variant, create_theme, create_theme_variants, extend_theme, merge_theme_options,
    override_theme, ThemeVariants,
};
pub use css::{
    generate_css_variables, theme_to_css, CssOptions, MemorySink, NullSink, StyleSink,
};
pub use error::ThemeError;
pub use io::{export_theme, import_theme};
pub use manager::{ManagerOptions, ThemeChange, ThemeManager, ThemeRegistry};
pub use metadata::{supports_dark_mode, theme_metadata, ThemeMetadata};
pub use presets::{quick_theme, ThemePreset};
pub use theme::{
    A11y, PaletteColorOptions, PaletteOptions, Theme, ThemeOptions, ThemeStatus, TypographyOptions,
};
pub use tokens::*;
pub use validate::{
    is_valid_theme_name, validate_metadata, validate_theme, MetadataValidation, ThemeValidation,
};
