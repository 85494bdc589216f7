//! Palette tokens

use serde::{Deserialize, Serialize};

/// Light or dark color scheme marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    Light,
    Dark,
}

/// Brand color slot keys, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BrandColor {
    Primary,
    Secondary,
    Error,
    Warning,
    Info,
    Success,
}

impl BrandColor {
    /// Stable slot id used in CSS variable names.
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }

    /// Full slot list.
    pub fn all() -> &'static [BrandColor] {
        const SLOTS: [BrandColor; 6] = [
            BrandColor::Primary,
            BrandColor::Secondary,
            BrandColor::Error,
            BrandColor::Warning,
            BrandColor::Info,
            BrandColor::Success,
        ];
        &SLOTS
    }
}

/// A brand color with derived emphasis states.
///
/// Colors are kept as CSS strings; values the engine cannot parse as hex
/// (`rgba(...)`, `var(--...)`) stay opaque and flow through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    pub main: String,
    pub light: String,
    pub dark: String,
    pub contrast_text: String,
}

/// Surface colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundPalette {
    pub default: String,
    pub paper: String,
    pub subtle: String,
}

/// Text colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextPalette {
    pub primary: String,
    pub secondary: String,
    pub disabled: String,
}

/// The color-scheme section of a theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mode: Option<PaletteMode>,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub error: PaletteColor,
    pub warning: PaletteColor,
    pub info: PaletteColor,
    pub success: PaletteColor,
    pub background: BackgroundPalette,
    pub text: TextPalette,
}

impl Palette {
    /// Get a brand color by slot key.
    pub fn brand(&self, slot: BrandColor) -> &PaletteColor {
        match slot {
            BrandColor::Primary => &self.primary,
            BrandColor::Secondary => &self.secondary,
            BrandColor::Error => &self.error,
            BrandColor::Warning => &self.warning,
            BrandColor::Info => &self.info,
            BrandColor::Success => &self.success,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            mode: None,
            primary: PaletteColor {
                main: "#7AFFD7".into(),
                light: "#A3FFE5".into(),
                dark: "#00E6C3".into(),
                contrast_text: "#000000".into(),
            },
            secondary: PaletteColor {
                main: "#FF5733".into(),
                light: "#FF8A65".into(),
                dark: "#C62828".into(),
                contrast_text: "#FFFFFF".into(),
            },
            error: PaletteColor {
                main: "#F44336".into(),
                light: "#E57373".into(),
                dark: "#D32F2F".into(),
                contrast_text: "#FFFFFF".into(),
            },
            warning: PaletteColor {
                main: "#FF9800".into(),
                light: "#FFB74D".into(),
                dark: "#F57C00".into(),
                contrast_text: "#000000".into(),
            },
            info: PaletteColor {
                main: "#2196F3".into(),
                light: "#64B5F6".into(),
                dark: "#1976D2".into(),
                contrast_text: "#FFFFFF".into(),
            },
            success: PaletteColor {
                main: "#4CAF50".into(),
                light: "#81C784".into(),
                dark: "#388E3C".into(),
                contrast_text: "#FFFFFF".into(),
            },
            background: BackgroundPalette {
                default: "#FFFFFF".into(),
                paper: "#F5F5F5".into(),
                subtle: "#FAFAFA".into(),
            },
            text: TextPalette {
                primary: "rgba(0, 0, 0, 0.87)".into(),
                secondary: "rgba(0, 0, 0, 0.6)".into(),
                disabled: "rgba(0, 0, 0, 0.38)".into(),
            },
        }
    }
}
