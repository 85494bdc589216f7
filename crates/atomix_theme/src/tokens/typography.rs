//! Typography tokens

use serde::{Deserialize, Serialize};

/// One type style (heading or body variant).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeVariant {
    pub font_size: String,
    pub font_weight: u16,
    pub line_height: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub letter_spacing: Option<String>,
}

/// Variant keys, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeVariantKey {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Body1,
    Body2,
}

impl TypeVariantKey {
    /// Stable variant id used in CSS variable names.
    pub fn id(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Body1 => "body1",
            Self::Body2 => "body2",
        }
    }

    /// The six heading variants.
    pub fn headings() -> &'static [TypeVariantKey] {
        const HEADINGS: [TypeVariantKey; 6] = [
            TypeVariantKey::H1,
            TypeVariantKey::H2,
            TypeVariantKey::H3,
            TypeVariantKey::H4,
            TypeVariantKey::H5,
            TypeVariantKey::H6,
        ];
        &HEADINGS
    }
}

/// The typography section of a theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    /// Base font size in pixels.
    pub font_size: f64,
    pub font_weight_light: u16,
    pub font_weight_regular: u16,
    pub font_weight_medium: u16,
    pub font_weight_semi_bold: u16,
    pub font_weight_bold: u16,
    pub h1: TypeVariant,
    pub h2: TypeVariant,
    pub h3: TypeVariant,
    pub h4: TypeVariant,
    pub h5: TypeVariant,
    pub h6: TypeVariant,
    pub body1: TypeVariant,
    pub body2: TypeVariant,
}

impl Typography {
    /// Get a variant by key.
    pub fn variant(&self, key: TypeVariantKey) -> &TypeVariant {
        match key {
            TypeVariantKey::H1 => &self.h1,
            TypeVariantKey::H2 => &self.h2,
            TypeVariantKey::H3 => &self.h3,
            TypeVariantKey::H4 => &self.h4,
            TypeVariantKey::H5 => &self.h5,
            TypeVariantKey::H6 => &self.h6,
            TypeVariantKey::Body1 => &self.body1,
            TypeVariantKey::Body2 => &self.body2,
        }
    }
}

fn variant(size: &str, weight: u16, line_height: f64, spacing: Option<&str>) -> TypeVariant {
    TypeVariant {
        font_size: size.into(),
        font_weight: weight,
        line_height,
        letter_spacing: spacing.map(Into::into),
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: r#""Inter", "Roboto", "Helvetica", "Arial", sans-serif"#.into(),
            font_size: 14.0,
            font_weight_light: 300,
            font_weight_regular: 400,
            font_weight_medium: 500,
            font_weight_semi_bold: 600,
            font_weight_bold: 700,
            h1: variant("2.5rem", 700, 1.2, Some("-0.01562em")),
            h2: variant("2rem", 700, 1.3, Some("-0.00833em")),
            h3: variant("1.75rem", 600, 1.4, Some("0em")),
            h4: variant("1.5rem", 600, 1.4, Some("0.00735em")),
            h5: variant("1.25rem", 600, 1.5, Some("0em")),
            h6: variant("1rem", 600, 1.6, Some("0.0075em")),
            body1: variant("1rem", 400, 1.5, None),
            body2: variant("0.875rem", 400, 1.43, None),
        }
    }
}
