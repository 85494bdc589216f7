//! Channel transforms: lighten, darken, alpha, emphasize
//!
//! All transforms are fail-soft: input that does not parse as a 6-digit
//! hex color is returned unchanged.

use crate::contrast::luminance;
use crate::rgb::{hex_to_rgb, rgb_to_hex};

/// Amount used by [`emphasize`].
pub const DEFAULT_EMPHASIZE_AMOUNT: f64 = 0.2;

/// Move each channel toward 255 by `amount`.
pub fn lighten(hex: &str, amount: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };
    rgb_to_hex(
        f64::from(rgb.r) + (255.0 - f64::from(rgb.r)) * amount,
        f64::from(rgb.g) + (255.0 - f64::from(rgb.g)) * amount,
        f64::from(rgb.b) + (255.0 - f64::from(rgb.b)) * amount,
    )
}

/// Move each channel toward 0 by `amount`.
pub fn darken(hex: &str, amount: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };
    rgb_to_hex(
        f64::from(rgb.r) * (1.0 - amount),
        f64::from(rgb.g) * (1.0 - amount),
        f64::from(rgb.b) * (1.0 - amount),
    )
}

/// Format a hex color as `rgba(r, g, b, o)` with opacity clamped to
/// `[0, 1]`.
pub fn alpha(hex: &str, opacity: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };
    let opacity = opacity.clamp(0.0, 1.0);
    format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, opacity)
}

/// Darken light colors and lighten dark ones by `amount`.
///
/// Direction comes from relative luminance: above 0.5 darkens, otherwise
/// lightens.
pub fn emphasize_by(hex: &str, amount: f64) -> String {
    if luminance(hex) > 0.5 {
        darken(hex, amount)
    } else {
        lighten(hex, amount)
    }
}

/// [`emphasize_by`] at [`DEFAULT_EMPHASIZE_AMOUNT`].
pub fn emphasize(hex: &str) -> String {
    emphasize_by(hex, DEFAULT_EMPHASIZE_AMOUNT)
}
