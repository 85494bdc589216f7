//! WCAG relative luminance and contrast ratio

use crate::rgb::hex_to_rgb;

/// Minimum contrast ratio used by [`contrast_text`] when picking between
/// white and black text.
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 3.0;

/// Relative luminance of a hex color per WCAG 2.1.
///
/// sRGB channels are linearized with the standard 0.03928 threshold and
/// 2.4 gamma, then weighted 0.2126 / 0.7152 / 0.0722. Returns a value in
/// `[0.0, 1.0]`; unparseable input yields `0.0`.
pub fn luminance(hex: &str) -> f64 {
    let Some(rgb) = hex_to_rgb(hex) else {
        return 0.0;
    };
    let r = linearize(f64::from(rgb.r) / 255.0);
    let g = linearize(f64::from(rgb.g) / 255.0);
    let b = linearize(f64::from(rgb.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG 2.1 contrast ratio between two colors, in `[1.0, 21.0]`.
///
/// `(lighter + 0.05) / (darker + 0.05)`; symmetric in its arguments and
/// `1.0` for two identical colors.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick white or black text for a background.
///
/// White is accepted first if it clears `threshold`, then black; when
/// neither clears it, whichever contrasts more wins, with ties going to
/// white.
pub fn contrast_text_with(background: &str, threshold: f64) -> &'static str {
    let with_white = contrast_ratio(background, "#ffffff");
    let with_black = contrast_ratio(background, "#000000");

    if with_white >= threshold {
        "#FFFFFF"
    } else if with_black >= threshold {
        "#000000"
    } else if with_white >= with_black {
        "#FFFFFF"
    } else {
        "#000000"
    }
}

/// [`contrast_text_with`] at [`DEFAULT_CONTRAST_THRESHOLD`].
pub fn contrast_text(background: &str) -> &'static str {
    contrast_text_with(background, DEFAULT_CONTRAST_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert_eq!(luminance("#000000"), 0.0);
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = luminance("#ffffff");
        assert!(approx_eq(lum, 1.0, 0.001), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green_dominates() {
        let lum = luminance("#00ff00");
        assert!(approx_eq(lum, 0.7152, 0.001), "Green luminance: {lum}");
    }

    #[test]
    fn luminance_invalid_input_is_zero() {
        assert_eq!(luminance("not-a-color"), 0.0);
        assert_eq!(luminance("var(--atomix-primary)"), 0.0);
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio("#000000", "#ffffff");
        assert!(approx_eq(ratio, 21.0, 0.1), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let ratio = contrast_ratio("#7affd7", "#7affd7");
        assert!(approx_eq(ratio, 1.0, 1e-9), "Same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio("#cc3348", "#191966");
        let ba = contrast_ratio("#191966", "#cc3348");
        assert!(approx_eq(ab, ba, 1e-9), "Asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn contrast_always_at_least_one() {
        let ratio = contrast_ratio("#445566", "#556677");
        assert!(ratio >= 1.0, "Contrast < 1: {ratio}");
    }

    // ── Contrast text ───────────────────────────────────────────────

    #[test]
    fn mid_gray_is_threshold_sensitive() {
        assert_eq!(contrast_text_with("#808080", 3.0), "#FFFFFF");
        assert_eq!(contrast_text_with("#808080", 4.0), "#000000");
    }

    #[test]
    fn dark_background_gets_white_text() {
        assert_eq!(contrast_text("#121212"), "#FFFFFF");
    }

    #[test]
    fn light_background_gets_black_text() {
        assert_eq!(contrast_text("#fafafa"), "#000000");
    }

    #[test]
    fn unparseable_background_counts_as_black() {
        assert_eq!(contrast_text("nonsense"), "#FFFFFF");
    }
}
