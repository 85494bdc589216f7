//! Atomix Color Math
//!
//! Pure color utilities backing the Atomix theme engine:
//!
//! - **Parsing**: 6-digit hex to [`Rgb`] and back
//! - **WCAG math**: relative luminance and contrast ratio
//! - **Transforms**: lighten, darken, alpha, emphasize
//!
//! # Fail-soft contract
//!
//! Theme palettes mix plain hex colors with values the engine cannot
//! parse (`rgba(...)` literals, `var(--...)` references). The transforms
//! in this crate therefore never fail: unparseable input is returned
//! unchanged, and [`luminance`] reports `0.0` for it. A single odd color
//! in a large theme degrades that one value instead of aborting CSS
//! generation.
//!
//! # Quick Start
//!
//! ```rust
//! use atomix_color::{contrast_text, lighten};
//!
//! let hover = lighten("#1976D2", 0.2);
//! let text = contrast_text("#1976D2");
//! assert_eq!(text, "#FFFFFF");
//! ```

mod contrast;
mod rgb;
mod transform;

pub use contrast::{
    contrast_ratio, contrast_text, contrast_text_with, luminance, DEFAULT_CONTRAST_THRESHOLD,
};
pub use rgb::{hex_to_rgb, rgb_to_hex, Rgb};
pub use transform::{alpha, darken, emphasize, emphasize_by, lighten, DEFAULT_EMPHASIZE_AMOUNT};
