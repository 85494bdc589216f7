//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a theme:
//! - Palette (brand, background, text colors)
//! - Typography (family, sizes, weights, variants)
//! - Spacing (the resolver attached to every theme)
//! - Breakpoints (named widths and media-query builders)
//! - Shadows, transitions, z-index, border radii

mod breakpoints;
mod palette;
mod radius;
mod shadows;
mod spacing;
mod transitions;
mod typography;
mod z_index;

pub use breakpoints::*;
pub use palette::*;
pub use radius::*;
pub use shadows::*;
pub use spacing::*;
pub use transitions::*;
pub use typography::*;
pub use z_index::*;
