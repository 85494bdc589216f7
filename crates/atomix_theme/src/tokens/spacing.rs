//! Spacing resolver
//!
//! Spacing is configured declaratively and resolved once into a single
//! callable attached to the theme. It is not serialized; imported themes
//! come back with the default resolver.

use std::fmt;
use std::sync::Arc;

/// Caller-supplied spacing resolver.
pub type SpacingFn = Arc<dyn Fn(&[f64]) -> String + Send + Sync>;

/// Declarative spacing configuration.
#[derive(Clone)]
pub enum SpacingSpec {
    /// Pixel multiplier applied to every step.
    Scalar(f64),
    /// Explicit per-step pixel scale.
    Scale(Vec<f64>),
    /// Resolver used verbatim.
    Custom(SpacingFn),
}

impl Default for SpacingSpec {
    fn default() -> Self {
        Self::Scalar(4.0)
    }
}

impl fmt::Debug for SpacingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(multiplier) => f.debug_tuple("Scalar").field(multiplier).finish(),
            Self::Scale(scale) => f.debug_tuple("Scale").field(scale).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// The spacing function attached to a theme.
#[derive(Clone, Debug, Default)]
pub struct Spacing {
    spec: SpacingSpec,
}

impl Spacing {
    pub fn new(spec: SpacingSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &SpacingSpec {
        &self.spec
    }

    /// Resolve steps into a space-joined CSS length list.
    ///
    /// No steps resolves to `"0px"`. In scale mode, a step without a
    /// scale entry (out of bounds, negative, or fractional) falls back to
    /// the step itself in raw pixels.
    pub fn resolve(&self, steps: &[f64]) -> String {
        match &self.spec {
            SpacingSpec::Custom(resolver) => resolver(steps),
            SpacingSpec::Scalar(multiplier) => {
                if steps.is_empty() {
                    return "0px".to_string();
                }
                join_px(steps.iter().map(|step| step * multiplier))
            }
            SpacingSpec::Scale(scale) => {
                if steps.is_empty() {
                    return "0px".to_string();
                }
                join_px(steps.iter().map(|step| scale_entry(scale, *step)))
            }
        }
    }

    /// Single-step convenience.
    pub fn px(&self, step: f64) -> String {
        self.resolve(&[step])
    }
}

fn scale_entry(scale: &[f64], step: f64) -> f64 {
    if step >= 0.0 && step.fract() == 0.0 && (step as usize) < scale.len() {
        scale[step as usize]
    } else {
        step
    }
}

fn join_px(values: impl Iterator<Item = f64>) -> String {
    values
        .map(|value| format!("{value}px"))
        .collect::<Vec<_>>()
        .join(" ")
}
