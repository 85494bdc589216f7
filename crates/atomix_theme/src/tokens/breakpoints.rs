//! Breakpoint tokens and media-query builders

use serde::{Deserialize, Serialize};

/// Named breakpoint keys, smallest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Stable key used in CSS variable names.
    pub fn id(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Full key list.
    pub fn all() -> &'static [Breakpoint] {
        const KEYS: [Breakpoint; 5] = [
            Breakpoint::Xs,
            Breakpoint::Sm,
            Breakpoint::Md,
            Breakpoint::Lg,
            Breakpoint::Xl,
        ];
        &KEYS
    }
}

/// Named breakpoint widths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakpointValues {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
}

impl Default for BreakpointValues {
    fn default() -> Self {
        Self {
            xs: 0.0,
            sm: 600.0,
            md: 960.0,
            lg: 1280.0,
            xl: 1920.0,
        }
    }
}

/// The breakpoints section of a theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub values: BreakpointValues,
    pub unit: String,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            values: BreakpointValues::default(),
            unit: "px".into(),
        }
    }
}

impl Breakpoints {
    /// Width of a named breakpoint.
    pub fn value(&self, key: Breakpoint) -> f64 {
        match key {
            Breakpoint::Xs => self.values.xs,
            Breakpoint::Sm => self.values.sm,
            Breakpoint::Md => self.values.md,
            Breakpoint::Lg => self.values.lg,
            Breakpoint::Xl => self.values.xl,
        }
    }

    /// Media query matching the breakpoint and everything wider.
    pub fn up(&self, key: Breakpoint) -> String {
        format!("@media (min-width:{}{})", self.value(key), self.unit)
    }

    /// Media query matching everything narrower than the breakpoint.
    ///
    /// The upper bound is nudged down by 0.05 so adjacent `up`/`down`
    /// ranges do not overlap at the boundary.
    pub fn down(&self, key: Breakpoint) -> String {
        format!("@media (max-width:{}{})", self.value(key) - 0.05, self.unit)
    }

    /// Media query matching widths between two breakpoints.
    pub fn between(&self, start: Breakpoint, end: Breakpoint) -> String {
        format!(
            "@media (min-width:{}{}) and (max-width:{}{})",
            self.value(start),
            self.unit,
            self.value(end) - 0.05,
            self.unit
        )
    }
}
