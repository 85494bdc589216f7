//! Transition tokens

use serde::{Deserialize, Serialize};

/// Durations in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionDurations {
    pub shortest: u32,
    pub shorter: u32,
    pub short: u32,
    pub standard: u32,
    pub complex: u32,
    pub entering_screen: u32,
    pub leaving_screen: u32,
}

impl Default for TransitionDurations {
    fn default() -> Self {
        Self {
            shortest: 150,
            shorter: 200,
            short: 250,
            standard: 300,
            complex: 375,
            entering_screen: 225,
            leaving_screen: 195,
        }
    }
}

/// Easing curves as CSS timing functions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionEasings {
    pub ease_in_out: String,
    pub ease_out: String,
    pub ease_in: String,
    pub sharp: String,
}

impl Default for TransitionEasings {
    fn default() -> Self {
        Self {
            ease_in_out: "cubic-bezier(0.4, 0, 0.2, 1)".into(),
            ease_out: "cubic-bezier(0.0, 0, 0.2, 1)".into(),
            ease_in: "cubic-bezier(0.4, 0, 1, 1)".into(),
            sharp: "cubic-bezier(0.4, 0, 0.6, 1)".into(),
        }
    }
}

/// The transitions section of a theme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transitions {
    pub duration: TransitionDurations,
    pub easing: TransitionEasings,
}
