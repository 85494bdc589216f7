//! Border radius tokens

use serde::{Deserialize, Serialize};

/// Corner radii as CSS lengths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub base: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    pub xxl: String,
    #[serde(rename = "3xl")]
    pub three_xl: String,
    #[serde(rename = "4xl")]
    pub four_xl: String,
    pub pill: String,
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            base: "0.5rem".into(),
            sm: "0.25rem".into(),
            md: "0.25rem".into(),
            lg: "0.625rem".into(),
            xl: "0.75rem".into(),
            xxl: "1rem".into(),
            three_xl: "1.5rem".into(),
            four_xl: "2rem".into(),
            pill: "50rem".into(),
        }
    }
}
