//! Z-index tokens

use serde::{Deserialize, Serialize};

/// Stacking-order tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZIndex {
    pub mobile_stepper: i32,
    pub speed_dial: i32,
    pub app_bar: i32,
    pub drawer: i32,
    pub modal: i32,
    pub snackbar: i32,
    pub tooltip: i32,
}

impl Default for ZIndex {
    fn default() -> Self {
        Self {
            mobile_stepper: 1000,
            speed_dial: 1050,
            app_bar: 1020,
            drawer: 1070,
            modal: 1040,
            snackbar: 1080,
            tooltip: 1060,
        }
    }
}
