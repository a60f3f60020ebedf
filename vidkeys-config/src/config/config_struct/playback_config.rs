//! `PlaybackConfig`: keyboard speed/seek tuning.

use serde::{Deserialize, Serialize};

/// Step sizes and floors for keyboard-driven playback changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Floor for every playback rate change; never below 0.1
    #[serde(default = "crate::defaults::min_rate")]
    pub min_rate: f64,

    /// Rate change for `speed_up` / `speed_down`
    #[serde(default = "crate::defaults::keyboard_speed_step")]
    pub keyboard_speed_step: f64,

    /// Floor applied by `speed_down`
    #[serde(default = "crate::defaults::keyboard_min_rate")]
    pub keyboard_min_rate: f64,

    /// `seek_forward` / `seek_backward` distance per unit of playback rate
    #[serde(default = "crate::defaults::seek_seconds_per_rate")]
    pub seek_seconds_per_rate: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            min_rate: crate::defaults::min_rate(),
            keyboard_speed_step: crate::defaults::keyboard_speed_step(),
            keyboard_min_rate: crate::defaults::keyboard_min_rate(),
            seek_seconds_per_rate: crate::defaults::seek_seconds_per_rate(),
        }
    }
}
