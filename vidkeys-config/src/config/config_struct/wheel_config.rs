//! `WheelConfig`: Shift+wheel speed and Ctrl+Shift+wheel seek gestures.

use serde::{Deserialize, Serialize};

/// Settings for converting wheel movement into discrete speed/seek steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Accumulated delta magnitude that produces one step
    #[serde(default = "crate::defaults::wheel_threshold")]
    pub threshold: f64,

    /// Multiplier for `deltaY` when `wheelDelta` is unavailable
    #[serde(default = "crate::defaults::wheel_delta_multiplier")]
    pub delta_multiplier: f64,

    /// Seconds moved per seek step
    #[serde(default = "crate::defaults::wheel_seek_step_secs")]
    pub seek_step_secs: f64,

    /// Playback rate change per speed step
    #[serde(default = "crate::defaults::wheel_speed_step")]
    pub speed_step: f64,

    /// Stop propagation of every seek-routed wheel event
    #[serde(default = "crate::defaults::bool_true")]
    pub suppress_seek_propagation: bool,

    /// Stop propagation of speed-routed wheel events that fire a step
    #[serde(default = "crate::defaults::bool_false")]
    pub suppress_speed_propagation: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            threshold: crate::defaults::wheel_threshold(),
            delta_multiplier: crate::defaults::wheel_delta_multiplier(),
            seek_step_secs: crate::defaults::wheel_seek_step_secs(),
            speed_step: crate::defaults::wheel_speed_step(),
            suppress_seek_propagation: crate::defaults::bool_true(),
            suppress_speed_propagation: crate::defaults::bool_false(),
        }
    }
}
