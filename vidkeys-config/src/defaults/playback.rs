//! Wheel gesture and playback tuning defaults.

/// Accumulated wheel delta needed for one discrete step.
pub fn wheel_threshold() -> f64 {
    120.0
}

/// Multiplier applied to `deltaY` when the event has no `wheelDelta`.
pub fn wheel_delta_multiplier() -> f64 {
    3.0
}

/// Seconds moved per Ctrl+Shift wheel step.
pub fn wheel_seek_step_secs() -> f64 {
    5.0
}

/// Playback rate change per Shift wheel step.
pub fn wheel_speed_step() -> f64 {
    0.1
}

/// Absolute floor for any playback rate.
pub fn min_rate() -> f64 {
    0.1
}

/// Playback rate change per Alt+Up / Alt+Down.
pub fn keyboard_speed_step() -> f64 {
    0.25
}

/// Floor applied by Alt+Down.
pub fn keyboard_min_rate() -> f64 {
    0.25
}

/// Shift+Left/Right seek distance, in seconds per unit of playback rate.
pub fn seek_seconds_per_rate() -> f64 {
    10.0
}

/// How long the speed indicator stays in the title.
pub fn title_flash_ms() -> u64 {
    200
}
