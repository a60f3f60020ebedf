//! Wheel gesture accumulation.
//!
//! Wheel deltas arrive in small increments (one notch is 120 units on most
//! mice, trackpads send many tiny ones). The accumulator sums them and fires
//! once per full threshold, so one gesture yields one step regardless of
//! the input device.

/// Direction of a fired gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// `+1.0` or `-1.0`.
    pub fn signum(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Signed counter that fires and resets at `±threshold`.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureAccumulator {
    counter: f64,
    threshold: f64,
}

impl GestureAccumulator {
    pub fn new(threshold: f64) -> Self {
        Self {
            counter: 0.0,
            threshold,
        }
    }

    /// Add `delta`. Returns the direction and resets the counter once
    /// `|counter| >= threshold`, otherwise keeps the sum and returns `None`.
    pub fn accumulate(&mut self, delta: f64) -> Option<Direction> {
        self.counter += delta;
        if self.counter.abs() < self.threshold {
            return None;
        }

        let direction = if self.counter > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.counter = 0.0;
        Some(direction)
    }

    /// Accumulated, not yet fired, delta.
    pub fn value(&self) -> f64 {
        self.counter
    }
}

/// A wheel event, as delivered by the host page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelInput {
    /// Legacy `wheelDelta` (positive = away from the user), if the host has it
    pub wheel_delta: Option<f64>,
    /// Standard `deltaY` (positive = towards the user)
    pub delta_y: f64,
    pub ctrl: bool,
    pub shift: bool,
}

impl WheelInput {
    /// Signed delta in `wheelDelta` units.
    ///
    /// Uses `wheelDelta` when present and non-zero, else `-deltaY * multiplier`.
    pub fn delta(&self, multiplier: f64) -> f64 {
        match self.wheel_delta {
            Some(d) if d != 0.0 => d,
            _ => -self.delta_y * multiplier,
        }
    }
}
