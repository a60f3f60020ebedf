//! Shared integration test helpers for vidkeys.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{page_with_video, press, TestClock};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use std::time::{Duration, Instant};
use vidkeys::gesture::WheelInput;
use vidkeys::sim::{SimFrame, SimVideo, SimulatedPage};
use vidkeys::page::FrameInfo;
use vidkeys_keybindings::KeyInput;

/// A page titled "Movie" with one video.
pub fn page_with_video(current_time: f64, duration: f64, rate: f64) -> SimulatedPage {
    SimulatedPage::new("Movie").with_video(SimVideo::new(current_time, duration, rate))
}

/// A page with no media at all.
pub fn empty_page() -> SimulatedPage {
    SimulatedPage::new("Article")
}

pub fn frame(id: Option<&str>, src: &str) -> SimFrame {
    SimFrame {
        info: FrameInfo {
            id: id.map(str::to_string),
            src: src.to_string(),
        },
        ..Default::default()
    }
}

/// A keydown as a browser reports it.
pub fn press(key: &str, code: &str, ctrl: bool, alt: bool, shift: bool) -> KeyInput {
    KeyInput::from_dom(key, code).with_modifiers(ctrl, alt, shift)
}

pub fn shift_wheel(wheel_delta: f64) -> WheelInput {
    WheelInput {
        wheel_delta: Some(wheel_delta),
        shift: true,
        ..Default::default()
    }
}

pub fn ctrl_shift_wheel(wheel_delta: f64) -> WheelInput {
    WheelInput {
        ctrl: true,
        ..shift_wheel(wheel_delta)
    }
}

/// Deterministic clock for timer-driven behavior.
pub struct TestClock {
    start: Instant,
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn at(&self, ms: u64) -> Instant {
        self.start + Duration::from_millis(ms)
    }
}
