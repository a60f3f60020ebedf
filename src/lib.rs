//! Video hotkeys and wheel gestures for web pages.
//!
//! The dispatcher ([`hotkeys::VideoHotkeys`]) turns keyboard and wheel
//! events into playback changes on the page's videos. The page itself is
//! reached only through the capability traits in [`page`], so the same
//! logic runs against a browser host or the in-memory [`sim::SimulatedPage`].

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod actions;
pub mod cli;
pub mod debug;
pub mod feedback;
pub mod gesture;
pub mod hotkeys;
pub mod page;
pub mod pip;
pub mod playback;
pub mod replay;
pub mod sim;
pub mod site;

pub use actions::Action;
pub use hotkeys::{HotkeyError, KeyOutcome, VideoHotkeys, WheelGesture, WheelOutcome};
