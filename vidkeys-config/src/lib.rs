//! Configuration system for vidkeys.
//!
//! This crate provides configuration loading, saving, validation, and
//! default values for the page hotkey dispatcher and the listing
//! enrichment pipeline:
//!
//! - Ordered keybinding table
//! - Wheel gesture and keyboard playback tuning
//! - Title indicator settings
//! - Site gating and activation scope
//! - Listing enrichment endpoints

pub mod config;
pub mod defaults;
pub mod error;
mod types;

pub use config::{
    Config, FeedbackConfig, ListingConfig, PlaybackConfig, SitesConfig, WheelConfig,
    validation::RATE_FLOOR,
};
pub use error::ConfigError;
pub use types::{KeyBinding, LogLevel};
