//! Core `Config` struct definition.
//!
//! # Sub-modules
//!
//! - [`wheel_config`]: [`WheelConfig`]: wheel gesture thresholds, steps and propagation
//! - [`playback_config`]: [`PlaybackConfig`]: keyboard speed/seek tuning and the rate floor
//! - [`feedback_config`]: [`FeedbackConfig`]: title speed indicator
//! - [`sites_config`]: [`SitesConfig`]: site gating and activation scope
//! - [`listing_config`]: [`ListingConfig`]: listing enrichment endpoints

mod feedback_config;
mod listing_config;
mod playback_config;
mod sites_config;
mod wheel_config;

pub use feedback_config::FeedbackConfig;
pub use listing_config::ListingConfig;
pub use playback_config::PlaybackConfig;
pub use sites_config::SitesConfig;
pub use wheel_config::WheelConfig;

use crate::types::{KeyBinding, LogLevel};
use serde::{Deserialize, Serialize};

/// Top-level configuration, stored as `config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ordered keybinding table; the first matching entry wins
    #[serde(default = "crate::defaults::keybindings")]
    pub keybindings: Vec<KeyBinding>,

    #[serde(default)]
    pub wheel: WheelConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,

    #[serde(default)]
    pub sites: SitesConfig,

    #[serde(default)]
    pub listing: ListingConfig,

    /// Debug log file verbosity
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keybindings: crate::defaults::keybindings(),
            wheel: WheelConfig::default(),
            playback: PlaybackConfig::default(),
            feedback: FeedbackConfig::default(),
            sites: SitesConfig::default(),
            listing: ListingConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }
}
