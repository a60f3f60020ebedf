//! `FeedbackConfig`: the transient `[ 1.5 ]` title indicator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Show the playback rate in the page title after a speed change
    #[serde(default = "crate::defaults::bool_true")]
    pub title_flash: bool,

    /// Milliseconds before the original title is restored
    #[serde(default = "crate::defaults::title_flash_ms")]
    pub title_flash_ms: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            title_flash: crate::defaults::bool_true(),
            title_flash_ms: crate::defaults::title_flash_ms(),
        }
    }
}
