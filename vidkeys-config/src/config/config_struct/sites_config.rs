//! `SitesConfig`: where handlers are installed.

use serde::{Deserialize, Serialize};

/// Site gating and activation scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitesConfig {
    /// Hostname substrings on which the keyboard handler is not installed.
    /// The wheel handler is unaffected.
    #[serde(default = "crate::defaults::excluded_sites")]
    pub keyboard_excluded_sites: Vec<String>,

    /// URL patterns (trailing `*` matches any suffix) on which nothing is installed
    #[serde(default = "crate::defaults::excluded_urls")]
    pub excluded_urls: Vec<String>,

    /// Frame id skipped by `open_frame_in_new_tab`
    #[serde(default = "crate::defaults::excluded_frame_id")]
    pub excluded_frame_id: String,
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            keyboard_excluded_sites: crate::defaults::excluded_sites(),
            excluded_urls: crate::defaults::excluded_urls(),
            excluded_frame_id: crate::defaults::excluded_frame_id(),
        }
    }
}
