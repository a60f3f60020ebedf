//! `ListingConfig`: classifieds listing enrichment endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Origin that listing card hrefs are relative to
    #[serde(default = "crate::defaults::listing_base_url")]
    pub base_url: String,

    /// Base of the per-user rating/badge API (`{base}/user/{id}/score/rating`)
    #[serde(default = "crate::defaults::rating_api_base")]
    pub rating_api_base: String,

    /// Referer sent with API requests
    #[serde(default = "crate::defaults::listing_referrer")]
    pub referrer: String,

    /// chrono format for the seller registration date
    #[serde(default = "crate::defaults::listing_date_format")]
    pub date_format: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_url: crate::defaults::listing_base_url(),
            rating_api_base: crate::defaults::rating_api_base(),
            referrer: crate::defaults::listing_referrer(),
            date_format: crate::defaults::listing_date_format(),
        }
    }
}
