//! Schema for the ad page's prerendered state.
//!
//! Only the fields the enrichment reads are modelled; everything else in
//! the payload is ignored. A payload missing any of these fields is rejected.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PrerenderedState {
    pub ad: AdEnvelope,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdEnvelope {
    pub ad: Ad,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ad {
    pub user: Seller,
}

/// The seller profile attached to an ad.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: u64,
    pub name: String,
    pub created: DateTime<FixedOffset>,
    #[serde(default)]
    pub is_online: bool,
    pub last_seen: DateTime<FixedOffset>,
}
