//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on config fields.

mod listing;
mod misc;
mod playback;

// ── Keybindings & misc ─────────────────────────────────────────────────────
pub use misc::{bool_false, bool_true, excluded_frame_id, excluded_sites, excluded_urls, keybindings};

// ── Wheel gestures & playback ──────────────────────────────────────────────
pub use playback::{
    keyboard_min_rate, keyboard_speed_step, min_rate, seek_seconds_per_rate, title_flash_ms,
    wheel_delta_multiplier, wheel_seek_step_secs, wheel_speed_step, wheel_threshold,
};

// ── Listing enrichment ─────────────────────────────────────────────────────
pub use listing::{listing_base_url, listing_date_format, listing_referrer, rating_api_base};
