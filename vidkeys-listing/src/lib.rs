//! Seller rating enrichment for classifieds listing pages.
//!
//! Given a search results page, finds each listing card, loads the ad page
//! behind it, reads the seller from the page's prerendered state, fetches
//! the seller's rating score and delivery count, and renders a one-line
//! summary per card.

pub mod api;
pub mod enrich;
pub mod error;
pub mod fetch;
pub mod page;
pub mod state;
pub mod summary;

pub use enrich::{EnrichedListing, enrich_listings, fetch_seller};
pub use error::ListingError;
pub use fetch::{Fetcher, UreqFetcher};
pub use page::{extract_prerendered_state, is_listing_page, listing_card_hrefs};
pub use state::{PrerenderedState, Seller};
pub use summary::{SellerSummary, relative_hours};
