//! Per-card enrichment pipeline.
//!
//! Each card runs fetch ad page → extract seller → fetch rating → fetch
//! delivery on its own scoped thread. Cards are independent: there is no
//! concurrency limit, no ordering between cards, and one card's failure
//! leaves the others untouched.

use crate::api::{DeliveryData, RatingData, delivery_url, first_data, rating_url};
use crate::error::ListingError;
use crate::fetch::Fetcher;
use crate::page::extract_prerendered_state;
use crate::summary::SellerSummary;
use std::thread;
use url::Url;
use vidkeys_config::ListingConfig;

/// Result of enriching one listing card.
#[derive(Debug)]
pub struct EnrichedListing {
    pub href: String,
    pub result: Result<SellerSummary, ListingError>,
}

/// Enrich every card href concurrently. Results come back in input order.
pub fn enrich_listings<F: Fetcher>(
    fetcher: &F,
    config: &ListingConfig,
    hrefs: &[String],
) -> Vec<EnrichedListing> {
    thread::scope(|scope| {
        let handles: Vec<_> = hrefs
            .iter()
            .map(|href| scope.spawn(move || fetch_seller(fetcher, config, href)))
            .collect();

        handles
            .into_iter()
            .zip(hrefs)
            .map(|(handle, href)| {
                let result = handle.join().unwrap_or(Err(ListingError::TaskPanicked));
                if let Err(e) = &result {
                    log::warn!("Enrichment failed for {}: {}", href, e);
                }
                EnrichedListing {
                    href: href.clone(),
                    result,
                }
            })
            .collect()
    })
}

/// Fetch and assemble the seller summary for one card.
pub fn fetch_seller<F: Fetcher + ?Sized>(
    fetcher: &F,
    config: &ListingConfig,
    href: &str,
) -> Result<SellerSummary, ListingError> {
    let ad_url = Url::parse(&config.base_url)?.join(href)?;
    let html = fetcher.fetch_text(ad_url.as_str(), None)?;
    let seller = extract_prerendered_state(&html)?.ad.ad.user;

    let url = rating_url(&config.rating_api_base, seller.id);
    let text = fetcher.fetch_text(&url, Some(&config.referrer))?;
    let rating: RatingData = first_data(&url, &text, "rating response")?;

    let url = delivery_url(&config.rating_api_base, seller.id);
    let text = fetcher.fetch_text(&url, Some(&config.referrer))?;
    let delivery: DeliveryData = first_data(&url, &text, "delivery response")?;

    log::debug!(
        "Seller {} ({}): score={} delivery={}",
        seller.id,
        seller.name,
        rating.score,
        delivery.amount
    );

    Ok(SellerSummary {
        name: seller.name,
        created: seller.created,
        last_seen: seller.last_seen,
        online: seller.is_online,
        score: rating.score,
        delivery: delivery.amount,
    })
}
