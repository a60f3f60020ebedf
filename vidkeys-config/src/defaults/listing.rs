//! Listing enrichment endpoint defaults.

pub fn listing_base_url() -> String {
    "https://www.olx.ua".to_string()
}

pub fn rating_api_base() -> String {
    "https://khonor.eu-sharedservices.olxcdn.com/api/olx/ua".to_string()
}

pub fn listing_referrer() -> String {
    "https://www.olx.ua/".to_string()
}

/// chrono format string for the seller's registration date.
pub fn listing_date_format() -> String {
    "%d.%m.%Y".to_string()
}
