//! Error type for listing enrichment.

/// Why a single listing card could not be enriched.
///
/// Each card fails independently; one card's error never affects another.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("invalid listing URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("ad page has no #olx-init-config script")]
    MissingInitScript,

    #[error("init script does not assign __PRERENDERED_STATE__")]
    MissingState,

    #[error("malformed {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("API response from {url} has an empty body")]
    EmptyApiBody { url: String },

    #[error("invalid date format '{0}'")]
    DateFormat(String),

    #[error("enrichment task panicked")]
    TaskPanicked,
}

impl ListingError {
    pub(crate) fn json(context: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| ListingError::Json { context, source }
    }
}
