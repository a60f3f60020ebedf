//! HTTP fetching.
//!
//! [`Fetcher`] is the seam between the enrichment pipeline and the network;
//! [`UreqFetcher`] is the real implementation, tests supply canned pages.

use crate::error::ListingError;
use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

/// Fetch a URL as text. Implementations are shared across per-card tasks.
pub trait Fetcher: Sync {
    fn fetch_text(&self, url: &str, referrer: Option<&str>) -> Result<String, ListingError>;
}

/// Create a new HTTP agent configured with native-tls.
///
/// Uses the system's TLS library (Schannel on Windows, OpenSSL on Linux,
/// Security.framework on macOS) and its built-in root certificates.
pub fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .build()
        .into()
}

/// [`Fetcher`] backed by a `ureq` agent.
#[derive(Clone)]
pub struct UreqFetcher {
    agent: Agent,
}

impl UreqFetcher {
    pub fn new() -> Self {
        Self { agent: agent() }
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for UreqFetcher {
    fn fetch_text(&self, url: &str, referrer: Option<&str>) -> Result<String, ListingError> {
        let http_err = |e: ureq::Error| ListingError::Http {
            url: url.to_string(),
            message: e.to_string(),
        };

        let mut request = self
            .agent
            .get(url)
            .header("User-Agent", concat!("vidkeys/", env!("CARGO_PKG_VERSION")));
        if let Some(referrer) = referrer {
            request = request.header("Referer", referrer);
        }

        log::debug!("GET {}", url);
        let mut response = request.call().map_err(http_err)?;
        response.body_mut().read_to_string().map_err(http_err)
    }
}
