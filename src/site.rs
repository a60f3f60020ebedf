//! Where the handlers are installed.
//!
//! Two independent gates:
//!
//! - URL exclusions disable everything on matching pages. A pattern ending
//!   in `*` matches by prefix, any other pattern must match exactly.
//! - Excluded sites are hostname substrings that disable the keyboard
//!   handler only. The wheel handler stays installed.

use url::Url;
use vidkeys_config::SitesConfig;

/// Which handlers a page gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Installation {
    pub wheel: bool,
    pub keyboard: bool,
}

impl Installation {
    pub const NONE: Installation = Installation {
        wheel: false,
        keyboard: false,
    };
}

/// Site gating rules from config.
#[derive(Debug, Clone)]
pub struct SiteGate {
    keyboard_excluded_sites: Vec<String>,
    excluded_urls: Vec<String>,
}

impl SiteGate {
    pub fn from_config(sites: &SitesConfig) -> Self {
        Self {
            keyboard_excluded_sites: sites.keyboard_excluded_sites.clone(),
            excluded_urls: sites.excluded_urls.clone(),
        }
    }

    /// True when the whole script stays off for `url`.
    pub fn is_url_excluded(&self, url: &str) -> bool {
        self.excluded_urls
            .iter()
            .any(|pattern| match pattern.strip_suffix('*') {
                Some(prefix) => url.starts_with(prefix),
                None => url == pattern,
            })
    }

    /// True when the keyboard handler may be installed on `url`.
    ///
    /// URLs without a host (or that fail to parse) are never excluded.
    pub fn keyboard_allowed(&self, url: &str) -> bool {
        let host = match Url::parse(url) {
            Ok(parsed) => parsed.host_str().unwrap_or_default().to_string(),
            Err(e) => {
                log::debug!("Cannot parse page URL '{}': {}", url, e);
                return true;
            }
        };
        !self
            .keyboard_excluded_sites
            .iter()
            .any(|site| host.contains(site.as_str()))
    }

    pub fn installation(&self, url: &str) -> Installation {
        if self.is_url_excluded(url) {
            log::info!("Page {} is excluded; no handlers installed", url);
            return Installation::NONE;
        }
        let keyboard = self.keyboard_allowed(url);
        if !keyboard {
            log::info!("Keyboard hotkeys disabled on {}", url);
        }
        Installation {
            wheel: true,
            keyboard,
        }
    }
}
