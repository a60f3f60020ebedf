//! Listing and ad page extraction.
//!
//! The ad page embeds its state as a JavaScript string literal holding
//! JSON, assigned to `window.__PRERENDERED_STATE__` inside the
//! `#olx-init-config` script. The literal is decoded as a JSON string and
//! its contents parsed against [`PrerenderedState`]; nothing is evaluated.

use crate::error::ListingError;
use crate::state::PrerenderedState;
use regex::Regex;
use std::sync::OnceLock;

/// Marker present on search result pages.
const LISTING_COUNT_MARKER: &str = r#"data-testid="listing-count-msg""#;

/// Marker opening each listing card.
const CARD_MARKER: &str = r#"data-testid="l-card""#;

static INIT_SCRIPT_REGEX: OnceLock<Regex> = OnceLock::new();
static STATE_ASSIGNMENT_REGEX: OnceLock<Regex> = OnceLock::new();
static HREF_REGEX: OnceLock<Regex> = OnceLock::new();

fn init_script_regex() -> &'static Regex {
    INIT_SCRIPT_REGEX.get_or_init(|| {
        Regex::new(r#"(?is)<script\b[^>]*\bid\s*=\s*["']olx-init-config["'][^>]*>(.*?)</script>"#)
            .expect("Failed to compile init script regex")
    })
}

fn state_assignment_regex() -> &'static Regex {
    STATE_ASSIGNMENT_REGEX.get_or_init(|| {
        // window.__PRERENDERED_STATE__ = "..." or window["__PRERENDERED_STATE__"] = "..."
        Regex::new(
            r#"(?s)window(?:\.__PRERENDERED_STATE__|\[\s*["']__PRERENDERED_STATE__["']\s*\])\s*=\s*("(?:[^"\\]|\\.)*")"#,
        )
        .expect("Failed to compile state assignment regex")
    })
}

fn href_regex() -> &'static Regex {
    HREF_REGEX.get_or_init(|| {
        Regex::new(r#"<a\b[^>]*\bhref\s*=\s*"([^"]*)""#).expect("Failed to compile href regex")
    })
}

/// True when `html` is a search results page worth enriching.
pub fn is_listing_page(html: &str) -> bool {
    html.contains(LISTING_COUNT_MARKER)
}

/// The first anchor href inside each listing card, in document order.
///
/// Cards without an anchor are skipped.
pub fn listing_card_hrefs(html: &str) -> Vec<String> {
    let starts: Vec<usize> = html.match_indices(CARD_MARKER).map(|(i, _)| i).collect();

    starts
        .iter()
        .enumerate()
        .filter_map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(html.len());
            href_regex()
                .captures(&html[start..end])
                .map(|caps| caps[1].to_string())
        })
        .collect()
}

/// Extract and validate the prerendered state from an ad page.
pub fn extract_prerendered_state(html: &str) -> Result<PrerenderedState, ListingError> {
    let script = init_script_regex()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .ok_or(ListingError::MissingInitScript)?
        .as_str();

    let literal = state_assignment_regex()
        .captures(script)
        .and_then(|caps| caps.get(1))
        .ok_or(ListingError::MissingState)?
        .as_str();

    let json: String =
        serde_json::from_str(literal).map_err(ListingError::json("state string literal"))?;
    serde_json::from_str(&json).map_err(ListingError::json("prerendered state"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AD_PAGE: &str = r#"<html><head>
<script type="text/javascript" id="olx-init-config">
    window.__APP_CONFIG__ = {"x":1};
    window.__PRERENDERED_STATE__= "{\"ad\":{\"ad\":{\"id\":7,\"user\":{\"id\":1234,\"name\":\"Olena\",\"created\":\"2019-05-22T13:13:46+03:00\",\"isOnline\":true,\"lastSeen\":\"2024-03-01T10:00:00+02:00\"}}}}";
</script></head><body></body></html>"#;

    #[test]
    fn test_extract_state() {
        let state = extract_prerendered_state(AD_PAGE).unwrap();
        let user = state.ad.ad.user;
        assert_eq!(user.id, 1234);
        assert_eq!(user.name, "Olena");
        assert!(user.is_online);
        assert_eq!(user.created.to_rfc3339(), "2019-05-22T13:13:46+03:00");
    }

    #[test]
    fn test_bracket_assignment() {
        let html = r#"<script id='olx-init-config'>window["__PRERENDERED_STATE__"] = "{\"ad\":{\"ad\":{\"user\":{\"id\":1,\"name\":\"A\",\"created\":\"2020-01-01T00:00:00Z\",\"lastSeen\":\"2020-01-02T00:00:00Z\"}}}}";</script>"#;
        let state = extract_prerendered_state(html).unwrap();
        assert_eq!(state.ad.ad.user.id, 1);
        assert!(!state.ad.ad.user.is_online);
    }

    #[test]
    fn test_missing_script() {
        let err = extract_prerendered_state("<html></html>").unwrap_err();
        assert!(matches!(err, ListingError::MissingInitScript));
    }

    #[test]
    fn test_missing_assignment() {
        let html = r#"<script id="olx-init-config">window.__APP_CONFIG__ = {};</script>"#;
        let err = extract_prerendered_state(html).unwrap_err();
        assert!(matches!(err, ListingError::MissingState));
    }

    #[test]
    fn test_state_schema_violation() {
        let html = r#"<script id="olx-init-config">window.__PRERENDERED_STATE__ = "{\"ad\":{}}";</script>"#;
        let err = extract_prerendered_state(html).unwrap_err();
        assert!(matches!(
            err,
            ListingError::Json {
                context: "prerendered state",
                ..
            }
        ));
    }

    #[test]
    fn test_card_hrefs() {
        let html = r#"
<div data-testid="listing-count-msg">Found 3</div>
<div data-testid="l-card" id="1"><a class="x" href="/d/uk/obyavlenie/one.html">One</a><a href="/other">x</a></div>
<div data-testid="l-card" id="2"><span>no link</span></div>
<div data-testid="l-card" id="3"><a href="/d/uk/obyavlenie/three.html">Three</a></div>
"#;
        assert!(is_listing_page(html));
        assert_eq!(
            listing_card_hrefs(html),
            vec!["/d/uk/obyavlenie/one.html", "/d/uk/obyavlenie/three.html"]
        );
    }

    #[test]
    fn test_not_listing_page() {
        assert!(!is_listing_page("<div data-testid=\"l-card\"></div>"));
    }
}
