//! Rating and delivery badge API responses.

use crate::error::ListingError;
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    body: Vec<Item<T>>,
}

#[derive(Debug, Deserialize)]
struct Item<T> {
    data: T,
}

/// `GET {api}/user/{id}/score/rating`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RatingData {
    pub score: f64,
}

/// `GET {api}/user/{id}/badge/delivery`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DeliveryData {
    pub amount: u64,
}

pub fn rating_url(api_base: &str, user_id: u64) -> String {
    format!("{}/user/{}/score/rating", api_base.trim_end_matches('/'), user_id)
}

pub fn delivery_url(api_base: &str, user_id: u64) -> String {
    format!("{}/user/{}/badge/delivery", api_base.trim_end_matches('/'), user_id)
}

/// Decode `body[0].data` from an API response.
pub fn first_data<T: DeserializeOwned>(
    url: &str,
    text: &str,
    context: &'static str,
) -> Result<T, ListingError> {
    let envelope: Envelope<T> = serde_json::from_str(text).map_err(ListingError::json(context))?;
    envelope
        .body
        .into_iter()
        .next()
        .map(|item| item.data)
        .ok_or_else(|| ListingError::EmptyApiBody {
            url: url.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            rating_url("https://api.example/olx/ua/", 42),
            "https://api.example/olx/ua/user/42/score/rating"
        );
        assert_eq!(
            delivery_url("https://api.example/olx/ua", 42),
            "https://api.example/olx/ua/user/42/badge/delivery"
        );
    }

    #[test]
    fn test_rating_first_item() {
        let text = r#"{"body":[{"data":{"score":4.7,"extra":1}},{"data":{"score":1.0}}]}"#;
        let rating: RatingData = first_data("u", text, "rating response").unwrap();
        assert_eq!(rating.score, 4.7);
    }

    #[test]
    fn test_delivery_amount() {
        let text = r#"{"body":[{"data":{"amount":12}}]}"#;
        let delivery: DeliveryData = first_data("u", text, "delivery response").unwrap();
        assert_eq!(delivery.amount, 12);
    }

    #[test]
    fn test_empty_body() {
        let err = first_data::<RatingData>("u", r#"{"body":[]}"#, "rating response").unwrap_err();
        assert!(matches!(err, ListingError::EmptyApiBody { .. }));
    }

    #[test]
    fn test_schema_mismatch() {
        let err = first_data::<RatingData>("u", r#"{"body":[{"data":{}}]}"#, "rating response")
            .unwrap_err();
        assert!(matches!(err, ListingError::Json { .. }));
    }
}
