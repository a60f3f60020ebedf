//! One-line seller summary rendered into each listing card.

use crate::error::ListingError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Utc};

/// Everything shown for one seller.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerSummary {
    pub name: String,
    pub created: DateTime<FixedOffset>,
    pub last_seen: DateTime<FixedOffset>,
    pub online: bool,
    pub score: f64,
    pub delivery: u64,
}

impl SellerSummary {
    /// `📅{created} | 🕑{last seen} | {name} - 🚚{delivery} ⭐{score} {status}`
    ///
    /// Fails with [`ListingError::DateFormat`] when `date_format` has an
    /// unknown specifier.
    pub fn render(&self, now: DateTime<Utc>, date_format: &str) -> Result<String, ListingError> {
        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ListingError::DateFormat(date_format.to_string()));
        }

        let status = if self.online { "🟢" } else { "🔴" };
        let hours = (now - self.last_seen.with_timezone(&Utc))
            .num_milliseconds()
            .div_euclid(3_600_000);

        Ok(format!(
            "📅{} | 🕑{} | {} - 🚚{} ⭐{} {}",
            self.created.format(date_format),
            relative_hours(-hours),
            self.name,
            self.delivery,
            self.score,
            status
        ))
    }
}

/// English relative time in whole hours; negative is the past.
///
/// Mirrors `Intl.RelativeTimeFormat("en", { numeric: "auto" })` for the
/// hour unit.
pub fn relative_hours(offset: i64) -> String {
    match offset {
        0 => "this hour".to_string(),
        1 => "in 1 hour".to_string(),
        -1 => "1 hour ago".to_string(),
        n if n > 0 => format!("in {n} hours"),
        n => format!("{} hours ago", n.unsigned_abs()),
    }
}
