//! Mapping from raw search listings to [`Business`] records.

use bbf_core::{star_rating, Business, Review};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::types::{RawLocalResult, RawReview};

const UNKNOWN: &str = "Unknown";
const SYNTHETIC_ID_LEN: usize = 32;

/// Parses one `local_results` entry.
///
/// Returns `None` (after logging) when a field has the wrong JSON type; absent
/// fields fall back to defaults.
#[must_use]
pub fn parse_local_result(
    raw: serde_json::Value,
    location: &str,
    scraped_at: DateTime<Utc>,
) -> Option<Business> {
    let result: RawLocalResult = match serde_json::from_value(raw) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "skipping malformed search result");
            return None;
        }
    };

    let name = result.title.unwrap_or_else(|| UNKNOWN.to_string());
    let place_id = result
        .place_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| synthetic_place_id(&name));
    let address = result.address.unwrap_or_default();
    let (city, state, zip_code) = parse_location(&address, location);
    let (latitude, longitude) = result
        .gps_coordinates
        .map_or((None, None), |gps| (gps.latitude, gps.longitude));

    Some(Business {
        name,
        place_id,
        category: result.kind.unwrap_or_else(|| UNKNOWN.to_string()),
        address,
        city,
        state,
        zip_code,
        latitude,
        longitude,
        phone: result.phone,
        website: result.website,
        rating: result.rating,
        review_count: result.reviews.unwrap_or(0),
        reviews: Vec::new(),
        scraped_at,
    })
}

/// Stable identifier for listings the API returns without a `place_id`:
/// the first 32 hex characters of the SHA-256 of the listing name.
#[must_use]
pub fn synthetic_place_id(name: &str) -> String {
    let mut hex = format!("{:x}", Sha256::digest(name.as_bytes()));
    hex.truncate(SYNTHETIC_ID_LEN);
    hex
}

/// Extracts `(city, state, zip)` from a free-text address.
///
/// With at least two comma-separated segments the city is the second-to-last
/// segment and the state the first token of the last one, with any following
/// token kept as the zip. Otherwise city and state come from `default_location`
/// (`"City, ST"`), each falling back to `"Unknown"`.
#[must_use]
pub fn parse_location(address: &str, default_location: &str) -> (String, String, Option<String>) {
    let mut defaults = default_location.split(',').map(str::trim);
    let default_city = defaults
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string();
    let default_state = defaults
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string();

    let parts: Vec<&str> = address.split(',').collect();
    if parts.len() < 2 {
        return (default_city, default_state, None);
    }

    let city = parts[parts.len() - 2].trim().to_string();
    let mut tail = parts[parts.len() - 1].split_whitespace();
    let state = tail.next().map_or(default_state, str::to_string);
    let zip_code = tail.next().map(str::to_string);
    (city, state, zip_code)
}

/// Parses one review entry, returning `None` when a field has the wrong type.
#[must_use]
pub fn parse_review(raw: serde_json::Value) -> Option<Review> {
    let review: RawReview = match serde_json::from_value(raw) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "skipping malformed review");
            return None;
        }
    };

    let mut parsed = Review::new(star_rating(review.rating), review.snippet.unwrap_or_default());
    if let Some(name) = review.user.and_then(|u| u.name) {
        parsed = parsed.with_author(name);
    }
    if let Some(date) = review
        .iso_date
        .as_deref()
        .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
    {
        parsed = parsed.with_date(date.with_timezone(&Utc));
    }
    Some(parsed)
}
