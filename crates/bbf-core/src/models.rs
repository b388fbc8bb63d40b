use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 5;
const DEFAULT_RATING: u8 = 3;
const DEFAULT_RADIUS_MILES: u32 = 25;

fn default_rating() -> u8 {
    DEFAULT_RATING
}

/// Normalize a raw star value: round to the nearest star and clamp into 1–5.
/// Missing or non-finite values become 3.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn star_rating(raw: Option<f64>) -> u8 {
    match raw {
        Some(r) if r.is_finite() => {
            r.round()
                .clamp(f64::from(MIN_RATING), f64::from(MAX_RATING)) as u8
        }
        _ => DEFAULT_RATING,
    }
}

fn deserialize_star_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(star_rating)
}

/// A single customer review attached to a [`Business`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating, always within 1–5.
    #[serde(default = "default_rating", deserialize_with = "deserialize_star_rating")]
    pub rating: u8,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<String>,
}

impl Review {
    /// Build a review, clamping `rating` into the 1–5 star range.
    #[must_use]
    pub fn new(rating: u8, text: impl Into<String>) -> Self {
        Self {
            rating: rating.clamp(MIN_RATING, MAX_RATING),
            text: text.into(),
            date: None,
            author: None,
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// One or two stars.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.rating <= 2
    }

    /// Four or five stars.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.rating >= 4
    }
}

/// A local business listing as returned by a maps search, normalized for
/// storage, scoring and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub name: String,
    /// Stable listing identifier; the natural key in the record store.
    pub place_id: String,
    pub category: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub scraped_at: DateTime<Utc>,
}

impl Business {
    /// True when the listing reports any reviews, fetched or not.
    #[must_use]
    pub fn has_reviews(&self) -> bool {
        self.review_count > 0
    }

    /// True when review bodies are attached to this record.
    #[must_use]
    pub fn has_review_bodies(&self) -> bool {
        !self.reviews.is_empty()
    }

    /// Reviews rated two stars or fewer, in their original order.
    pub fn negative_reviews(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter().filter(|r| r.is_negative())
    }

    /// Share of attached reviews that are negative; `0.0` when there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn negative_review_ratio(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        self.negative_reviews().count() as f64 / self.reviews.len() as f64
    }

    #[must_use]
    pub fn has_website(&self) -> bool {
        self.website.as_deref().is_some_and(|w| !w.trim().is_empty())
    }
}

/// A maps query as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub location: String,
    pub radius_miles: u32,
}

impl SearchQuery {
    #[must_use]
    pub fn new(query: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: location.into(),
            radius_miles: DEFAULT_RADIUS_MILES,
        }
    }

    /// The free-text string sent to the search provider.
    #[must_use]
    pub fn search_string(&self) -> String {
        format!("{} in {}", self.query, self.location)
    }
}
