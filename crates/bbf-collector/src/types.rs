//! Wire types for the maps search API.
//!
//! Page envelopes keep their result lists as raw JSON values so one malformed
//! listing can be skipped without losing the rest of the page.

use serde::Deserialize;

/// One page of `engine=google_maps` results.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub local_results: Vec<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A single listing in `local_results`.
#[derive(Debug, Deserialize)]
pub struct RawLocalResult {
    pub title: Option<String>,
    pub place_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub address: Option<String>,
    pub gps_coordinates: Option<GpsCoordinates>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    /// Total review count, not review bodies.
    pub reviews: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct GpsCoordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Response of `engine=google_maps_reviews`.
#[derive(Debug, Deserialize)]
pub struct ReviewsPage {
    #[serde(default)]
    pub reviews: Vec<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawReview {
    pub rating: Option<f64>,
    pub snippet: Option<String>,
    pub user: Option<RawReviewUser>,
    pub iso_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawReviewUser {
    pub name: Option<String>,
}
