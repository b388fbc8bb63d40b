//! HTTP client for the maps search API.
//!
//! Every request carries `api_key` and `engine`; API-level failures reported in
//! the body's `error` field surface as [`CollectorError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::CollectorError;
use crate::types::{ReviewsPage, SearchPage};

const SEARCH_ENGINE: &str = "google_maps";
const REVIEWS_ENGINE: &str = "google_maps_reviews";

/// Client for the maps search API.
///
/// Use [`MapsClient::with_base_url`] to point at a mock server in tests.
pub struct MapsClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl MapsClient {
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`CollectorError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, CollectorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| CollectorError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Fetches one page of local results for `q`, starting at offset `start`.
    ///
    /// # Errors
    ///
    /// - [`CollectorError::Http`] on network failure.
    /// - [`CollectorError::UnexpectedStatus`] on a non-2xx status.
    /// - [`CollectorError::Deserialize`] if the body is not a results page.
    /// - [`CollectorError::Api`] if the body carries an `error` message.
    pub async fn search_page(&self, q: &str, start: usize) -> Result<SearchPage, CollectorError> {
        let start = start.to_string();
        let url = self.build_url(
            SEARCH_ENGINE,
            &[("q", q), ("type", "search"), ("start", &start)],
        );
        let body = self.request_json(&url).await?;

        let page: SearchPage =
            serde_json::from_value(body).map_err(|e| CollectorError::Deserialize {
                context: format!("search(q={q}, start={start})"),
                source: e,
            })?;
        if let Some(message) = page.error {
            return Err(CollectorError::Api(message));
        }
        Ok(page)
    }

    /// Fetches the first page of reviews for a listing.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search_page`].
    pub async fn reviews_page(&self, place_id: &str) -> Result<ReviewsPage, CollectorError> {
        let url = self.build_url(REVIEWS_ENGINE, &[("place_id", place_id)]);
        let body = self.request_json(&url).await?;

        let page: ReviewsPage =
            serde_json::from_value(body).map_err(|e| CollectorError::Deserialize {
                context: format!("reviews(place_id={place_id})"),
                source: e,
            })?;
        if let Some(message) = page.error {
            return Err(CollectorError::Api(message));
        }
        Ok(page)
    }

    fn build_url(&self, engine: &str, extra: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("engine", engine);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("api_key", &self.api_key);
        }
        url
    }

    /// Sends a GET request and parses the body as JSON.
    ///
    /// Error messages never include the full URL since the query string holds
    /// the API key.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, CollectorError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollectorError::UnexpectedStatus {
                status: status.as_u16(),
                url: redacted(url),
            });
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| CollectorError::Deserialize {
            context: redacted(url),
            source: e,
        })
    }
}

/// Scheme, host and path only.
fn redacted(url: &Url) -> String {
    let mut clean = url.clone();
    clean.set_query(None);
    clean.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
