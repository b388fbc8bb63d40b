use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectorError {
    /// Network or TLS failure. The request URL is stripped because it carries the API key.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered 2xx but reported an `error` in the body.
    #[error("search API error: {0}")]
    Api(String),

    #[error("invalid search base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
