use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no analysis loaded; load an analysis file first")]
    NoAnalysisLoaded,

    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid analysis JSON: {0}")]
    Json(#[from] serde_json::Error),
}
