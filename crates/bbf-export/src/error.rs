use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON write failed: {0}")]
    Json(#[from] serde_json::Error),
}
