use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("no businesses to analyze")]
    NoBusinesses,
}
