//! Shared domain types for the Boring Business Finder workspace.
//!
//! Everything that more than one pipeline stage needs lives here: the
//! business/review model, the opportunity score, the scrape-file format,
//! niche metadata, and environment-driven configuration.

pub mod app_config;
pub mod config;
pub mod models;
pub mod niches;
pub mod score;
pub mod snapshot;
pub mod text;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use models::{star_rating, Business, Review, SearchQuery};
pub use niches::{NICHES, NICHE_GROUPS};
pub use score::{OpportunityScore, OpportunityTier};
pub use snapshot::{ScrapeFile, SnapshotError};
pub use text::title_case;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
