//! Command handlers for the CLI.
//!
//! Each step reads the previous step's file (or the record store) and writes
//! its own. A missing input prints guidance naming the step to run first.

mod analyze;
mod content;
mod discover;
mod export;
mod pipeline;
mod store;

pub(crate) use analyze::run_analyze;
pub(crate) use content::run_content;
pub(crate) use discover::run_discover;
pub(crate) use export::{run_export, ExportArgs, ExportFormat};
pub(crate) use pipeline::run_pipeline;
pub(crate) use store::{run_history, run_import, run_search, run_stats};

use bbf_core::AppConfig;
use sqlx::SqlitePool;

/// Open the configured SQLite store and apply pending migrations.
pub(crate) async fn open_store(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let pool = bbf_db::connect_store(&config.database_path, bbf_db::PoolConfig::default()).await?;
    let applied = bbf_db::run_migrations(&pool).await?;
    if applied > 0 {
        tracing::info!(applied, path = %config.database_path.display(), "applied migrations");
    }
    Ok(pool)
}
