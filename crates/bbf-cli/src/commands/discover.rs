use std::path::PathBuf;

use bbf_collector::{Collector, CollectorConfig};
use bbf_core::{AppConfig, Business, ScrapeFile};
use chrono::{Local, Utc};
use sqlx::SqlitePool;

use crate::display;
use crate::paths;

/// Search for businesses and optionally fill in their reviews.
pub(crate) async fn collect(
    config: &AppConfig,
    query: &str,
    location: &str,
    max_results: usize,
    with_reviews: Option<usize>,
) -> anyhow::Result<Vec<Business>> {
    let mut collector = Collector::new(CollectorConfig::from_app_config(config))
        .map_err(|e| anyhow::anyhow!("failed to build search client: {e}"))?;

    let max_results = config.cap_results(max_results);
    let mut businesses = collector.search(query, location, max_results).await;

    if let Some(max_reviews) = with_reviews {
        for business in businesses.iter_mut().filter(|b| !b.has_review_bodies()) {
            business.reviews = collector.fetch_reviews(&business.place_id, max_reviews).await;
        }
    }

    Ok(businesses)
}

/// Write `businesses` to a new timestamped scrape file.
pub(crate) fn save_scrape(config: &AppConfig, businesses: Vec<Business>) -> anyhow::Result<PathBuf> {
    let path = paths::scrape_path(&config.data_dir, &paths::timestamp(Local::now()));
    let count = businesses.len();
    ScrapeFile::new(businesses, Utc::now()).write_to_path(&path)?;
    println!("\n✓ Saved {count} businesses to {}", path.display());
    Ok(path)
}

/// Upsert `businesses` and log the search in the history table.
pub(crate) async fn persist(
    pool: &SqlitePool,
    businesses: &[Business],
    query: &str,
    location: &str,
) -> anyhow::Result<()> {
    let summary = bbf_db::insert_businesses(pool, businesses).await?;
    bbf_db::record_search(pool, query, location, businesses.len()).await?;
    println!("✓ Inserted/updated {} businesses", summary.inserted);
    if summary.failed > 0 {
        println!("  {} could not be stored (see log)", summary.failed);
    }
    Ok(())
}

/// Discover businesses for `query` in `location` and save them to a scrape file.
///
/// # Errors
///
/// Returns an error if the search client cannot be built, the scrape file
/// cannot be written, or (with `save_db`) the record store fails.
pub(crate) async fn run_discover(
    config: &AppConfig,
    query: &str,
    location: &str,
    max_results: usize,
    save_db: bool,
    with_reviews: Option<usize>,
) -> anyhow::Result<()> {
    println!("\n🔍 Discovering: {query} in {location}\n");

    let businesses = collect(config, query, location, max_results, with_reviews).await?;
    display::print_businesses(&businesses);

    if save_db {
        let pool = super::open_store(config).await?;
        let stored = persist(&pool, &businesses, query, location).await;
        pool.close().await;
        stored?;
    }

    save_scrape(config, businesses)?;
    Ok(())
}
