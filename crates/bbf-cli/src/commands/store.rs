//! Record store commands: import, stats, search and history.

use std::path::Path;

use bbf_core::{AppConfig, ScrapeFile};
use bbf_db::LeadFilter;

use crate::display;
use crate::paths;

/// Load a scrape file into the record store.
///
/// # Errors
///
/// Returns an error if the scrape file cannot be read or the store fails.
pub(crate) async fn run_import(config: &AppConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let input = match input {
        Some(path) => path.to_path_buf(),
        None => {
            let Some(latest) = paths::latest_json(&config.data_dir, paths::SCRAPE_PREFIX) else {
                println!("no scrape files found; run `discover` first");
                return Ok(());
            };
            println!("Using: {}", latest.display());
            latest
        }
    };

    let scrape = ScrapeFile::read_from_path(&input)?;
    let pool = super::open_store(config).await?;
    let result = bbf_db::insert_businesses(&pool, &scrape.businesses).await;
    pool.close().await;

    let summary = result?;
    println!("✓ Inserted/updated {} businesses", summary.inserted);
    if summary.failed > 0 {
        println!("  {} could not be stored (see log)", summary.failed);
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the record store cannot be opened or queried.
pub(crate) async fn run_stats(config: &AppConfig) -> anyhow::Result<()> {
    let pool = super::open_store(config).await?;
    let result = bbf_db::get_stats(&pool).await;
    pool.close().await;

    let stats = result?;
    if stats.total_businesses == 0 {
        println!("no businesses stored yet; run `import` or `discover --save-db` first");
        return Ok(());
    }
    display::print_stats(&stats);
    Ok(())
}

/// # Errors
///
/// Returns an error if the record store cannot be opened or queried.
pub(crate) async fn run_search(
    config: &AppConfig,
    category: Option<&str>,
    city: Option<&str>,
    limit: i64,
) -> anyhow::Result<()> {
    let filter = LeadFilter {
        category: category.map(str::to_string),
        city: city.map(str::to_string),
        limit: Some(limit),
        ..LeadFilter::default()
    };

    let pool = super::open_store(config).await?;
    let result = bbf_db::search_businesses(&pool, &filter).await;
    pool.close().await;

    let leads = result?;
    if leads.is_empty() {
        println!("no leads found matching criteria");
        return Ok(());
    }
    display::print_leads(&leads);
    Ok(())
}

/// # Errors
///
/// Returns an error if the record store cannot be opened or queried.
pub(crate) async fn run_history(config: &AppConfig, limit: i64) -> anyhow::Result<()> {
    let pool = super::open_store(config).await?;
    let result = bbf_db::list_search_history(&pool, limit).await;
    pool.close().await;

    let rows = result?;
    if rows.is_empty() {
        println!("no searches recorded yet; run `discover --save-db` or `pipeline` first");
        return Ok(());
    }
    display::print_history(&rows);
    Ok(())
}
