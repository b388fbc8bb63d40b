use std::path::{Path, PathBuf};

use bbf_content::generate_plan;
use bbf_core::{AppConfig, Business};
use bbf_db::LeadFilter;
use sqlx::SqlitePool;

use super::analyze::{save_analysis, score_market};
use super::content::save_plan;
use super::discover::{collect, persist, save_scrape};
use super::export::{write_leads, ExportFormat};
use crate::display;

const PIPELINE_STEPS: usize = 4;

async fn store_and_export(
    pool: &SqlitePool,
    config: &AppConfig,
    businesses: &[Business],
    query: &str,
    location: &str,
) -> anyhow::Result<Option<PathBuf>> {
    persist(pool, businesses, query, location).await?;

    let leads = bbf_db::search_businesses(pool, &LeadFilter::default()).await?;
    if leads.is_empty() {
        println!("no leads to export");
        return Ok(None);
    }
    let path = write_leads(config, &leads, ExportFormat::Outreach, None, None)?;
    println!("✓ Exported {} outreach leads to {}", leads.len(), path.display());
    Ok(Some(path))
}

fn file_label(path: Option<&Path>) -> String {
    path.map_or_else(|| "N/A".to_string(), |p| p.display().to_string())
}

/// Discover, analyze, plan content and export outreach leads in one run.
///
/// # Errors
///
/// Returns an error if any step's output cannot be written, the discovery
/// returns no businesses to score, or the record store fails.
pub(crate) async fn run_pipeline(
    config: &AppConfig,
    query: &str,
    location: &str,
    max_results: usize,
) -> anyhow::Result<()> {
    display::print_banner();
    println!("🚀 Pipeline Started\n");
    println!("🎯 Niche: {query}");
    println!("📍 Location: {location}");

    display::print_step(1, PIPELINE_STEPS, "Discovering businesses");
    let businesses = collect(config, query, location, max_results, None).await?;
    display::print_businesses(&businesses);
    let scrape_path = save_scrape(config, businesses.clone())?;

    display::print_step(2, PIPELINE_STEPS, "Analyzing opportunity");
    let score = score_market(config, &businesses, query, location)?;
    display::print_analysis(&score, config.high_opportunity_score);
    let analysis_path = save_analysis(config, &score)?;

    display::print_step(3, PIPELINE_STEPS, "Generating content");
    let plan = generate_plan(&score);
    display::print_plan(&plan);
    let content_path = save_plan(config, &plan)?;

    display::print_step(4, PIPELINE_STEPS, "Exporting leads");
    let pool = super::open_store(config).await?;
    let exported = store_and_export(&pool, config, &businesses, query, location).await;
    pool.close().await;
    let leads_path = exported?;

    display::print_rule("✅ PIPELINE COMPLETE");
    println!("\n📁 Generated Files:\n");
    println!("📊 Scrape Data: {}", scrape_path.display());
    println!("📈 Analysis: {}", analysis_path.display());
    println!("📝 Content Plan: {}", content_path.display());
    println!("📤 Outreach List: {}", file_label(leads_path.as_deref()));

    if score.opportunity_score >= config.high_opportunity_score {
        display::print_next_steps();
    }
    Ok(())
}
