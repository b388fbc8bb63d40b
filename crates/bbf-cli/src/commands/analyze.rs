use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use bbf_core::{AppConfig, Business, OpportunityScore, ScrapeFile};
use chrono::Local;

use crate::display;
use crate::paths;

const DEFAULT_CATEGORY: &str = "local services";
const DEFAULT_LOCATION: &str = "Unknown";

/// Score `businesses` and warn when the review sample is thin.
pub(crate) fn score_market(
    config: &AppConfig,
    businesses: &[Business],
    category: &str,
    location: &str,
) -> anyhow::Result<OpportunityScore> {
    let score = bbf_analyzer::analyze(businesses, category, location)?;
    if bbf_analyzer::thin_sample(&score, config.min_reviews_for_analysis) {
        tracing::warn!(
            total_reviews = score.total_reviews,
            minimum = config.min_reviews_for_analysis,
            "few reviews in this market; treat the score as a rough signal"
        );
    }
    Ok(score)
}

/// Write `score` as a timestamped analysis file.
pub(crate) fn save_analysis(config: &AppConfig, score: &OpportunityScore) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;
    let path = paths::analysis_path(
        &config.output_dir,
        &score.category,
        &paths::timestamp(Local::now()),
    );

    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, score)?;
    writer.flush()?;

    println!("\n✓ Analysis saved to {}", path.display());
    Ok(path)
}

/// Score a scrape file and save the analysis.
///
/// Without `input` the most recent scrape file in the data directory is used.
///
/// # Errors
///
/// Returns an error if the scrape file cannot be read, holds no businesses,
/// or the analysis cannot be written.
pub(crate) fn run_analyze(
    config: &AppConfig,
    input: Option<&Path>,
    category: Option<&str>,
    location: Option<&str>,
) -> anyhow::Result<()> {
    println!("\n📊 Analyzing opportunities...\n");

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
    let score = score_market(
        config,
        &scrape.businesses,
        category.unwrap_or(DEFAULT_CATEGORY),
        location.unwrap_or(DEFAULT_LOCATION),
    )?;

    display::print_analysis(&score, config.high_opportunity_score);
    save_analysis(config, &score)?;
    Ok(())
}
