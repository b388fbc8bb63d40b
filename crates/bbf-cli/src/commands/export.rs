use bbf_core::AppConfig;
use bbf_db::{BusinessRow, LeadFilter, DEFAULT_SEARCH_LIMIT};
use bbf_export::LeadExporter;
use clap::{Args, ValueEnum};
use sqlx::SqlitePool;

use crate::display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Outreach,
}

/// Filters and output options for `export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
    /// Filter by category (substring)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Filter by city (substring)
    #[arg(long)]
    pub city: Option<String>,
    /// Filter by state (exact, e.g. TX)
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub min_rating: Option<f64>,
    #[arg(long)]
    pub max_rating: Option<f64>,
    /// Only businesses without a website
    #[arg(long)]
    pub no_website: bool,
    #[arg(long)]
    pub min_reviews: Option<i64>,
    #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub limit: i64,
    /// Output filename inside the output directory
    #[arg(short, long)]
    pub output: Option<String>,
    /// Comma-separated CSV columns (csv format only)
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,
}

impl ExportArgs {
    pub(crate) fn filter(&self) -> LeadFilter {
        LeadFilter {
            category: self.category.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            min_rating: self.min_rating,
            max_rating: self.max_rating,
            has_website: self.no_website.then_some(false),
            has_phone: None,
            min_reviews: self.min_reviews,
            limit: Some(self.limit),
        }
    }
}

async fn export_leads(
    pool: &SqlitePool,
    config: &AppConfig,
    args: &ExportArgs,
) -> anyhow::Result<()> {
    let leads = bbf_db::search_businesses(pool, &args.filter()).await?;
    if leads.is_empty() {
        println!("no leads found matching criteria");
        return Ok(());
    }

    display::print_leads(&leads);
    let path = write_leads(config, &leads, args.format, args.output.as_deref(), args.columns.as_deref())?;
    println!("\n✓ Exported {} leads to {}", leads.len(), path.display());
    Ok(())
}

pub(crate) fn write_leads(
    config: &AppConfig,
    leads: &[BusinessRow],
    format: ExportFormat,
    filename: Option<&str>,
    columns: Option<&[String]>,
) -> anyhow::Result<std::path::PathBuf> {
    let exporter = LeadExporter::new(&config.output_dir);
    let path = match format {
        ExportFormat::Csv => exporter.export_csv(leads, filename, columns)?,
        ExportFormat::Json => exporter.export_json(leads, filename)?,
        ExportFormat::Outreach => exporter.export_outreach(leads, filename)?,
    };
    Ok(path)
}

/// Export stored leads matching the filters.
///
/// # Errors
///
/// Returns an error if the record store cannot be opened or queried, or the
/// export file cannot be written.
pub(crate) async fn run_export(config: &AppConfig, args: &ExportArgs) -> anyhow::Result<()> {
    println!("\n📤 Exporting leads...\n");

    let pool = super::open_store(config).await?;
    let result = export_leads(&pool, config, args).await;
    pool.close().await;
    result
}
