mod commands;
mod display;
mod paths;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::ExportArgs;

#[derive(Debug, Parser)]
#[command(name = "bbf")]
#[command(about = "Find profitable, overlooked local business opportunities")]
#[command(after_help = "Examples:
  bbf pipeline \"garage organizers\" \"Charlotte, NC\"
  bbf discover \"irrigation systems\" \"Austin, TX\" --max 50
  bbf analyze --category \"irrigation systems\" --location \"Austin, TX\"
  bbf content
  bbf export --format outreach
  bbf ideas")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search Google Maps listings for a niche in a location
    Discover {
        /// Business type to search (e.g. "pressure washing")
        query: String,
        /// "City, ST" to search
        location: String,
        /// Maximum number of results
        #[arg(short, long, default_value_t = 20)]
        max: usize,
        /// Also store the results in the database
        #[arg(long)]
        save_db: bool,
        /// Fetch up to N reviews per listing that has none
        #[arg(long, value_name = "N")]
        with_reviews: Option<usize>,
    },
    /// Score a scrape file for market opportunity
    Analyze {
        /// Scrape file (defaults to the most recent one)
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
    },
    /// Generate a newsletter content plan from an analysis file
    Content {
        /// Analysis file (defaults to the most recent one)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Export stored leads
    Export(ExportArgs),
    /// Run discover, analyze, content and export in one go
    Pipeline {
        query: String,
        location: String,
        #[arg(short, long, default_value_t = 20)]
        max: usize,
    },
    /// List boring business niche ideas
    Ideas,
    /// Import a scrape file into the database
    Import {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Show database statistics
    Stats,
    /// Search stored leads
    Search {
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
    /// Show recent searches
    History {
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
}

fn warn_missing_credentials(config: &bbf_core::AppConfig) {
    if !config.has_scraping_api() {
        tracing::warn!("no scraping API key configured (SERPAPI_KEY); using demo mode");
    } else if config.serpapi_key.is_none() {
        tracing::warn!("APIFY_API_TOKEN is set but search requires SERPAPI_KEY; using demo mode");
    }
    if !config.has_ai_api() {
        tracing::warn!("no Anthropic API key (ANTHROPIC_API_KEY); using local keyword analysis");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = bbf_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        display::print_banner();
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    if !matches!(command, Commands::Ideas) {
        warn_missing_credentials(&config);
    }

    match command {
        Commands::Discover {
            query,
            location,
            max,
            save_db,
            with_reviews,
        } => {
            commands::run_discover(&config, &query, &location, max, save_db, with_reviews).await?;
        }
        Commands::Analyze {
            input,
            category,
            location,
        } => commands::run_analyze(
            &config,
            input.as_deref(),
            category.as_deref(),
            location.as_deref(),
        )?,
        Commands::Content { input } => commands::run_content(&config, input.as_deref())?,
        Commands::Export(args) => commands::run_export(&config, &args).await?,
        Commands::Pipeline {
            query,
            location,
            max,
        } => commands::run_pipeline(&config, &query, &location, max).await?,
        Commands::Ideas => display::print_ideas(),
        Commands::Import { input } => commands::run_import(&config, input.as_deref()).await?,
        Commands::Stats => commands::run_stats(&config).await?,
        Commands::Search {
            category,
            city,
            limit,
        } => commands::run_search(&config, category.as_deref(), city.as_deref(), limit).await?,
        Commands::History { limit } => commands::run_history(&config, limit).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
