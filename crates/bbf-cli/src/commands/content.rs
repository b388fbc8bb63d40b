use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use bbf_content::{render_markdown, ContentPlanner, NewsletterPlan, PlanDocument};
use bbf_core::AppConfig;
use chrono::{Local, Utc};

use crate::display;
use crate::paths;

/// Write `plan` as JSON and markdown; returns the markdown path.
pub(crate) fn save_plan(config: &AppConfig, plan: &NewsletterPlan) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;

    let now = Local::now();
    let (json_path, md_path) =
        paths::content_plan_paths(&config.output_dir, &plan.niche, &paths::timestamp(now));

    let document = PlanDocument {
        plan: plan.clone(),
        generated_at: Utc::now(),
    };
    let file =
        File::create(&json_path).with_context(|| format!("failed to create {}", json_path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.flush()?;

    std::fs::write(&md_path, render_markdown(plan, now.date_naive()))
        .with_context(|| format!("failed to write {}", md_path.display()))?;

    println!("\n✓ Saved to {}", json_path.display());
    println!("✓ Saved to {}", md_path.display());
    Ok(md_path)
}

/// Build a content plan from an analysis file and save it.
///
/// Without `input` the most recent analysis file in the output directory is used.
///
/// # Errors
///
/// Returns an error if the analysis file cannot be read or the plan files
/// cannot be written.
pub(crate) fn run_content(config: &AppConfig, input: Option<&Path>) -> anyhow::Result<()> {
    println!("\n📝 Generating content...\n");

    let input = match input {
        Some(path) => path.to_path_buf(),
        None => {
            let Some(latest) = paths::latest_json(&config.output_dir, paths::ANALYSIS_PREFIX)
            else {
                println!("no analysis files found; run `analyze` first");
                return Ok(());
            };
            println!("Using: {}", latest.display());
            latest
        }
    };

    let mut planner = ContentPlanner::new();
    planner.load_analysis(&input)?;
    let plan = planner.generate_plan()?;

    display::print_plan(&plan);
    save_plan(config, &plan)?;
    Ok(())
}
