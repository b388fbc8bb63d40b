//! Output file naming and discovery of the most recent step output.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::Regex;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\-]").expect("valid filename regex"));

pub(crate) const SCRAPE_PREFIX: &str = "scrape_";
pub(crate) const ANALYSIS_PREFIX: &str = "analysis_";

/// `garage organizers` -> `garage_organizers`.
pub(crate) fn safe_name(value: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(value, "_").into_owned()
}

pub(crate) fn timestamp(now: DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

pub(crate) fn scrape_path(data_dir: &Path, stamp: &str) -> PathBuf {
    data_dir.join(format!("{SCRAPE_PREFIX}{stamp}.json"))
}

pub(crate) fn analysis_path(output_dir: &Path, category: &str, stamp: &str) -> PathBuf {
    output_dir.join(format!("{ANALYSIS_PREFIX}{}_{stamp}.json", safe_name(category)))
}

/// The JSON and markdown paths for one content plan.
pub(crate) fn content_plan_paths(output_dir: &Path, niche: &str, stamp: &str) -> (PathBuf, PathBuf) {
    let base = format!("content_plan_{}_{stamp}", safe_name(niche));
    (
        output_dir.join(format!("{base}.json")),
        output_dir.join(format!("{base}.md")),
    )
}

/// Most recently modified `<prefix>*.json` file in `dir`, if any.
///
/// A missing directory counts as empty.
pub(crate) fn latest_json(dir: &Path, prefix: &str) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.starts_with(prefix) && name.ends_with(".json")
        })
        .filter_map(|entry| {
            let modified = entry.metadata().and_then(|m| m.modified()).ok()?;
            Some((modified, entry.path()))
        })
        .max_by_key(|(modified, _)| *modified)
        .map(|(_, path)| path)
}
