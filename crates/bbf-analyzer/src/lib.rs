//! Market opportunity scoring over a snapshot of scraped businesses.

pub mod analyzer;
pub mod complaints;
pub mod error;

pub use analyzer::{analyze, analyze_as_of, thin_sample};
pub use complaints::{
    dedupe_complaints, extract_complaints, jaccard_overlap, rank_themes, COMPLAINT_KEYWORDS,
    COMPLAINT_THEMES, MAX_COMMON_COMPLAINTS,
};
pub use error::AnalyzerError;
