use bbf_core::{Business, OpportunityScore};
use chrono::{DateTime, Duration, Utc};

use crate::complaints::{dedupe_complaints, extract_complaints, rank_themes, MAX_COMMON_COMPLAINTS};
use crate::error::AnalyzerError;

const RECENT_WINDOW_DAYS: i64 = 30;
const LOW_RATING: f64 = 4.0;

/// Scores `businesses` as the market for `category` in `location`.
///
/// # Errors
///
/// Returns [`AnalyzerError::NoBusinesses`] when `businesses` is empty.
pub fn analyze(
    businesses: &[Business],
    category: &str,
    location: &str,
) -> Result<OpportunityScore, AnalyzerError> {
    analyze_as_of(businesses, category, location, Utc::now())
}

/// [`analyze`] with review recency measured relative to `as_of`.
///
/// # Errors
///
/// Returns [`AnalyzerError::NoBusinesses`] when `businesses` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn analyze_as_of(
    businesses: &[Business],
    category: &str,
    location: &str,
    as_of: DateTime<Utc>,
) -> Result<OpportunityScore, AnalyzerError> {
    if businesses.is_empty() {
        return Err(AnalyzerError::NoBusinesses);
    }

    let mut score = OpportunityScore::new(category, location);

    score.total_businesses = u32::try_from(businesses.len()).unwrap_or(u32::MAX);
    score.total_reviews = businesses.iter().map(|b| u64::from(b.review_count)).sum();
    score.avg_reviews_per_business = score.total_reviews as f64 / businesses.len() as f64;

    let ratings: Vec<f64> = businesses.iter().filter_map(|b| b.rating).collect();
    score.avg_rating = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    };
    score.low_rated_businesses = count(businesses, |b| b.rating.is_some_and(|r| r < LOW_RATING));
    score.businesses_without_website = count(businesses, |b| !b.has_website());

    let window_start = as_of - Duration::days(RECENT_WINDOW_DAYS);
    score.reviews_last_30_days = u32::try_from(
        businesses
            .iter()
            .flat_map(|b| &b.reviews)
            .filter_map(|r| r.date)
            .filter(|d| *d > window_start && *d <= as_of)
            .count(),
    )
    .unwrap_or(u32::MAX);
    score.review_velocity = f64::from(score.reviews_last_30_days) / RECENT_WINDOW_DAYS as f64;

    let raw_complaints: Vec<String> = businesses
        .iter()
        .flat_map(Business::negative_reviews)
        .flat_map(|r| extract_complaints(&r.text))
        .collect();
    score.common_complaints = dedupe_complaints(&raw_complaints, MAX_COMMON_COMPLAINTS);
    score.complaint_themes = rank_themes(&raw_complaints);

    score.calculate_score();

    tracing::info!(
        category,
        location,
        businesses = score.total_businesses,
        reviews = score.total_reviews,
        complaints = raw_complaints.len(),
        score = score.opportunity_score,
        "analysis complete"
    );
    Ok(score)
}

/// True when the market has fewer total reviews than `min_reviews`.
#[must_use]
pub fn thin_sample(score: &OpportunityScore, min_reviews: u32) -> bool {
    score.total_reviews < u64::from(min_reviews)
}

fn count(businesses: &[Business], pred: impl Fn(&Business) -> bool) -> u32 {
    u32::try_from(businesses.iter().filter(|b| pred(b)).count()).unwrap_or(u32::MAX)
}
