//! Market opportunity score for one category in one location.
//!
//! The composite is the sum of four fixed-threshold point buckets, each worth
//! 5–25 points, so the total always lands in 20–100.

use serde::{Deserialize, Serialize};

/// Score at or above which a market is at least "moderate".
pub const MODERATE_OPPORTUNITY_SCORE: u8 = 50;

/// Aggregated market metrics and the resulting opportunity score.
///
/// Serialized as a flat JSON object; this is the analysis file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityScore {
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub total_businesses: u32,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub avg_reviews_per_business: f64,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub low_rated_businesses: u32,
    #[serde(default)]
    pub businesses_without_website: u32,
    #[serde(default)]
    pub reviews_last_30_days: u32,
    #[serde(default)]
    pub review_velocity: f64,
    #[serde(default)]
    pub common_complaints: Vec<String>,
    #[serde(default)]
    pub complaint_themes: Vec<String>,
    #[serde(default)]
    pub opportunity_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityTier {
    High,
    Moderate,
    Low,
}

impl OpportunityTier {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH OPPORTUNITY",
            Self::Moderate => "MODERATE OPPORTUNITY",
            Self::Low => "LOW OPPORTUNITY",
        }
    }

    /// Multi-line guidance shown under the score.
    #[must_use]
    pub fn recommendation(self) -> &'static str {
        match self {
            Self::High => {
                "This niche shows strong signals:\n\
                 - Limited competition\n\
                 - Quality gaps in existing providers\n\
                 - Clear customer pain points to address\n\n\
                 Recommended next steps:\n\
                 1. Create a niche newsletter targeting this market\n\
                 2. Build a simple directory/lead-gen site\n\
                 3. Reach out to existing providers about lead generation"
            }
            Self::Moderate => {
                "This niche has potential but consider:\n\
                 - More competitive than ideal niches\n\
                 - May need stronger differentiation\n\n\
                 Recommended: research 2-3 more niches before committing"
            }
            Self::Low => {
                "This niche may be too competitive or saturated.\n\
                 Consider searching for less obvious categories."
            }
        }
    }
}

impl OpportunityScore {
    /// An empty score for `category` in `location`; all metrics start at zero.
    #[must_use]
    pub fn new(category: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            location: location.into(),
            total_businesses: 0,
            total_reviews: 0,
            avg_reviews_per_business: 0.0,
            avg_rating: 0.0,
            low_rated_businesses: 0,
            businesses_without_website: 0,
            reviews_last_30_days: 0,
            review_velocity: 0.0,
            common_complaints: Vec::new(),
            complaint_themes: Vec::new(),
            opportunity_score: 0,
        }
    }

    /// Recompute `opportunity_score` from the aggregate metrics and return it.
    pub fn calculate_score(&mut self) -> u8 {
        let total = self.market_size_points()
            + self.competition_gap_points()
            + self.quality_gap_points()
            + self.digital_gap_points();
        self.opportunity_score = total;
        total
    }

    /// More total reviews means a bigger, more active market.
    #[must_use]
    pub fn market_size_points(&self) -> u8 {
        match self.total_reviews {
            n if n > 1000 => 25,
            n if n > 500 => 20,
            n if n > 100 => 15,
            n if n > 50 => 10,
            _ => 5,
        }
    }

    /// Fewer businesses means less competition.
    #[must_use]
    pub fn competition_gap_points(&self) -> u8 {
        match self.total_businesses {
            n if n < 10 => 25,
            n if n < 20 => 20,
            n if n < 50 => 15,
            _ => 5,
        }
    }

    /// A lower mean rating means customers are under-served.
    #[must_use]
    pub fn quality_gap_points(&self) -> u8 {
        if self.avg_rating < 3.5 {
            25
        } else if self.avg_rating < 4.0 {
            20
        } else if self.avg_rating < 4.3 {
            15
        } else {
            5
        }
    }

    /// A larger share of businesses without a website means a digital gap.
    #[must_use]
    pub fn digital_gap_points(&self) -> u8 {
        let ratio = self.no_website_ratio();
        if ratio > 0.5 {
            25
        } else if ratio > 0.3 {
            20
        } else if ratio > 0.1 {
            15
        } else {
            5
        }
    }

    /// Fraction of businesses with no website; `0.0` when there are none.
    #[must_use]
    pub fn no_website_ratio(&self) -> f64 {
        if self.total_businesses == 0 {
            return 0.0;
        }
        f64::from(self.businesses_without_website) / f64::from(self.total_businesses)
    }

    #[must_use]
    pub fn tier(&self, high_threshold: u8) -> OpportunityTier {
        if self.opportunity_score >= high_threshold {
            OpportunityTier::High
        } else if self.opportunity_score >= MODERATE_OPPORTUNITY_SCORE {
            OpportunityTier::Moderate
        } else {
            OpportunityTier::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_with(total_reviews: u64, total_businesses: u32, avg_rating: f64, no_site: u32) -> OpportunityScore {
        let mut score = OpportunityScore::new("pressure washing", "Austin, TX");
        score.total_reviews = total_reviews;
        score.total_businesses = total_businesses;
        score.avg_rating = avg_rating;
        score.businesses_without_website = no_site;
        score
    }

    #[test]
    fn market_size_boundaries() {
        let cases = [
            (0, 5),
            (50, 5),
            (51, 10),
            (100, 10),
            (101, 15),
            (500, 15),
            (501, 20),
            (1000, 20),
            (1001, 25),
        ];
        for (reviews, expected) in cases {
            let s = score_with(reviews, 5, 4.5, 0);
            assert_eq!(s.market_size_points(), expected, "total_reviews={reviews}");
        }
    }

    #[test]
    fn competition_gap_boundaries() {
        let cases = [(1, 25), (9, 25), (10, 20), (19, 20), (20, 15), (49, 15), (50, 5)];
        for (count, expected) in cases {
            let s = score_with(0, count, 4.5, 0);
            assert_eq!(s.competition_gap_points(), expected, "total_businesses={count}");
        }
    }

    #[test]
    fn quality_gap_boundaries() {
        let cases = [(3.4, 25), (3.5, 20), (3.99, 20), (4.0, 15), (4.29, 15), (4.3, 5), (5.0, 5)];
        for (rating, expected) in cases {
            let s = score_with(0, 5, rating, 0);
            assert_eq!(s.quality_gap_points(), expected, "avg_rating={rating}");
        }
    }

    #[test]
    fn digital_gap_boundaries() {
        // 10 businesses: 1 → 0.1 (not > 0.1), 2 → 0.2, 4 → 0.4, 5 → 0.5, 6 → 0.6
        let cases = [(0, 5), (1, 5), (2, 15), (3, 15), (4, 20), (5, 20), (6, 25)];
        for (no_site, expected) in cases {
            let s = score_with(0, 10, 4.5, no_site);
            assert_eq!(s.digital_gap_points(), expected, "without_website={no_site}");
        }
    }

    #[test]
    fn calculate_score_sums_buckets() {
        let mut s = score_with(600, 12, 3.8, 5);
        let total = s.calculate_score();
        assert_eq!(total, 20 + 20 + 20 + 20);
        assert_eq!(s.opportunity_score, 80);
    }

    #[test]
    fn calculate_score_stays_in_range() {
        let mut low = score_with(0, 500, 5.0, 0);
        assert_eq!(low.calculate_score(), 20);
        let mut high = score_with(5000, 3, 2.0, 3);
        assert_eq!(high.calculate_score(), 100);
    }

    #[test]
    fn tier_respects_threshold() {
        let mut s = OpportunityScore::new("x", "y");
        s.opportunity_score = 70;
        assert_eq!(s.tier(70), OpportunityTier::High);
        assert_eq!(s.tier(75), OpportunityTier::Moderate);
        s.opportunity_score = 49;
        assert_eq!(s.tier(70), OpportunityTier::Low);
    }

    #[test]
    fn analysis_json_is_flat() {
        let s = OpportunityScore::new("lawn care", "Boise, ID");
        let value = serde_json::to_value(&s).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 13);
        assert!(obj.values().all(|v| !v.is_object()));
    }
}
