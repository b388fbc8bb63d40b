use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bbf_core::OpportunityScore;

use crate::error::ContentError;
use crate::templates::{email_sequence, newsletter_ideas, social_posts, tagline};
use crate::types::NewsletterPlan;

/// Builds the full content plan for one analysed market.
#[must_use]
pub fn generate_plan(score: &OpportunityScore) -> NewsletterPlan {
    let plan = NewsletterPlan {
        niche: score.category.clone(),
        location: score.location.clone(),
        tagline: tagline(score),
        ideas: newsletter_ideas(score),
        email_sequence: email_sequence(score),
        social_posts: social_posts(score),
    };
    tracing::info!(
        niche = %plan.niche,
        location = %plan.location,
        ideas = plan.ideas.len(),
        posts = plan.social_posts.len(),
        "content plan generated"
    );
    plan
}

/// Holds the analysis a plan is generated from.
#[derive(Debug, Default)]
pub struct ContentPlanner {
    score: Option<OpportunityScore>,
}

impl ContentPlanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_score(&mut self, score: OpportunityScore) {
        self.score = Some(score);
    }

    /// Reads an analysis file written by the analyze step.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the file cannot be opened and
    /// [`ContentError::Json`] if it is not an analysis document.
    pub fn load_analysis(&mut self, path: &Path) -> Result<&OpportunityScore, ContentError> {
        let file = File::open(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let score: OpportunityScore = serde_json::from_reader(BufReader::new(file))?;
        tracing::info!(
            category = %score.category,
            location = %score.location,
            path = %path.display(),
            "loaded analysis"
        );
        Ok(self.score.insert(score))
    }

    #[must_use]
    pub fn score(&self) -> Option<&OpportunityScore> {
        self.score.as_ref()
    }

    /// # Errors
    ///
    /// Returns [`ContentError::NoAnalysisLoaded`] if no score has been loaded.
    pub fn generate_plan(&self) -> Result<NewsletterPlan, ContentError> {
        self.score
            .as_ref()
            .map(generate_plan)
            .ok_or(ContentError::NoAnalysisLoaded)
    }
}
