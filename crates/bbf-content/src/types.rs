use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single newsletter topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub title: String,
    /// Always `"newsletter"` for generated ideas.
    pub content_type: String,
    pub hook: String,
    pub key_points: Vec<String>,
    pub target_audience: String,
    pub call_to_action: String,
    /// The complaint the idea was built from, if any.
    #[serde(default)]
    pub source_complaint: Option<String>,
}

/// One email in the welcome drip sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailStep {
    pub day: u32,
    pub subject: String,
    pub purpose: String,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterPlan {
    pub niche: String,
    pub location: String,
    pub tagline: String,
    pub ideas: Vec<ContentIdea>,
    pub email_sequence: Vec<EmailStep>,
    pub social_posts: Vec<String>,
}

/// Machine-readable content plan file: the plan plus its generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDocument {
    #[serde(flatten)]
    pub plan: NewsletterPlan,
    pub generated_at: DateTime<Utc>,
}
