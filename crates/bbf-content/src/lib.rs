//! Newsletter and marketing content generated from an opportunity analysis.
//!
//! Everything here is fixed string templates over [`bbf_core::OpportunityScore`]
//! fields; the only branching is on whether complaints and themes exist.

pub mod error;
pub mod markdown;
pub mod planner;
pub mod templates;
pub mod types;

pub use error::ContentError;
pub use markdown::render_markdown;
pub use planner::{generate_plan, ContentPlanner};
pub use types::{ContentIdea, EmailStep, NewsletterPlan, PlanDocument};
