use bbf_core::title_case;
use chrono::NaiveDate;

use crate::types::NewsletterPlan;

const RULE: &str = "---\n\n";

/// Human-readable rendering of a plan, dated `generated_on`.
#[must_use]
pub fn render_markdown(plan: &NewsletterPlan, generated_on: NaiveDate) -> String {
    let mut md = String::new();

    md.push_str(&format!("# 📰 {}\n\n", plan.tagline));
    md.push_str(&format!("**Niche:** {}  \n", title_case(&plan.niche)));
    md.push_str(&format!("**Location:** {}  \n", plan.location));
    md.push_str(&format!("**Generated:** {}\n\n", generated_on.format("%Y-%m-%d")));
    md.push_str(RULE);

    md.push_str("## 📝 Newsletter Topic Ideas\n\n");
    for (i, idea) in plan.ideas.iter().enumerate() {
        md.push_str(&format!("### {}. {}\n\n", i + 1, idea.title));
        md.push_str(&format!("**Hook:** {}\n\n", idea.hook));
        md.push_str("**Key Points:**\n");
        for point in &idea.key_points {
            md.push_str(&format!("- {point}\n"));
        }
        md.push_str(&format!("\n**Target Audience:** {}  \n", idea.target_audience));
        md.push_str(&format!("**Call to Action:** {}\n\n", idea.call_to_action));
        md.push_str(RULE);
    }

    md.push_str("## 📧 Welcome Email Sequence\n\n");
    for email in &plan.email_sequence {
        md.push_str(&format!("### Day {}: {}\n\n", email.day, email.subject));
        md.push_str(&format!("*Purpose: {}*\n\n", email.purpose));
        md.push_str(&format!("> {}\n\n", email.preview));
        md.push_str(RULE);
    }

    md.push_str("## 📱 Social Media Posts\n\n");
    for (i, post) in plan.social_posts.iter().enumerate() {
        md.push_str(&format!("### Post {}\n\n```\n{post}\n```\n\n", i + 1));
        md.push_str(RULE);
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_plan;
    use bbf_core::OpportunityScore;

    fn sample_plan() -> NewsletterPlan {
        let mut score = OpportunityScore::new("window cleaning", "Provo, UT");
        score.common_complaints = vec!["Streaks everywhere, sloppy job".to_string()];
        score.complaint_themes = vec!["quality".to_string()];
        generate_plan(&score)
    }

    #[test]
    fn header_lists_tagline_niche_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        let md = render_markdown(&sample_plan(), date);
        assert!(md.starts_with("# 📰 Quality Window Cleaning in Provo - The Insider Guide\n\n"));
        assert!(md.contains("**Niche:** Window Cleaning  \n"));
        assert!(md.contains("**Location:** Provo, UT  \n"));
        assert!(md.contains("**Generated:** 2024-07-04\n"));
    }

    #[test]
    fn every_section_is_rendered() {
        let plan = sample_plan();
        let md = render_markdown(&plan, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(md.matches("\n### ").count(), plan.ideas.len() + 4 + plan.social_posts.len());
        assert!(md.contains("### Day 7: Ready to get quotes? Here's our vetted list"));
        assert!(md.contains("*Purpose: Problem awareness*"));
        assert!(md.contains("### Post 4\n\n```\n📧 New: The Provo Window Cleaning Insider"));
    }
}
