//! Plain-text terminal rendering for command results.

use bbf_content::NewsletterPlan;
use bbf_core::{title_case, Business, OpportunityScore, OpportunityTier, NICHE_GROUPS};
use bbf_db::{BusinessRow, SearchHistoryRow, StoreStats};

const TABLE_ROWS: usize = 20;
const QUOTE_CHARS: usize = 100;
const PREVIEW_CHARS: usize = 80;
const RULE: &str = "============================================================";

pub(crate) fn print_banner() {
    println!(
        r"
    ╔══════════════════════════════════════════════════════════════╗
    ║                                                              ║
    ║   🏭  BORING BUSINESS FINDER                                 ║
    ║                                                              ║
    ║   Find profitable, overlooked local business opportunities   ║
    ║   using Google Maps review analysis                          ║
    ║                                                              ║
    ╚══════════════════════════════════════════════════════════════╝
"
    );
}

pub(crate) fn print_step(step: usize, total: usize, title: &str) {
    println!("\n{RULE}");
    println!("STEP {step}/{total}: {title}");
    println!("{RULE}");
}

pub(crate) fn print_rule(title: &str) {
    println!("\n{RULE}");
    println!("{title}");
    println!("{RULE}");
}

/// First `max` characters of `text`, with `...` appended when cut.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

fn rating_label(rating: Option<f64>) -> String {
    rating.map_or_else(|| "N/A".to_string(), |r| format!("{r:.1}"))
}

fn yes_no(present: bool) -> &'static str {
    if present {
        "✓"
    } else {
        "✗"
    }
}

fn remaining(total: usize) {
    if total > TABLE_ROWS {
        println!("... and {} more", total - TABLE_ROWS);
    }
}

pub(crate) fn print_businesses(businesses: &[Business]) {
    if businesses.is_empty() {
        println!("no businesses found");
        return;
    }
    println!(
        "{:<42}{:>8}{:>10}{:>10}  PHONE",
        "NAME", "RATING", "REVIEWS", "WEBSITE"
    );
    for b in businesses.iter().take(TABLE_ROWS) {
        println!(
            "{:<42}{:>8}{:>10}{:>10}  {}",
            truncate(&b.name, 39),
            rating_label(b.rating),
            b.review_count,
            yes_no(b.has_website()),
            b.phone.as_deref().unwrap_or("N/A")
        );
    }
    remaining(businesses.len());
}

pub(crate) fn print_leads(leads: &[BusinessRow]) {
    println!("Leads ({} total)", leads.len());
    println!(
        "{:<32}{:<18}{:>8}{:>10}  {:<18}WEBSITE",
        "NAME", "CITY", "RATING", "REVIEWS", "PHONE"
    );
    for lead in leads.iter().take(TABLE_ROWS) {
        let has_website = lead.website.as_deref().is_some_and(|w| !w.is_empty());
        println!(
            "{:<32}{:<18}{:>8}{:>10}  {:<18}{}",
            truncate(&lead.name, 29),
            lead.city,
            rating_label(lead.rating),
            lead.review_count,
            lead.phone.as_deref().unwrap_or("N/A"),
            yes_no(has_website)
        );
    }
    remaining(leads.len());
}

fn percent(part: u32, total: u32) -> f64 {
    f64::from(part) / f64::from(total.max(1)) * 100.0
}

fn tier_marker(tier: OpportunityTier) -> &'static str {
    match tier {
        OpportunityTier::High => "🔥",
        OpportunityTier::Moderate => "👀",
        OpportunityTier::Low => "⚠️",
    }
}

/// `(metric, value, signal)` rows for the analysis summary.
pub(crate) fn metric_rows(score: &OpportunityScore) -> Vec<(&'static str, String, String)> {
    let light = |good: bool, fair: bool| {
        if good {
            "🟢"
        } else if fair {
            "🟡"
        } else {
            "🔴"
        }
    };

    let businesses = score.total_businesses;
    let reviews = score.total_reviews;
    let low_pct = percent(score.low_rated_businesses, businesses);
    let web_pct = percent(score.businesses_without_website, businesses);

    vec![
        (
            "Total Businesses",
            businesses.to_string(),
            format!("{} (fewer = opportunity)", light(businesses < 20, businesses < 50)),
        ),
        (
            "Total Reviews",
            reviews.to_string(),
            format!("{} (more = demand)", light(reviews > 100, reviews > 50)),
        ),
        (
            "Avg Rating",
            format!("{:.1}", score.avg_rating),
            format!(
                "{} (lower = gap)",
                light(score.avg_rating < 4.0, score.avg_rating < 4.3)
            ),
        ),
        (
            "Low-Rated (<4★)",
            format!("{} ({low_pct:.0}%)", score.low_rated_businesses),
            light(low_pct > 30.0, low_pct > 15.0).to_string(),
        ),
        (
            "No Website",
            format!("{} ({web_pct:.0}%)", score.businesses_without_website),
            format!("{} (digital gap)", light(web_pct > 30.0, web_pct > 15.0)),
        ),
        (
            "Reviews (30 days)",
            score.reviews_last_30_days.to_string(),
            format!("{:.2}/day", score.review_velocity),
        ),
    ]
}

pub(crate) fn print_analysis(score: &OpportunityScore, high_threshold: u8) {
    let tier = score.tier(high_threshold);
    println!(
        "{} Opportunity Score: {}/100  ({} in {})",
        tier_marker(tier),
        score.opportunity_score,
        title_case(&score.category),
        score.location
    );
    println!();
    println!("{:<22}{:>12}  SIGNAL", "METRIC", "VALUE");
    for (metric, value, signal) in metric_rows(score) {
        println!("{metric:<22}{value:>12}  {signal}");
    }

    if !score.complaint_themes.is_empty() {
        println!("\n📋 Top Complaint Themes:");
        for (i, theme) in score.complaint_themes.iter().take(5).enumerate() {
            println!("  {}. {}", i + 1, title_case(theme));
        }
    }

    if !score.common_complaints.is_empty() {
        println!("\n💬 Sample Customer Complaints:");
        for complaint in score.common_complaints.iter().take(5) {
            println!("  • \"{}\"", truncate(complaint, QUOTE_CHARS));
        }
    }

    println!("\n💡 {}\n", tier.label());
    println!("{}", tier.recommendation());
}

pub(crate) fn print_plan(plan: &NewsletterPlan) {
    println!("📰 {}", plan.tagline);
    println!("Niche: {}", title_case(&plan.niche));
    println!("Location: {}", plan.location);
    println!("Content Ideas: {}", plan.ideas.len());
    println!("Email Sequence: {} emails", plan.email_sequence.len());
    println!("Social Posts: {}", plan.social_posts.len());

    println!("\n📝 Newsletter Topic Ideas\n");
    for (i, idea) in plan.ideas.iter().enumerate() {
        println!("Idea #{}: {}", i + 1, idea.title);
        println!("  Hook: {}", idea.hook);
        println!("  Key Points:");
        for point in &idea.key_points {
            println!("    • {point}");
        }
        println!("  CTA: {}\n", idea.call_to_action);
    }

    println!("📧 Welcome Email Sequence\n");
    for email in &plan.email_sequence {
        println!("  Day {}: {}", email.day, email.subject);
        println!("  {}\n", truncate(&email.preview, PREVIEW_CHARS));
    }

    println!("📱 Social Media Posts\n");
    for (i, post) in plan.social_posts.iter().enumerate() {
        println!("--- Post #{} ---", i + 1);
        println!("{post}\n");
    }
}

pub(crate) fn print_stats(stats: &StoreStats) {
    println!("Total businesses: {}", stats.total_businesses);
    println!("Total reviews:    {}", stats.total_reviews);
    println!("Average rating:   {}", rating_label(stats.avg_rating));
    if !stats.categories.is_empty() {
        println!("Categories:       {}", stats.categories.join(", "));
    }
    if !stats.cities.is_empty() {
        println!("\n{:<30}BUSINESSES", "CITY");
        for city in &stats.cities {
            println!("{:<30}{}", city.city, city.count);
        }
    }
}

pub(crate) fn print_history(rows: &[SearchHistoryRow]) {
    println!("{:<20}{:<28}{:<24}RESULTS", "SEARCHED", "QUERY", "LOCATION");
    for row in rows {
        println!(
            "{:<20}{:<28}{:<24}{}",
            row.searched_at.format("%Y-%m-%d %H:%M"),
            truncate(&row.query, 25),
            truncate(&row.location, 21),
            row.result_count
        );
    }
}

pub(crate) fn print_ideas() {
    println!("\n💡 Boring Business Niche Ideas");
    for group in NICHE_GROUPS {
        println!("\n{} {}", group.icon, group.title);
        for niche in group.niches {
            println!("  • {niche}");
        }
    }
    println!("\nTip: Look for niches with high demand + poor existing quality");
    println!("Run: bbf pipeline \"<niche>\" \"<city>, <state>\"\n");
}

pub(crate) fn print_next_steps() {
    println!("\n🎯 HIGH OPPORTUNITY DETECTED!\n");
    println!("Recommended next steps:\n");
    println!("1. 📧 Start a niche newsletter with the generated content");
    println!("2. 🌐 Build a simple directory site for lead capture");
    println!("3. 📞 Reach out to low-rated businesses about lead gen");
    println!("4. 📱 Post the social content to build an audience");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééé", 3), "ééé...");
        assert_eq!(truncate("exactly", 7), "exactly");
    }

    #[test]
    fn metric_rows_flag_gaps() {
        let mut score = OpportunityScore::new("lawn care", "Boise, ID");
        score.total_businesses = 10;
        score.total_reviews = 40;
        score.avg_rating = 4.5;
        score.low_rated_businesses = 4;
        score.businesses_without_website = 2;

        let rows = metric_rows(&score);
        assert_eq!(rows[0].2, "🟢 (fewer = opportunity)");
        assert_eq!(rows[1].2, "🔴 (more = demand)");
        assert_eq!(rows[2].1, "4.5");
        assert_eq!(rows[2].2, "🔴 (lower = gap)");
        assert_eq!(rows[3].1, "4 (40%)");
        assert_eq!(rows[3].2, "🟢");
        assert_eq!(rows[4].1, "2 (20%)");
        assert_eq!(rows[4].2, "🟡 (digital gap)");
    }

    #[test]
    fn empty_market_percentages_do_not_divide_by_zero() {
        let score = OpportunityScore::new("x", "y");
        let rows = metric_rows(&score);
        assert_eq!(rows[3].1, "0 (0%)");
    }
}
