//! Fixed copy templates for taglines, newsletter ideas, emails and posts.

use bbf_core::{title_case, OpportunityScore};

use crate::types::{ContentIdea, EmailStep};

const CONTENT_TYPE_NEWSLETTER: &str = "newsletter";
const QUOTE_PREVIEW_CHARS: usize = 100;

/// Words checked, in order, when summarising a complaint for a hook.
const SUMMARY_KEYWORDS: &[&str] = &["late", "never", "expensive", "poor", "rude", "slow", "damaged"];

/// City part of a `"City, ST"` location.
#[must_use]
pub fn city_of(location: &str) -> &str {
    location.split(',').next().unwrap_or(location)
}

/// Tagline keyed on the top-ranked complaint theme.
#[must_use]
pub fn tagline(score: &OpportunityScore) -> String {
    let niche = title_case(&score.category);
    let city = city_of(&score.location);
    match score.complaint_themes.first().map(String::as_str) {
        Some("pricing") => format!("Save Money on {niche} in {city}"),
        Some("reliability") => format!("Find Reliable {niche} in {city}"),
        Some("quality") => format!("Quality {niche} in {city} - The Insider Guide"),
        _ => format!("The {city} {niche} Insider"),
    }
}

/// Short phrase for a complaint, e.g. `"providers being late"`.
#[must_use]
pub fn summarize_complaint(complaint: &str) -> String {
    let lower = complaint.to_lowercase();
    SUMMARY_KEYWORDS
        .iter()
        .find(|kw| lower.contains(*kw))
        .map_or_else(
            || "poor service quality".to_string(),
            |kw| format!("providers being {kw}"),
        )
}

fn points(items: [&str; 4]) -> Vec<String> {
    items.iter().map(|p| (*p).to_string()).collect()
}

fn idea(
    title: String,
    hook: String,
    key_points: Vec<String>,
    target_audience: String,
    call_to_action: &str,
) -> ContentIdea {
    ContentIdea {
        title,
        content_type: CONTENT_TYPE_NEWSLETTER.to_string(),
        hook,
        key_points,
        target_audience,
        call_to_action: call_to_action.to_string(),
        source_complaint: None,
    }
}

fn theme_title(theme: &str, niche_title: &str, location: &str) -> String {
    match theme {
        "reliability" => format!("How to Find a {niche_title} Provider Who Actually Shows Up"),
        "pricing" => format!("Don't Get Overcharged: {niche_title} Pricing in {location}"),
        "quality" => format!("Quality Check: What Good {niche_title} Work Looks Like"),
        "professionalism" => format!("Signs of a Professional {niche_title} Provider"),
        "communication" => format!("Getting Straight Answers from {niche_title} Companies"),
        other => format!("{} Issues with {niche_title} Providers", title_case(other)),
    }
}

/// Three to five newsletter ideas.
///
/// The complaint idea needs at least one complaint and the theme idea at least
/// one theme; the other three are always present.
#[must_use]
pub fn newsletter_ideas(score: &OpportunityScore) -> Vec<ContentIdea> {
    let niche = score.category.as_str();
    let niche_title = title_case(niche);
    let location = score.location.as_str();
    let mut ideas = Vec::with_capacity(5);

    if let Some(top_complaint) = score.common_complaints.first() {
        let mut complaint_idea = idea(
            format!("Why {location} {niche_title} Customers Are Frustrated (And How to Avoid It)"),
            format!(
                "We analyzed hundreds of reviews. The #1 complaint? {}",
                summarize_complaint(top_complaint)
            ),
            points([
                "What customers are really saying",
                "Red flags to watch for",
                "Questions to ask before hiring",
                "How to verify quality",
            ]),
            format!("{location} homeowners looking for {niche}"),
            "Get our free vetting checklist",
        );
        complaint_idea.source_complaint = Some(top_complaint.clone());
        ideas.push(complaint_idea);
    }

    ideas.push(idea(
        format!("The Complete {location} {niche_title} Buyer's Guide"),
        format!("Everything you need to know before hiring a {niche} provider in {location}..."),
        points([
            "Average costs in your area",
            "What affects pricing",
            "Timeline expectations",
            "DIY vs Professional decision tree",
        ]),
        format!("First-time {niche} customers in {location}"),
        "Download our pricing calculator",
    ));

    if let Some(theme) = score.complaint_themes.first() {
        ideas.push(idea(
            theme_title(theme, &niche_title, location),
            format!(
                "{} is the #1 issue {location} customers face with {niche} providers...",
                title_case(theme)
            ),
            vec![
                format!("Why {theme} problems are so common"),
                "Warning signs to spot early".to_string(),
                "How to protect yourself".to_string(),
                "What to do if things go wrong".to_string(),
            ],
            format!("{location} residents researching {niche}"),
            "Join our vetted provider network",
        ));
    }

    ideas.push(idea(
        format!("Best {niche_title} in {location}: What the Reviews Really Say"),
        format!(
            "We dug through {}+ reviews to find the truth about {location} {niche} providers...",
            score.total_reviews
        ),
        points([
            "Methodology: How we ranked them",
            "Top performers breakdown",
            "Hidden gems with fewer reviews",
            "Who to avoid (and why)",
        ]),
        format!("Anyone comparing {niche} options in {location}"),
        "Get quotes from our top-rated providers",
    ));

    ideas.push(idea(
        format!("When to Hire a {niche_title} in {location} (Timing Guide)"),
        format!("The best time to book {niche} in {location} might not be when you think..."),
        points([
            "Peak vs off-season pricing",
            "How far ahead to book",
            "Weather considerations",
            "Getting priority scheduling",
        ]),
        format!("Planning-ahead homeowners in {location}"),
        "Set a reminder for optimal booking time",
    ));

    ideas
}

/// The four-email welcome sequence sent on days 0, 2, 4 and 7.
#[must_use]
pub fn email_sequence(score: &OpportunityScore) -> Vec<EmailStep> {
    let niche = score.category.as_str();
    let city = city_of(&score.location);
    vec![
        EmailStep {
            day: 0,
            subject: format!("Welcome! Here's your guide to finding the best {niche} in {city}"),
            purpose: "Welcome + deliver lead magnet".to_string(),
            preview: format!(
                "Thanks for joining! Here's your free guide to finding the best {niche} in {city}..."
            ),
        },
        EmailStep {
            day: 2,
            subject: format!("The #1 mistake people make when hiring {niche}..."),
            purpose: "Problem awareness".to_string(),
            preview: format!(
                "Most people don't realize this until it's too late. When it comes to {niche}..."
            ),
        },
        EmailStep {
            day: 4,
            subject: format!("Real story: How one {city} resident saved $500 on {niche}"),
            purpose: "Social proof + tips".to_string(),
            preview: format!(
                "Sarah from {city} was about to make a costly mistake. Then she found our checklist..."
            ),
        },
        EmailStep {
            day: 7,
            subject: "Ready to get quotes? Here's our vetted list".to_string(),
            purpose: "Conversion - directory/lead gen".to_string(),
            preview: format!(
                "Ready to get started? Here are {city}'s highest-rated {niche} providers..."
            ),
        },
    ]
}

/// Three or four social posts; the quote post needs a complaint.
#[must_use]
pub fn social_posts(score: &OpportunityScore) -> Vec<String> {
    let niche = score.category.as_str();
    let city = city_of(&score.location);
    let mut posts = Vec::with_capacity(4);

    posts.push(format!(
        "🔍 We analyzed {}+ reviews of {city} {niche} companies.\n\n\
         The results? {} out of {} have ratings below 4 stars.\n\n\
         Here's what customers are saying (thread 🧵)...",
        score.total_reviews, score.low_rated_businesses, score.total_businesses
    ));

    if let Some(complaint) = score.common_complaints.first() {
        let quote: String = complaint.chars().take(QUOTE_PREVIEW_CHARS).collect();
        posts.push(format!(
            "💬 Real review from a {city} {niche} customer:\n\n\
             \"{quote}...\"\n\n\
             Don't let this happen to you. Here's what to look for ⬇️"
        ));
    }

    posts.push(format!(
        "🏠 Hiring {niche} in {city}?\n\n\
         Ask these 3 questions BEFORE you sign:\n\
         1. What's included in the quote?\n\
         2. What's your timeline?\n\
         3. Can I see recent work photos?\n\n\
         Save this for later 📌"
    ));

    posts.push(format!(
        "📧 New: The {city} {} Insider\n\n\
         Weekly tips on:\n\
         ✅ Finding reliable providers\n\
         ✅ Avoiding overcharges\n\
         ✅ Getting quality work\n\n\
         Free. Unsubscribe anytime.\n\
         Link in bio 👆",
        title_case(niche)
    ));

    posts
}
