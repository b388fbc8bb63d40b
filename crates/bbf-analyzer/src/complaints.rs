//! Keyword-driven complaint extraction from negative review text.
//!
//! Matching is plain case-insensitive substring search. Output order always
//! follows input order so repeated runs over the same data agree.

use std::collections::HashSet;

/// Complaints kept after near-duplicate removal.
pub const MAX_COMMON_COMPLAINTS: usize = 10;

/// Word-set overlap above which a complaint counts as a near-duplicate.
const DUPLICATE_OVERLAP: f64 = 0.5;

/// Phrases that mark a sentence as a complaint, scanned in this order.
pub const COMPLAINT_KEYWORDS: &[&str] = &[
    "late",
    "never showed",
    "no show",
    "unprofessional",
    "rude",
    "expensive",
    "overpriced",
    "ripoff",
    "rip off",
    "scam",
    "poor quality",
    "sloppy",
    "messy",
    "damaged",
    "broke",
    "no response",
    "didn't return",
    "ignored",
    "ghosted",
    "took forever",
    "slow",
    "delayed",
    "waited",
    "wouldn't recommend",
    "avoid",
    "terrible",
    "worst",
    "miscommunication",
    "wrong",
    "mistake",
    "error",
];

/// Theme name and the phrases that count as a hit for it.
pub const COMPLAINT_THEMES: &[(&str, &[&str])] = &[
    (
        "reliability",
        &[
            "late",
            "never showed",
            "no show",
            "didn't show",
            "took forever",
            "slow",
            "delayed",
            "waited",
        ],
    ),
    (
        "professionalism",
        &[
            "unprofessional",
            "rude",
            "ignored",
            "ghosted",
            "no response",
            "didn't return",
        ],
    ),
    (
        "pricing",
        &["expensive", "overpriced", "ripoff", "rip off", "scam", "too much"],
    ),
    (
        "quality",
        &[
            "poor quality",
            "sloppy",
            "messy",
            "damaged",
            "broke",
            "wrong",
            "mistake",
        ],
    ),
    (
        "communication",
        &[
            "miscommunication",
            "no response",
            "didn't call",
            "no update",
            "couldn't reach",
        ],
    ),
];

/// One complaint snippet per matching keyword: the first `.`-delimited
/// sentence containing it, trimmed.
///
/// The same sentence is returned once per keyword it contains.
#[must_use]
pub fn extract_complaints(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found = Vec::new();
    for keyword in COMPLAINT_KEYWORDS {
        if !lower.contains(keyword) {
            continue;
        }
        if let Some(sentence) = text
            .split('.')
            .find(|s| s.to_lowercase().contains(keyword))
        {
            found.push(sentence.trim().to_string());
        }
    }
    found
}

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn overlap(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.union(b).count().max(1);
    intersection as f64 / union as f64
}

/// Jaccard similarity of the lowercase whitespace-separated word sets.
///
/// Two empty strings overlap by `0.0`.
#[must_use]
pub fn jaccard_overlap(a: &str, b: &str) -> f64 {
    overlap(&word_set(a), &word_set(b))
}

/// Greedy first-seen-wins near-duplicate removal.
///
/// A complaint is dropped when it overlaps any already-kept complaint by more
/// than 0.5; at most `limit` survivors are returned in discovery order.
#[must_use]
pub fn dedupe_complaints(complaints: &[String], limit: usize) -> Vec<String> {
    let mut kept: Vec<(String, HashSet<String>)> = Vec::new();
    for complaint in complaints {
        let words = word_set(complaint);
        let duplicate = kept
            .iter()
            .any(|(_, existing)| overlap(&words, existing) > DUPLICATE_OVERLAP);
        if !duplicate {
            kept.push((complaint.clone(), words));
        }
    }
    kept.into_iter().take(limit).map(|(c, _)| c).collect()
}

/// Themes ordered by number of complaints that hit them, most first.
///
/// Each complaint contributes at most one hit per theme. Ties keep the order in
/// which themes were first encountered.
#[must_use]
pub fn rank_themes(complaints: &[String]) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for complaint in complaints {
        let lower = complaint.to_lowercase();
        for (theme, keywords) in COMPLAINT_THEMES {
            if !keywords.iter().any(|kw| lower.contains(kw)) {
                continue;
            }
            match counts.iter().position(|(t, _)| t == theme) {
                Some(i) => counts[i].1 += 1,
                None => counts.push((*theme, 1)),
            }
        }
    }
    // stable: ties stay in first-encountered order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().map(|(t, _)| t.to_string()).collect()
}
