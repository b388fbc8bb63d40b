//! Loading analysis files and writing plan documents.

use bbf_content::{render_markdown, ContentError, ContentPlanner, PlanDocument};
use bbf_core::OpportunityScore;
use chrono::{TimeZone, Utc};

fn write_analysis(dir: &std::path::Path) -> std::path::PathBuf {
    let mut score = OpportunityScore::new("irrigation systems", "Fresno, CA");
    score.total_businesses = 14;
    score.total_reviews = 620;
    score.low_rated_businesses = 6;
    score.common_complaints = vec![
        "Way too expensive for a simple repair".to_string(),
        "Tech showed up late".to_string(),
    ];
    score.complaint_themes = vec!["pricing".to_string(), "reliability".to_string()];
    score.calculate_score();

    let path = dir.join("analysis_irrigation_systems_20240101_000000.json");
    std::fs::write(&path, serde_json::to_string_pretty(&score).unwrap()).unwrap();
    path
}

#[test]
fn plan_from_analysis_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_analysis(dir.path());

    let mut planner = ContentPlanner::new();
    let loaded = planner.load_analysis(&path).unwrap();
    assert_eq!(loaded.category, "irrigation systems");

    let plan = planner.generate_plan().unwrap();
    assert_eq!(plan.tagline, "Save Money on Irrigation Systems in Fresno");
    assert_eq!(plan.ideas.len(), 5);
    assert_eq!(
        plan.ideas[0].hook,
        "We analyzed hundreds of reviews. The #1 complaint? providers being expensive"
    );
    assert_eq!(
        plan.ideas[2].title,
        "Don't Get Overcharged: Irrigation Systems Pricing in Fresno, CA"
    );
    assert_eq!(plan.social_posts.len(), 4);
}

#[test]
fn missing_analysis_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut planner = ContentPlanner::new();
    let err = planner
        .load_analysis(&dir.path().join("nope.json"))
        .unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }));
    assert!(planner.score().is_none());
}

#[test]
fn plan_document_is_flat_with_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_analysis(dir.path());
    let mut planner = ContentPlanner::new();
    planner.load_analysis(&path).unwrap();
    let plan = planner.generate_plan().unwrap();

    let generated_at = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
    let doc = PlanDocument {
        plan: plan.clone(),
        generated_at,
    };
    let value = serde_json::to_value(&doc).unwrap();
    for key in [
        "niche",
        "location",
        "tagline",
        "ideas",
        "email_sequence",
        "social_posts",
        "generated_at",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["email_sequence"][1]["day"], 2);

    let back: PlanDocument = serde_json::from_value(value).unwrap();
    assert_eq!(back.plan, plan);

    let md = render_markdown(&plan, generated_at.date_naive());
    assert!(md.contains("**Generated:** 2024-02-03"));
}
