use super::*;
use crate::commands::ExportFormat;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["bbf"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_discover_with_defaults() {
    let cli = Cli::try_parse_from(["bbf", "discover", "lawn care", "Boise, ID"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Discover {
            ref query,
            ref location,
            max: 20,
            save_db: false,
            with_reviews: None,
        }) if query == "lawn care" && location == "Boise, ID"
    ));
}

#[test]
fn parses_discover_flags() {
    let cli = Cli::try_parse_from([
        "bbf",
        "discover",
        "septic services",
        "Tulsa, OK",
        "-m",
        "50",
        "--save-db",
        "--with-reviews",
        "8",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Discover {
            max: 50,
            save_db: true,
            with_reviews: Some(8),
            ..
        })
    ));
}

#[test]
fn discover_requires_location() {
    assert!(Cli::try_parse_from(["bbf", "discover", "lawn care"]).is_err());
}

#[test]
fn parses_analyze_overrides() {
    let cli = Cli::try_parse_from([
        "bbf",
        "analyze",
        "-i",
        "data/scrape_1.json",
        "--category",
        "pool service",
        "-l",
        "Mesa, AZ",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Analyze {
            input,
            category,
            location,
        }) => {
            assert_eq!(input, Some(PathBuf::from("data/scrape_1.json")));
            assert_eq!(category.as_deref(), Some("pool service"));
            assert_eq!(location.as_deref(), Some("Mesa, AZ"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_content_without_input() {
    let cli = Cli::try_parse_from(["bbf", "content"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Content { input: None })));
}

#[test]
fn export_defaults_to_csv_with_limit() {
    let cli = Cli::try_parse_from(["bbf", "export"]).unwrap();
    let Some(Commands::Export(args)) = cli.command else {
        panic!("expected export");
    };
    assert_eq!(args.format, ExportFormat::Csv);
    assert_eq!(args.limit, 100);
    assert!(args.columns.is_none());

    let filter = args.filter();
    assert_eq!(filter.has_website, None);
    assert_eq!(filter.limit, Some(100));
}

#[test]
fn export_filters_map_onto_lead_filter() {
    let cli = Cli::try_parse_from([
        "bbf",
        "export",
        "-f",
        "outreach",
        "-c",
        "tree",
        "--state",
        "NC",
        "--max-rating",
        "3.9",
        "--no-website",
        "--min-reviews",
        "10",
        "--columns",
        "name,phone",
        "-o",
        "trees.csv",
    ])
    .unwrap();
    let Some(Commands::Export(args)) = cli.command else {
        panic!("expected export");
    };
    assert_eq!(args.format, ExportFormat::Outreach);
    assert_eq!(args.output.as_deref(), Some("trees.csv"));
    assert_eq!(
        args.columns,
        Some(vec!["name".to_string(), "phone".to_string()])
    );

    let filter = args.filter();
    assert_eq!(filter.category.as_deref(), Some("tree"));
    assert_eq!(filter.state.as_deref(), Some("NC"));
    assert_eq!(filter.max_rating, Some(3.9));
    assert_eq!(filter.has_website, Some(false));
    assert_eq!(filter.min_reviews, Some(10));
}

#[test]
fn export_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["bbf", "export", "--format", "xml"]).is_err());
}

#[test]
fn parses_pipeline() {
    let cli = Cli::try_parse_from(["bbf", "pipeline", "junk removal", "Reno, NV", "--max", "40"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Pipeline { max: 40, .. })
    ));
}

#[test]
fn parses_store_commands() {
    assert!(matches!(
        Cli::try_parse_from(["bbf", "stats"]).unwrap().command,
        Some(Commands::Stats)
    ));
    assert!(matches!(
        Cli::try_parse_from(["bbf", "ideas"]).unwrap().command,
        Some(Commands::Ideas)
    ));
    assert!(matches!(
        Cli::try_parse_from(["bbf", "history"]).unwrap().command,
        Some(Commands::History { limit: 20 })
    ));
    assert!(matches!(
        Cli::try_parse_from(["bbf", "search", "--city", "Reno", "--limit", "5"])
            .unwrap()
            .command,
        Some(Commands::Search {
            category: None,
            city: Some(ref c),
            limit: 5,
        }) if c == "Reno"
    ));
    assert!(matches!(
        Cli::try_parse_from(["bbf", "import", "-i", "x.json"]).unwrap().command,
        Some(Commands::Import { input: Some(_) })
    ));
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
