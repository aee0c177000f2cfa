use super::*;
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_leaderboard_defaults() {
    let cli = Cli::try_parse_from([
        "pitch-scorecard",
        "leaderboard",
        "--input",
        "entries.json",
        "--industry",
        "Tech",
    ])
    .unwrap();
    let Command::Leaderboard(args) = cli.command else {
        panic!("expected leaderboard command");
    };
    assert_eq!(args.limit, 50);
    assert_eq!(args.output.format, ReportFormat::Text);
    assert!(args.output.out.is_none());
    let filter = args.filter();
    assert_eq!(filter.industry.as_deref(), Some("Tech"));
    assert_eq!(filter.stage, None);
}

#[test]
fn test_parse_scoring_with_output() {
    let cli = Cli::try_parse_from([
        "pitch-scorecard",
        "--verbose",
        "scoring",
        "--input",
        "result.json",
        "--out",
        "out",
        "--format",
        "both",
    ])
    .unwrap();
    assert!(cli.verbose);
    let Command::Scoring(args) = cli.command else {
        panic!("expected scoring command");
    };
    assert_eq!(args.input, PathBuf::from("result.json"));
    assert_eq!(args.output.out, Some(PathBuf::from("out")));
    assert_eq!(args.output.format, ReportFormat::Both);
}

#[test]
fn test_parse_rejects_missing_input() {
    assert!(Cli::try_parse_from(["pitch-scorecard", "scoring"]).is_err());
}

#[test]
fn test_run_writes_scoring_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("result.json");
    std::fs::write(&input, r#"{"total_score": 64, "breakdown": {"team": 70}}"#).unwrap();
    let out = dir.path().join("out");

    let cli = Cli::try_parse_from([
        "pitch-scorecard",
        "scoring",
        "--input",
        input.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--format",
        "json",
    ])
    .unwrap();
    run(&cli).unwrap();

    let raw = std::fs::read_to_string(out.join("scoring_report.json")).unwrap();
    assert!(raw.contains("\"label\": \"Moderate\""));
}
