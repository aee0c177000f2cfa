use super::*;
use crate::model::leaderboard::{LeaderboardEntry, LeaderboardFilter, StartupSummary};
use crate::model::result::ScoreResult;
use crate::model::risk::RiskRecord;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage6_report::{build_leaderboard_view, build_scoring_view};

#[test]
fn test_scoring_text_sections() {
    let result = ScoreResult {
        total_score: 82.0,
        risks: vec![RiskRecord {
            description: Some("Competition".to_string()),
            probability: Some(0.6),
            mitigation: Some("Differentiate".to_string()),
            ..Default::default()
        }],
        recommendations: vec!["Show traction".to_string()],
        ..Default::default()
    };
    let view = build_scoring_view(&result, &ThresholdProfile::default_v1());
    let out = render_scoring_text(&view);

    assert!(out.contains("Score: 82/100"));
    assert!(out.contains("Status: Strong | Investment ready"));
    assert!(out.contains("Category data unavailable"));
    assert!(out.contains("1. HIGH: Competition"));
    assert!(out.contains("Probability: 60%"));
    assert!(out.contains("Mitigation: Differentiate"));
    assert!(out.contains("1. Show traction"));
    assert!(out.contains("Team information not provided"));
    assert!(!out.contains("Low score warning"));
}

#[test]
fn test_scoring_text_low_score() {
    let view = build_scoring_view(&ScoreResult::default(), &ThresholdProfile::default_v1());
    let out = render_scoring_text(&view);
    assert!(out.contains("Low score warning"));
    assert!(out.contains("No risks identified"));
    assert!(out.contains("Recommendations unavailable"));
}

#[test]
fn test_leaderboard_text() {
    let entries = vec![LeaderboardEntry {
        scoring_id: 7,
        score: 77.7,
        startup: StartupSummary {
            name: "Acme".to_string(),
            industry: Some("Tech".to_string()),
            stage: None,
            geography: None,
        },
    }];
    let view = build_leaderboard_view(
        &entries,
        &LeaderboardFilter::default(),
        None,
        &ThresholdProfile::default_v1(),
    );
    let out = render_leaderboard_text(&view);
    assert!(out.contains("Filter: none"));
    assert!(out.contains("Showing 1 of 1 entries"));
    assert!(out.contains("Acme"));
    assert!(out.contains("78 *"));
}

#[test]
fn test_leaderboard_text_empty() {
    let view = build_leaderboard_view(
        &[],
        &LeaderboardFilter::default(),
        None,
        &ThresholdProfile::default_v1(),
    );
    assert!(render_leaderboard_text(&view).contains("No startups match the current filter"));
}

#[test]
fn test_leaderboard_text_filter_line() {
    let entries = vec![LeaderboardEntry {
        scoring_id: 3,
        score: 40.0,
        startup: StartupSummary {
            name: "Orbit".to_string(),
            industry: Some("SaaS".to_string()),
            stage: Some("Seed".to_string()),
            geography: None,
        },
    }];
    let filter = LeaderboardFilter {
        industry: Some("SaaS".to_string()),
        stage: Some(String::new()),
        geography: None,
    };
    let view = build_leaderboard_view(&entries, &filter, None, &ThresholdProfile::default_v1());
    let out = render_leaderboard_text(&view);
    assert!(out.contains("Filter: industry=SaaS stage=All geography=All"));
    assert!(!out.contains("Filter: none"));
}
