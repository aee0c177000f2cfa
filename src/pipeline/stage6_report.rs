use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Result, ScorecardError};
use crate::model::leaderboard::{LeaderboardEntry, LeaderboardFilter};
use crate::model::result::{ScoreResult, TeamInfo};
use crate::model::status::LeaderboardBadge;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage1_normalize::{
    CategoryScore, clamp_percent, format_score, normalize_breakdown,
};
use crate::pipeline::stage2_status::{
    LowScoreWarning, StatusAssessment, build_low_score_warning, classify_status, leaderboard_badge,
    status_bucket,
};
use crate::pipeline::stage3_risks::{RiskSummary, top_risks};
use crate::pipeline::stage4_gauge::{
    CATEGORY_GAUGE_RADIUS, GaugeGeometry, HERO_GAUGE_RADIUS, gauge_geometry,
};
use crate::pipeline::stage5_rank::rank;
use crate::report::{json, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringView {
    pub score: f64,
    pub score_display: String,
    pub gauge: GaugeGeometry,
    pub status: StatusAssessment,
    pub low_score_warning: Option<LowScoreWarning>,
    pub breakdown: BreakdownView,
    pub risks: RiskSummary,
    pub recommendations: RecommendationsView,
    pub team: TeamView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPanel {
    #[serde(flatten)]
    pub score: CategoryScore,
    pub tone: &'static str,
    pub gauge: GaugeGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "categories", rename_all = "snake_case")]
pub enum BreakdownView {
    Unavailable,
    Categories(Vec<CategoryPanel>),
}

impl BreakdownView {
    pub const EMPTY_MESSAGE: &'static str = "Category data unavailable";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub position: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "snake_case")]
pub enum RecommendationsView {
    Unavailable,
    Items(Vec<Recommendation>),
}

impl RecommendationsView {
    pub const EMPTY_MESSAGE: &'static str = "Recommendations unavailable";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TeamView {
    NotProvided,
    Provided {
        team_size: Option<String>,
        experience: Option<String>,
        key_members: Vec<String>,
        team_strengths: Vec<String>,
        details: Option<String>,
    },
}

impl TeamView {
    pub const EMPTY_MESSAGE: &'static str = "Team information not provided";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub scoring_id: u64,
    pub name: String,
    pub score: f64,
    pub score_display: String,
    pub badge: LeaderboardBadge,
    pub stage: String,
    pub industry: String,
    pub geography: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub filter: LeaderboardFilter,
    pub total_entries: usize,
    pub rows: Vec<LeaderboardRow>,
}

pub fn build_scoring_view(result: &ScoreResult, thresholds: &ThresholdProfile) -> ScoringView {
    let score = clamp_percent(result.total_score);

    let breakdown = if result.breakdown.is_empty() {
        BreakdownView::Unavailable
    } else {
        let panels = normalize_breakdown(&result.breakdown)
            .into_iter()
            .map(|score| CategoryPanel {
                tone: status_bucket(score.score, thresholds).tone(),
                gauge: gauge_geometry(score.score, CATEGORY_GAUGE_RADIUS),
                score,
            })
            .collect();
        BreakdownView::Categories(panels)
    };

    let recommendations = if result.recommendations.is_empty() {
        RecommendationsView::Unavailable
    } else {
        RecommendationsView::Items(
            result
                .recommendations
                .iter()
                .enumerate()
                .map(|(idx, text)| Recommendation {
                    position: idx + 1,
                    text: text.clone(),
                })
                .collect(),
        )
    };

    ScoringView {
        score,
        score_display: format_score(result.total_score),
        gauge: gauge_geometry(score, HERO_GAUGE_RADIUS),
        status: classify_status(result.total_score, thresholds),
        low_score_warning: build_low_score_warning(result.total_score, thresholds),
        breakdown,
        risks: top_risks(&result.risks, thresholds),
        recommendations,
        team: build_team_view(result.team_info.as_ref()),
    }
}

fn build_team_view(team: Option<&TeamInfo>) -> TeamView {
    match team {
        None => TeamView::NotProvided,
        Some(team) => TeamView::Provided {
            team_size: team.team_size.clone().filter(|s| !s.is_empty()),
            experience: team
                .experience_level
                .map(|level| format!("{}/100", format_score(level))),
            key_members: team.key_members.clone(),
            team_strengths: team.team_strengths.clone(),
            details: team.details.clone().filter(|s| !s.is_empty()),
        },
    }
}

pub fn build_leaderboard_view(
    entries: &[LeaderboardEntry],
    filter: &LeaderboardFilter,
    limit: Option<usize>,
    thresholds: &ThresholdProfile,
) -> LeaderboardView {
    let ranked = rank(entries, filter);
    if ranked.is_empty() && !entries.is_empty() {
        warn!(total = entries.len(), "no leaderboard entries match the filter");
    }

    let rows = ranked
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|ranked| {
            let entry = ranked.entry;
            LeaderboardRow {
                rank: ranked.rank,
                scoring_id: entry.scoring_id,
                name: entry.startup.name.clone(),
                score: clamp_percent(entry.score),
                score_display: format_score(entry.score),
                badge: leaderboard_badge(entry.score, thresholds),
                stage: or_dash(entry.startup.stage.as_deref()),
                industry: or_dash(entry.startup.industry.as_deref()),
                geography: or_dash(entry.startup.geography.as_deref()),
            }
        })
        .collect();

    LeaderboardView {
        filter: filter.clone(),
        total_entries: entries.len(),
        rows,
    }
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => crate::report::NOT_AVAILABLE.to_string(),
    }
}

pub fn write_scoring_reports(
    view: &ScoringView,
    out_dir: &Path,
    format: ReportFormat,
) -> Result<Vec<PathBuf>> {
    write_reports(
        out_dir,
        "scoring_report",
        format,
        || text::render_scoring_text(view),
        || json::render_json(view),
    )
}

pub fn write_leaderboard_reports(
    view: &LeaderboardView,
    out_dir: &Path,
    format: ReportFormat,
) -> Result<Vec<PathBuf>> {
    write_reports(
        out_dir,
        "leaderboard",
        format,
        || text::render_leaderboard_text(view),
        || json::render_json(view),
    )
}

fn write_reports(
    out_dir: &Path,
    stem: &str,
    format: ReportFormat,
    render_text: impl FnOnce() -> String,
    render_json: impl FnOnce() -> Result<String>,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|source| ScorecardError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    if matches!(format, ReportFormat::Text | ReportFormat::Both) {
        let path = out_dir.join(format!("{stem}.txt"));
        write_text(&path, &render_text())?;
        written.push(path);
    }
    if matches!(format, ReportFormat::Json | ReportFormat::Both) {
        let path = out_dir.join(format!("{stem}.json"));
        write_text(&path, &render_json()?)?;
        written.push(path);
    }
    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| ScorecardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
