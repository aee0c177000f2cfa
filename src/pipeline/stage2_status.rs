use serde::Serialize;

use crate::model::status::{LeaderboardBadge, ScoreStatus};
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage1_normalize::format_score_precise;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusAssessment {
    pub status: ScoreStatus,
    pub label: &'static str,
    pub description: &'static str,
    pub tone: &'static str,
    pub low_score_warning: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowScoreWarning {
    pub score: String,
    pub message: String,
}

/// Buckets the overall score. Works on the unclamped value; each bucket is
/// inclusive on its lower bound.
pub fn classify_status(score: f64, thresholds: &ThresholdProfile) -> StatusAssessment {
    let status = status_bucket(score, thresholds);
    StatusAssessment {
        status,
        label: status.label(),
        description: status.description(),
        tone: status.tone(),
        low_score_warning: low_score_warning(score, thresholds),
    }
}

pub fn status_bucket(score: f64, thresholds: &ThresholdProfile) -> ScoreStatus {
    let score = finite_or_zero(score);
    if score >= thresholds.status_strong_min {
        ScoreStatus::Strong
    } else if score >= thresholds.status_moderate_min {
        ScoreStatus::Moderate
    } else if score >= thresholds.status_weak_min {
        ScoreStatus::Weak
    } else {
        ScoreStatus::VeryWeak
    }
}

pub fn low_score_warning(score: f64, thresholds: &ThresholdProfile) -> bool {
    finite_or_zero(score) < thresholds.low_score_below
}

pub fn build_low_score_warning(
    score: f64,
    thresholds: &ThresholdProfile,
) -> Option<LowScoreWarning> {
    if !low_score_warning(score, thresholds) {
        return None;
    }
    let shown = format_score_precise(score);
    let message = format!(
        "The score is very low ({shown}) because the pitch document lacks information. \
         Add more detail about the product, team, financials, business model and market \
         opportunity for a more accurate assessment."
    );
    Some(LowScoreWarning {
        score: shown,
        message,
    })
}

pub fn leaderboard_badge(score: f64, thresholds: &ThresholdProfile) -> LeaderboardBadge {
    let score = finite_or_zero(score);
    if score >= thresholds.badge_star_min {
        LeaderboardBadge::Star
    } else if score >= thresholds.badge_diamond_min {
        LeaderboardBadge::Diamond
    } else {
        LeaderboardBadge::Circle
    }
}

fn finite_or_zero(score: f64) -> f64 {
    if score.is_nan() { 0.0 } else { score }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_status.rs"]
mod tests;
