use serde::Serialize;
use tracing::debug;

use crate::model::risk::{RiskLevel, RiskRecord};
use crate::model::thresholds::ThresholdProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskClass {
    pub level: RiskLevel,
    pub label: &'static str,
    pub color: &'static str,
    pub severity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskView {
    pub position: usize,
    pub class: RiskClass,
    pub description: String,
    pub probability: Option<String>,
    pub impact: Option<String>,
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "risks", rename_all = "snake_case")]
pub enum RiskSummary {
    NoneIdentified,
    Top(Vec<RiskView>),
}

impl RiskSummary {
    pub const EMPTY_MESSAGE: &'static str = "No risks identified";
}

/// Single source of truth for a risk's severity. A recognized explicit
/// level wins; otherwise the probability is bucketed, first match wins.
pub fn infer_risk_level(risk: &RiskRecord, thresholds: &ThresholdProfile) -> RiskLevel {
    if let Some(level) = risk.level.as_deref().and_then(RiskLevel::parse) {
        return level;
    }

    match risk.probability {
        Some(p) if p > thresholds.risk_critical_above => RiskLevel::Critical,
        Some(p) if p > thresholds.risk_high_above => RiskLevel::High,
        Some(p) if p > thresholds.risk_medium_above => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

pub fn classify_risk(risk: &RiskRecord, thresholds: &ThresholdProfile) -> RiskClass {
    let level = infer_risk_level(risk, thresholds);
    RiskClass {
        level,
        label: level.label(),
        color: level.color(),
        severity: level.severity(),
    }
}

/// Keeps the leading risks in input order. Input order is authoritative,
/// there is no re-sort by severity.
pub fn top_risks(risks: &[RiskRecord], thresholds: &ThresholdProfile) -> RiskSummary {
    if risks.is_empty() {
        return RiskSummary::NoneIdentified;
    }
    if risks.len() > thresholds.top_risks {
        debug!(
            total = risks.len(),
            kept = thresholds.top_risks,
            "truncating risk list"
        );
    }

    let views = risks
        .iter()
        .take(thresholds.top_risks)
        .enumerate()
        .map(|(idx, risk)| {
            let position = idx + 1;
            RiskView {
                position,
                class: classify_risk(risk, thresholds),
                description: risk
                    .description
                    .clone()
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| format!("Risk {position}")),
                probability: risk.probability.map(format_probability),
                impact: risk.impact.clone().filter(|s| !s.is_empty()),
                mitigation: risk.mitigation.clone().filter(|s| !s.is_empty()),
            }
        })
        .collect::<Vec<_>>();

    if views.is_empty() {
        RiskSummary::NoneIdentified
    } else {
        RiskSummary::Top(views)
    }
}

pub fn format_probability(p: f64) -> String {
    format!("{:.0}%", (p * 100.0).round())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_risks.rs"]
mod tests;
