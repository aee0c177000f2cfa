use serde::{Deserialize, Serialize};

/// A risk as produced by the scoring service. Every field is optional.
///
/// `level` stays a raw string so that an unknown value coming over the wire
/// degrades to probability inference instead of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskRecord {
    pub description: Option<String>,
    pub probability: Option<f64>,
    pub impact: Option<String>,
    pub mitigation: Option<String>,
    pub level: Option<String>,
}

/// Severity bucket. Variant order is severity order, so `Critical > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "critical" => Some(RiskLevel::Critical),
            "high" => Some(RiskLevel::High),
            "medium" => Some(RiskLevel::Medium),
            "low" => Some(RiskLevel::Low),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Critical => "CRITICAL",
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Low => "LOW",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Critical => "risk-critical",
            RiskLevel::High => "risk-high",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::Low => "risk-low",
        }
    }

    pub fn severity(self) -> u8 {
        match self {
            RiskLevel::Critical => 3,
            RiskLevel::High => 2,
            RiskLevel::Medium => 1,
            RiskLevel::Low => 0,
        }
    }
}
