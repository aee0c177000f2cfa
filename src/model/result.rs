use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::null_as_default;
use crate::model::risk::RiskRecord;

/// One scoring run for a pitch, as returned by the scoring service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub breakdown: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub risks: Vec<RiskRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub team_info: Option<TeamInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamInfo {
    pub team_size: Option<String>,
    pub experience_level: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub key_members: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub team_strengths: Vec<String>,
    pub details: Option<String>,
}
