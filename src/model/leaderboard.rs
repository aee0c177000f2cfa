use serde::{Deserialize, Serialize};

use crate::model::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub scoring_id: u64,
    pub score: f64,
    pub startup: StartupSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub industry: Option<String>,
    pub stage: Option<String>,
    pub geography: Option<String>,
}

/// Categorical leaderboard filter. An absent or empty field places no
/// constraint on the corresponding startup attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeaderboardFilter {
    pub industry: Option<String>,
    pub stage: Option<String>,
    pub geography: Option<String>,
}

impl LeaderboardFilter {
    pub fn is_empty(&self) -> bool {
        [&self.industry, &self.stage, &self.geography]
            .iter()
            .all(|f| f.as_deref().is_none_or(str::is_empty))
    }
}
