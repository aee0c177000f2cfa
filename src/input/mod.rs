use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, ScorecardError};
use crate::model::leaderboard::LeaderboardEntry;
use crate::model::result::ScoreResult;

pub fn load_score_result(path: &Path) -> Result<ScoreResult> {
    let result: ScoreResult = read_json(path)?;
    debug!(
        path = %path.display(),
        categories = result.breakdown.len(),
        risks = result.risks.len(),
        "loaded scoring result"
    );
    Ok(result)
}

pub fn load_leaderboard(path: &Path) -> Result<Vec<LeaderboardEntry>> {
    let entries: Vec<LeaderboardEntry> = read_json(path)?;
    debug!(path = %path.display(), entries = entries.len(), "loaded leaderboard");
    Ok(entries)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| ScorecardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ScorecardError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
