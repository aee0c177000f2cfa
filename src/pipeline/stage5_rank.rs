use serde::Serialize;

use crate::model::leaderboard::{LeaderboardEntry, LeaderboardFilter};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub entry: &'a LeaderboardEntry,
}

pub fn matches_filter(entry: &LeaderboardEntry, filter: &LeaderboardFilter) -> bool {
    field_matches(entry.startup.industry.as_deref(), filter.industry.as_deref())
        && field_matches(entry.startup.stage.as_deref(), filter.stage.as_deref())
        && field_matches(entry.startup.geography.as_deref(), filter.geography.as_deref())
}

fn field_matches(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None | Some("") => true,
        Some(wanted) => value == Some(wanted),
    }
}

/// Filters, then orders by score descending. The sort is stable, so equal
/// scores keep their input order, and every position gets its own rank.
pub fn rank<'a>(
    entries: &'a [LeaderboardEntry],
    filter: &LeaderboardFilter,
) -> Vec<RankedEntry<'a>> {
    let mut kept = entries
        .iter()
        .filter(|e| matches_filter(e, filter))
        .collect::<Vec<_>>();
    kept.sort_by(|a, b| sort_key(b.score).total_cmp(&sort_key(a.score)));

    kept.into_iter()
        .enumerate()
        .map(|(idx, entry)| RankedEntry {
            rank: idx + 1,
            entry,
        })
        .collect()
}

/// Raw score with NaN and negative zero folded onto `0.0`, so they tie with
/// a real zero. Values above 100 keep their magnitude.
fn sort_key(score: f64) -> f64 {
    if score.is_nan() || score == 0.0 {
        0.0
    } else {
        score
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_rank.rs"]
mod tests;
