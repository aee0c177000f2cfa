use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::model::categories::{CategoryKey, category_order};

/// Bounds a raw score to `[0, 100]`. NaN collapses to `0`.
pub fn clamp_percent(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        0.0
    } else if x > 100.0 {
        100.0
    } else {
        x
    }
}

/// Clamped score rounded half away from zero, no decimals.
pub fn format_score(x: f64) -> String {
    format!("{:.0}", clamp_percent(x).round())
}

/// Clamped score with a single decimal, used where the exact value matters.
pub fn format_score_precise(x: f64) -> String {
    format!("{:.1}", (clamp_percent(x) * 10.0).round() / 10.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub key: CategoryKey,
    pub label: &'static str,
    pub score: f64,
    pub display: String,
}

/// Expands a sparse breakdown mapping into one clamped entry per category,
/// in display order. Keys outside the category set are dropped.
pub fn normalize_breakdown(breakdown: &BTreeMap<String, f64>) -> Vec<CategoryScore> {
    for key in breakdown.keys() {
        if CategoryKey::from_key(key).is_none() {
            debug!(key = %key, "ignoring unknown breakdown category");
        }
    }

    category_order()
        .iter()
        .map(|&category| {
            let raw = breakdown.get(category.key()).copied().unwrap_or(0.0);
            CategoryScore {
                key: category,
                label: category.label(),
                score: clamp_percent(raw),
                display: format_score(raw),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
