use std::f64::consts::PI;

use serde::Serialize;

use crate::pipeline::stage1_normalize::clamp_percent;

/// Radius of the overall-score ring.
pub const HERO_GAUGE_RADIUS: f64 = 90.0;
/// Radius of the per-category rings.
pub const CATEGORY_GAUGE_RADIUS: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeGeometry {
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

/// Stroke-dash parameters for a ring filled to `percent`. `radius` must be
/// positive.
pub fn gauge_geometry(percent: f64, radius: f64) -> GaugeGeometry {
    let percent = clamp_percent(percent);
    let circumference = 2.0 * PI * radius;
    let dash_offset = circumference - (percent / 100.0) * circumference;
    GaugeGeometry {
        radius,
        circumference,
        dash_offset,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_gauge.rs"]
mod tests;
