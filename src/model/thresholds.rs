#[derive(Debug, Clone)]
pub struct ThresholdProfile {
    pub status_strong_min: f64,
    pub status_moderate_min: f64,
    pub status_weak_min: f64,
    pub low_score_below: f64,
    pub risk_critical_above: f64,
    pub risk_high_above: f64,
    pub risk_medium_above: f64,
    pub top_risks: usize,
    pub badge_star_min: f64,
    pub badge_diamond_min: f64,
}

impl ThresholdProfile {
    pub fn default_v1() -> Self {
        Self {
            status_strong_min: 80.0,
            status_moderate_min: 60.0,
            status_weak_min: 40.0,
            low_score_below: 40.0,
            risk_critical_above: 0.7,
            risk_high_above: 0.5,
            risk_medium_above: 0.3,
            top_risks: 5,
            badge_star_min: 75.0,
            badge_diamond_min: 50.0,
        }
    }
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
