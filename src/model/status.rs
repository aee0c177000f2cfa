use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Strong,
    Moderate,
    Weak,
    VeryWeak,
}

impl ScoreStatus {
    pub fn label(self) -> &'static str {
        match self {
            ScoreStatus::Strong => "Strong",
            ScoreStatus::Moderate => "Moderate",
            ScoreStatus::Weak => "Weak",
            ScoreStatus::VeryWeak => "Very weak",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScoreStatus::Strong => "Investment ready",
            ScoreStatus::Moderate => "Needs improvement",
            ScoreStatus::Weak => "Needs significant improvement",
            ScoreStatus::VeryWeak => "Insufficient information — add more detail to the pitch",
        }
    }

    /// Presentation tone token for score-colored elements.
    pub fn tone(self) -> &'static str {
        match self {
            ScoreStatus::Strong => "success",
            ScoreStatus::Moderate => "primary",
            ScoreStatus::Weak => "risk-medium",
            ScoreStatus::VeryWeak => "destructive",
        }
    }
}

/// Marker shown next to a score in the leaderboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardBadge {
    Star,
    Diamond,
    Circle,
}

impl LeaderboardBadge {
    pub fn symbol(self) -> &'static str {
        match self {
            LeaderboardBadge::Star => "*",
            LeaderboardBadge::Diamond => "+",
            LeaderboardBadge::Circle => "o",
        }
    }
}
