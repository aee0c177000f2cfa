use crate::pipeline::stage3_risks::RiskSummary;
use crate::pipeline::stage6_report::{
    BreakdownView, LeaderboardView, RecommendationsView, ScoringView, TeamView,
};
use crate::report::{format_f64_2, pad_right};

pub fn render_scoring_text(view: &ScoringView) -> String {
    let mut out = String::new();

    out.push_str("Pitch Scoring Report\n");
    out.push_str("====================\n\n");

    out.push_str("1. Overall score\n");
    out.push_str(&format!("Score: {}/100\n", view.score_display));
    out.push_str(&format!(
        "Status: {} | {}\n",
        view.status.label, view.status.description
    ));
    out.push_str(&format!(
        "Gauge: r={} circumference={} offset={}\n\n",
        format_f64_2(view.gauge.radius),
        format_f64_2(view.gauge.circumference),
        format_f64_2(view.gauge.dash_offset)
    ));

    if let Some(warning) = &view.low_score_warning {
        out.push_str("Low score warning\n");
        out.push_str(&format!("{}\n\n", warning.message));
    }

    out.push_str("2. Category breakdown\n");
    match &view.breakdown {
        BreakdownView::Unavailable => {
            out.push_str(&format!("{}\n", BreakdownView::EMPTY_MESSAGE));
        }
        BreakdownView::Categories(panels) => {
            for panel in panels {
                out.push_str(&format!(
                    "{} {:>3}  {}\n",
                    pad_right(panel.score.label, 20),
                    panel.score.display,
                    bar(panel.score.score)
                ));
            }
        }
    }
    out.push('\n');

    out.push_str("3. Top risks\n");
    match &view.risks {
        RiskSummary::NoneIdentified => {
            out.push_str(&format!("{}\n", RiskSummary::EMPTY_MESSAGE));
        }
        RiskSummary::Top(risks) => {
            for risk in risks {
                out.push_str(&format!(
                    "{}. {}: {}\n",
                    risk.position, risk.class.label, risk.description
                ));
                if let Some(p) = &risk.probability {
                    out.push_str(&format!("   Probability: {}\n", p));
                }
                if let Some(impact) = &risk.impact {
                    out.push_str(&format!("   Impact: {}\n", impact));
                }
                if let Some(mitigation) = &risk.mitigation {
                    out.push_str(&format!("   Mitigation: {}\n", mitigation));
                }
            }
        }
    }
    out.push('\n');

    out.push_str("4. Recommendations\n");
    match &view.recommendations {
        RecommendationsView::Unavailable => {
            out.push_str(&format!("{}\n", RecommendationsView::EMPTY_MESSAGE));
        }
        RecommendationsView::Items(items) => {
            for item in items {
                out.push_str(&format!("{}. {}\n", item.position, item.text));
            }
        }
    }
    out.push('\n');

    out.push_str("5. Team\n");
    match &view.team {
        TeamView::NotProvided => {
            out.push_str(&format!("{}\n", TeamView::EMPTY_MESSAGE));
        }
        TeamView::Provided {
            team_size,
            experience,
            key_members,
            team_strengths,
            details,
        } => {
            if let Some(size) = team_size {
                out.push_str(&format!("Team size: {}\n", size));
            }
            if let Some(experience) = experience {
                out.push_str(&format!("Experience level: {}\n", experience));
            }
            if !team_strengths.is_empty() {
                out.push_str(&format!("Strengths: {}\n", team_strengths.join(", ")));
            }
            if !key_members.is_empty() {
                out.push_str("Key members:\n");
                for member in key_members {
                    out.push_str(&format!("  - {}\n", member));
                }
            }
            if let Some(details) = details {
                out.push_str(&format!("{}\n", details));
            }
        }
    }

    out
}

pub fn render_leaderboard_text(view: &LeaderboardView) -> String {
    let mut out = String::new();

    out.push_str("Leaderboard\n");
    out.push_str("===========\n\n");
    if view.filter.is_empty() {
        out.push_str("Filter: none\n");
    } else {
        out.push_str(&format!(
            "Filter: industry={} stage={} geography={}\n",
            filter_value(view.filter.industry.as_deref()),
            filter_value(view.filter.stage.as_deref()),
            filter_value(view.filter.geography.as_deref())
        ));
    }
    out.push_str(&format!(
        "Showing {} of {} entries\n\n",
        view.rows.len(),
        view.total_entries
    ));

    if view.rows.is_empty() {
        out.push_str("No startups match the current filter\n");
        return out;
    }

    out.push_str(&format!(
        "{} {} {} {} {}\n",
        pad_right("#", 4),
        pad_right("Company", 28),
        pad_right("Score", 8),
        pad_right("Stage", 12),
        "Industry"
    ));
    for row in &view.rows {
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            pad_right(&row.rank.to_string(), 4),
            pad_right(&row.name, 28),
            pad_right(&format!("{} {}", row.score_display, row.badge.symbol()), 8),
            pad_right(&row.stage, 12),
            row.industry
        ));
    }

    out
}

fn filter_value(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "All",
    }
}

fn bar(percent: f64) -> String {
    let filled = (percent / 5.0).round() as usize;
    let filled = filled.min(20);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
