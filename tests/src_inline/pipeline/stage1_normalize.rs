use super::*;

#[test]
fn test_clamp_percent_bounds() {
    assert_eq!(clamp_percent(-5.0), 0.0);
    assert_eq!(clamp_percent(150.0), 100.0);
    assert_eq!(clamp_percent(42.0), 42.0);
    assert_eq!(clamp_percent(0.0), 0.0);
    assert_eq!(clamp_percent(100.0), 100.0);
}

#[test]
fn test_clamp_percent_degenerate_values() {
    assert_eq!(clamp_percent(f64::NAN), 0.0);
    assert_eq!(clamp_percent(f64::INFINITY), 100.0);
    assert_eq!(clamp_percent(f64::NEG_INFINITY), 0.0);
    assert!(clamp_percent(-0.0).is_sign_positive());
}

#[test]
fn test_clamp_percent_is_idempotent() {
    for x in [-20.0, 0.0, 12.5, 99.99, 100.0, 250.0] {
        let once = clamp_percent(x);
        assert_eq!(clamp_percent(once), once);
        assert!((0.0..=100.0).contains(&once));
    }
}

#[test]
fn test_format_score_rounds_clamped_value() {
    assert_eq!(format_score(42.4), "42");
    assert_eq!(format_score(42.5), "43");
    assert_eq!(format_score(79.6), "80");
    assert_eq!(format_score(150.0), "100");
    assert_eq!(format_score(-3.0), "0");
    assert_eq!(format_score(-0.4), "0");
}

#[test]
fn test_format_score_precise_one_decimal() {
    assert_eq!(format_score_precise(12.34), "12.3");
    assert_eq!(format_score_precise(0.0), "0.0");
    assert_eq!(format_score_precise(120.0), "100.0");
}

#[test]
fn test_normalize_breakdown_fills_all_categories() {
    let mut breakdown = BTreeMap::new();
    breakdown.insert("team".to_string(), 55.0);
    breakdown.insert("financials".to_string(), 120.0);
    breakdown.insert("unknown_category".to_string(), 10.0);

    let out = normalize_breakdown(&breakdown);
    assert_eq!(out.len(), 8);

    let keys = out.iter().map(|c| c.key).collect::<Vec<_>>();
    assert_eq!(keys, category_order().to_vec());

    let team = out.iter().find(|c| c.key == CategoryKey::Team).unwrap();
    assert_eq!(team.score, 55.0);
    assert_eq!(team.label, "Team");

    let financials = out.iter().find(|c| c.key == CategoryKey::Financials).unwrap();
    assert_eq!(financials.score, 100.0);
    assert_eq!(financials.display, "100");

    let traction = out.iter().find(|c| c.key == CategoryKey::Traction).unwrap();
    assert_eq!(traction.score, 0.0);
    assert_eq!(traction.display, "0");
}

#[test]
fn test_normalize_breakdown_empty_map_defaults_to_zero() {
    let out = normalize_breakdown(&BTreeMap::new());
    assert_eq!(out.len(), 8);
    assert!(out.iter().all(|c| c.score == 0.0));
}

#[test]
fn test_category_key_roundtrip() {
    for &category in category_order() {
        assert_eq!(CategoryKey::from_key(category.key()), Some(category));
    }
    assert_eq!(CategoryKey::from_key("Team"), None);
}
