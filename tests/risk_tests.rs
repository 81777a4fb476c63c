//! Property-style tests for the risk classifier and prediction rounding.

use churnguard::domain::prediction::round_probability;
use churnguard::domain::risk::{
    assign_risk_and_action, RecommendedAction, RiskLevel, LOW_RISK_CEILING, MEDIUM_RISK_CEILING,
};

/// Every `f64` between `from` (inclusive) and `to` (exclusive) at a fine step,
/// plus the values immediately adjacent to the bounds.
fn band(from: f64, to: f64) -> Vec<f64> {
    let mut values: Vec<f64> = (0..=10_000)
        .map(|i| from + (to - from) * f64::from(i) / 10_000.0)
        .filter(|p| *p < to)
        .collect();
    values.push(from);
    values.push(next_down(to));
    values
}

fn next_down(x: f64) -> f64 {
    f64::from_bits(x.to_bits() - 1)
}

#[test]
fn low_band_means_no_action() {
    for p in band(0.0, LOW_RISK_CEILING) {
        assert_eq!(
            assign_risk_and_action(p),
            (RiskLevel::Low, RecommendedAction::NoAction),
            "p = {p}"
        );
    }
}

#[test]
fn medium_band_means_discount() {
    for p in band(LOW_RISK_CEILING, MEDIUM_RISK_CEILING) {
        assert_eq!(
            assign_risk_and_action(p),
            (RiskLevel::Medium, RecommendedAction::DiscountOffer),
            "p = {p}"
        );
    }
}

#[test]
fn high_band_means_retention_call() {
    let mut values = band(MEDIUM_RISK_CEILING, 1.0);
    values.push(1.0);
    for p in values {
        assert_eq!(
            assign_risk_and_action(p),
            (RiskLevel::High, RecommendedAction::RetentionCall),
            "p = {p}"
        );
    }
}

#[test]
fn boundaries_are_exact() {
    assert_eq!(assign_risk_and_action(0.30).0, RiskLevel::Medium);
    assert_eq!(assign_risk_and_action(0.60).0, RiskLevel::High);
    assert_eq!(assign_risk_and_action(0.299999).0, RiskLevel::Low);
    assert_eq!(assign_risk_and_action(next_down(0.30)).0, RiskLevel::Low);
    assert_eq!(assign_risk_and_action(next_down(0.60)).0, RiskLevel::Medium);
}

#[test]
fn out_of_range_inputs_are_high() {
    assert_eq!(assign_risk_and_action(-0.01).0, RiskLevel::High);
    assert_eq!(assign_risk_and_action(1.5).0, RiskLevel::High);
}

#[test]
fn classifier_is_deterministic() {
    for p in [0.0, 0.17, 0.3, 0.45, 0.6, 0.83, 1.0] {
        assert_eq!(assign_risk_and_action(p), assign_risk_and_action(p));
    }
}

#[test]
fn rounding_keeps_three_decimals() {
    for i in 0..=1000 {
        let raw = f64::from(i) / 1000.0 + 0.000_37;
        let rounded = round_probability(raw).unwrap();
        assert!(
            (rounded * 1000.0 - (rounded * 1000.0).round()).abs() < 1e-9,
            "{raw} -> {rounded}"
        );
        assert!((rounded - raw).abs() <= 0.000_5 + 1e-12, "{raw} -> {rounded}");
    }
}
