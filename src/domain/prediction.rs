//! Prediction result returned to callers.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::risk::{RecommendedAction, RiskLevel};

/// Decimal places kept in the reported probability.
pub const PROBABILITY_DECIMALS: u32 = 3;

/// Outcome of one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub churn_probability: f64,
    pub risk_level: RiskLevel,
    pub recommended_action: RecommendedAction,
}

/// Round a probability to [`PROBABILITY_DECIMALS`] places, ties to even.
///
/// Rounding goes through the exact decimal expansion of the `f64`, so a value
/// such as `0.4445` (stored as `0.44449999...`) rounds down, not up.
/// Returns `None` for non-finite input.
#[must_use]
pub fn round_probability(probability: f64) -> Option<f64> {
    if !probability.is_finite() {
        return None;
    }
    match Decimal::from_f64_retain(probability) {
        Some(exact) => exact
            .round_dp_with_strategy(PROBABILITY_DECIMALS, RoundingStrategy::MidpointNearestEven)
            .to_f64(),
        // Outside Decimal's range; only reachable for far out-of-range model output.
        None => Some((probability * 1000.0).round() / 1000.0),
    }
}
