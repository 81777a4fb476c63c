//! Churn risk buckets and the retention action attached to each.

use std::fmt;

use serde::Serialize;

/// Probabilities below this are [`RiskLevel::Low`].
pub const LOW_RISK_CEILING: f64 = 0.30;

/// Probabilities below this (and not Low) are [`RiskLevel::Medium`].
pub const MEDIUM_RISK_CEILING: f64 = 0.60;

/// Risk bucket derived from a churn probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// The retention action the business runs for this bucket.
    #[must_use]
    pub const fn action(self) -> RecommendedAction {
        match self {
            Self::Low => RecommendedAction::NoAction,
            Self::Medium => RecommendedAction::DiscountOffer,
            Self::High => RecommendedAction::RetentionCall,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Retention action recommended for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecommendedAction {
    #[serde(rename = "No Action")]
    NoAction,
    #[serde(rename = "Email / SMS Discount")]
    DiscountOffer,
    #[serde(rename = "Call Center + Retention Offer")]
    RetentionCall,
}

impl RecommendedAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoAction => "No Action",
            Self::DiscountOffer => "Email / SMS Discount",
            Self::RetentionCall => "Call Center + Retention Offer",
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a churn probability to its risk bucket and action.
///
/// | probability    | risk   | action                        |
/// |----------------|--------|-------------------------------|
/// | `[0.00, 0.30)` | Low    | No Action                     |
/// | `[0.30, 0.60)` | Medium | Email / SMS Discount          |
/// | otherwise      | High   | Call Center + Retention Offer |
///
/// Thresholds are compared with strict less-than, so a value equal to a
/// threshold lands in the higher bucket. Nothing is rejected: inputs outside
/// `[0, 1]`, including negatives and NaN, fall through to High.
///
/// ```
/// use churnguard::domain::risk::{assign_risk_and_action, RiskLevel, RecommendedAction};
///
/// assert_eq!(
///     assign_risk_and_action(0.30),
///     (RiskLevel::Medium, RecommendedAction::DiscountOffer)
/// );
/// ```
#[must_use]
pub fn assign_risk_and_action(probability: f64) -> (RiskLevel, RecommendedAction) {
    let level = if (0.0..LOW_RISK_CEILING).contains(&probability) {
        RiskLevel::Low
    } else if (0.0..MEDIUM_RISK_CEILING).contains(&probability) {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };
    (level, level.action())
}
