//! Transport-agnostic domain types and decision logic.
//!
//! - [`customer`] - Validated customer payload
//! - [`feature`] - Feature row handed to the model
//! - [`risk`] - Risk buckets and retention actions
//! - [`prediction`] - Result type and probability rounding
//! - [`error`] - Field-level validation errors

pub mod customer;
pub mod error;
pub mod feature;
pub mod prediction;
pub mod risk;

pub use customer::CustomerInput;
pub use error::{FieldError, FieldErrorKind, ValidationErrors};
pub use feature::FeatureRow;
pub use prediction::PredictionResult;
pub use risk::{assign_risk_and_action, RecommendedAction, RiskLevel};
