//! Churn model port.
//!
//! The model is an opaque collaborator: the service only needs the
//! probability mass it assigns to the positive ("churn") class for one row.
//!
//! # Thread Safety
//!
//! A single instance is loaded at startup and shared by every request, so
//! implementations must be `Send + Sync` and must not mutate shared state
//! while scoring.

use crate::domain::feature::FeatureRow;
use crate::error::InferenceError;

/// Binary classifier that scores one feature row.
pub trait ChurnModel: Send + Sync {
    /// Return the model name for logging.
    fn name(&self) -> &str;

    /// Return the model version for logging.
    fn version(&self) -> &str {
        "unversioned"
    }

    /// Probability that the customer churns.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be scored (e.g. an unseen category
    /// under a strict encoder, or a backend failure).
    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, InferenceError>;
}
