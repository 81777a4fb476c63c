//! Churn prediction use case.
//!
//! Turns a validated [`CustomerInput`] into a [`PredictionResult`]: derive the
//! feature row, score it once, bucket the raw probability, then round it for
//! the response.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::customer::CustomerInput;
use crate::domain::feature::FeatureRow;
use crate::domain::prediction::{round_probability, PredictionResult};
use crate::domain::risk::assign_risk_and_action;
use crate::error::InferenceError;
use crate::port::ChurnModel;

/// Prediction service over a shared, read-only model.
///
/// Cloning is cheap: clones share the same model.
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<dyn ChurnModel>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn ChurnModel>) -> Self {
        Self { model }
    }

    /// The model backing this service.
    #[must_use]
    pub fn model(&self) -> &dyn ChurnModel {
        self.model.as_ref()
    }

    /// Score one customer.
    ///
    /// Single attempt: model failures are returned as-is, never retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the model fails or yields a non-finite value.
    pub fn predict(&self, input: CustomerInput) -> Result<PredictionResult, InferenceError> {
        let row = FeatureRow::new(input);
        let probability = self.model.predict_proba(&row)?;

        let Some(churn_probability) = round_probability(probability) else {
            return Err(InferenceError::NonFiniteProbability { probability });
        };

        if !(0.0..=1.0).contains(&probability) {
            warn!(
                model = self.model.name(),
                probability, "Model returned a probability outside [0, 1]"
            );
        }

        let (risk_level, recommended_action) = assign_risk_and_action(probability);

        debug!(
            probability,
            risk = %risk_level,
            tenure = row.customer().tenure,
            total_charges = row.total_charges(),
            "Churn prediction computed"
        );

        Ok(PredictionResult {
            churn_probability,
            risk_level,
            recommended_action,
        })
    }
}

impl std::fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionService")
            .field("model", &self.model.name())
            .field("version", &self.model.version())
            .finish()
    }
}
