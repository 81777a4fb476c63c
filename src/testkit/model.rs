//! [`ChurnModel`] test doubles.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::domain::feature::FeatureRow;
use crate::error::InferenceError;
use crate::port::ChurnModel;

/// Model that always returns the same probability and records its inputs.
#[derive(Debug)]
pub struct StubModel {
    probability: f64,
    calls: AtomicUsize,
    last_row: Mutex<Option<FeatureRow>>,
}

impl StubModel {
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            calls: AtomicUsize::new(0),
            last_row: Mutex::new(None),
        }
    }

    /// Number of times the model was asked to score.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent row scored, if any.
    pub fn last_row(&self) -> Option<FeatureRow> {
        self.last_row.lock().clone()
    }
}

impl ChurnModel for StubModel {
    fn name(&self) -> &str {
        "stub"
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_row.lock() = Some(row.clone());
        Ok(self.probability)
    }
}

/// Model that fails every call with [`InferenceError::Backend`].
#[derive(Debug)]
pub struct FailingModel {
    message: String,
}

impl FailingModel {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ChurnModel for FailingModel {
    fn name(&self) -> &str {
        "failing"
    }

    fn predict_proba(&self, _row: &FeatureRow) -> Result<f64, InferenceError> {
        Err(InferenceError::Backend(self.message.clone()))
    }
}
