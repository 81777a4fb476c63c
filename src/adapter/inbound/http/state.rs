//! Application state shared across all handlers.

use crate::application::prediction::PredictionService;

/// Service name reported at startup.
pub const SERVICE_TITLE: &str = "Telecom Churn Prediction API";

/// Public API version.
pub const API_VERSION: &str = "1.0";

/// Read-only state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Prediction use case over the loaded model.
    pub predictions: PredictionService,
}

impl AppState {
    pub fn new(predictions: PredictionService) -> Self {
        Self { predictions }
    }
}
