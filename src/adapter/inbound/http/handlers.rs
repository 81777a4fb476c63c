//! HTTP API handlers.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use serde::Serialize;
use tracing::debug;

use super::error::ApiError;
use super::state::AppState;
use crate::domain::customer::CustomerInput;
use crate::domain::prediction::PredictionResult;

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler. Always reports the process as serving.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "API running",
    })
}

/// Churn prediction handler.
///
/// The body is validated before the model is touched; a rejected payload
/// never reaches inference.
pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PredictionResult>, ApiError> {
    let input = CustomerInput::from_slice(&body).map_err(|errors| {
        debug!(errors = %errors, "Rejected prediction payload");
        errors
    })?;

    let result = state.predictions.predict(input)?;
    Ok(Json(result))
}
