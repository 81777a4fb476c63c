#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use churnguard::adapter::inbound::http::AppState;
use churnguard::application::PredictionService;
use churnguard::port::ChurnModel;
use serde_json::Value;

/// Shared HTTP state over `model`.
pub fn state_with(model: Arc<dyn ChurnModel>) -> Arc<AppState> {
    Arc::new(AppState::new(PredictionService::new(model)))
}

/// `POST` a JSON body to `uri`.
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collect and decode a JSON response body.
pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Path to the artifact shipped with the repository.
pub fn shipped_model_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("models/churn_model.json")
}
