//! End-to-end tests for the HTTP API.

mod support;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use churnguard::adapter::inbound::http::create_router;
use churnguard::testkit::domain::{payload_without, sample_payload};
use churnguard::testkit::model::StubModel;
use serde_json::json;
use tower::util::ServiceExt;

use support::{json_body, post_json, state_with};

#[tokio::test]
async fn health_check_reports_running() {
    let app = create_router(state_with(Arc::new(StubModel::new(0.1))));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "API running" }));
}

#[tokio::test]
async fn medium_risk_scenario() {
    let stub = Arc::new(StubModel::new(0.45));
    let app = create_router(state_with(stub.clone()));

    let mut payload = sample_payload();
    payload["tenure"] = json!(12);
    payload["MonthlyCharges"] = json!(70.0);

    let response = app.oneshot(post_json("/predict", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "churn_probability": 0.45,
            "risk_level": "Medium",
            "recommended_action": "Email / SMS Discount"
        })
    );

    let row = stub.last_row().expect("model was called");
    assert_eq!(row.total_charges(), 840.0);
}

#[tokio::test]
async fn each_bucket_maps_to_its_action() {
    let cases = [
        (0.05, "Low", "No Action"),
        (0.30, "Medium", "Email / SMS Discount"),
        (0.60, "High", "Call Center + Retention Offer"),
        (0.999_6, "High", "Call Center + Retention Offer"),
    ];

    for (probability, risk, action) in cases {
        let app = create_router(state_with(Arc::new(StubModel::new(probability))));
        let response = app
            .oneshot(post_json("/predict", &sample_payload()))
            .await
            .unwrap();

        let body = json_body(response).await;
        assert_eq!(body["risk_level"], risk, "p = {probability}");
        assert_eq!(body["recommended_action"], action, "p = {probability}");
    }
}

#[tokio::test]
async fn probability_is_rounded_in_response() {
    let app = create_router(state_with(Arc::new(StubModel::new(0.123_456_7))));

    let response = app
        .oneshot(post_json("/predict", &sample_payload()))
        .await
        .unwrap();

    assert_eq!(json_body(response).await["churn_probability"], json!(0.123));
}

#[tokio::test]
async fn missing_tenure_is_rejected_before_inference() {
    let stub = Arc::new(StubModel::new(0.45));
    let app = create_router(state_with(stub.clone()));

    let response = app
        .oneshot(post_json("/predict", &payload_without("tenure")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["detail"][0]["loc"], json!(["body", "tenure"]));
    assert_eq!(body["detail"][0]["type"], "missing");
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn mistyped_fields_are_all_reported() {
    let stub = Arc::new(StubModel::new(0.45));
    let app = create_router(state_with(stub.clone()));

    let mut payload = sample_payload();
    payload["SeniorCitizen"] = json!("no");
    payload["MonthlyCharges"] = json!("seventy");

    let response = app.oneshot(post_json("/predict", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    let types: Vec<_> = body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| (d["loc"][1].clone(), d["type"].clone()))
        .collect();
    assert_eq!(
        types,
        vec![
            (json!("SeniorCitizen"), json!("int_type")),
            (json!("MonthlyCharges"), json!("float_type")),
        ]
    );
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn identical_requests_yield_identical_results() {
    let app = create_router(state_with(Arc::new(StubModel::new(0.612_3))));

    let first = app
        .clone()
        .oneshot(post_json("/predict", &sample_payload()))
        .await
        .unwrap();
    let second = app
        .oneshot(post_json("/predict", &sample_payload()))
        .await
        .unwrap();

    assert_eq!(json_body(first).await, json_body(second).await);
}

#[tokio::test]
async fn concurrent_requests_share_one_model() {
    let stub = Arc::new(StubModel::new(0.2));
    let app = create_router(state_with(stub.clone()));

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                app.oneshot(post_json("/predict", &sample_payload()))
                    .await
                    .unwrap()
                    .status()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }
    assert_eq!(stub.calls(), 32);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = create_router(state_with(Arc::new(StubModel::new(0.1))));

    let response = app
        .oneshot(Request::builder().uri("/predict/batch").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
