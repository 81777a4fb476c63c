//! Tests for the one-shot CLI prediction path.

mod support;

use std::ffi::OsString;
use std::sync::Arc;

use churnguard::adapter::inbound::cli::command::Cli;
use churnguard::adapter::inbound::cli::predict::predict_bytes;
use churnguard::adapter::inbound::cli::resolve_config;
use churnguard::application::PredictionService;
use churnguard::domain::risk::RiskLevel;
use churnguard::error::Error;
use churnguard::testkit::domain::sample_payload;
use churnguard::testkit::model::StubModel;
use clap::Parser;

#[test]
fn predict_bytes_matches_http_semantics() {
    let service = PredictionService::new(Arc::new(StubModel::new(0.45)));
    let result = predict_bytes(&service, sample_payload().to_string().as_bytes()).unwrap();

    assert_eq!(result.churn_probability, 0.45);
    assert_eq!(result.risk_level, RiskLevel::Medium);
}

#[test]
fn predict_bytes_rejects_non_json() {
    let service = PredictionService::new(Arc::new(StubModel::new(0.45)));
    assert!(matches!(
        predict_bytes(&service, b"gender=Female"),
        Err(Error::Validation(_))
    ));
}

#[test]
fn model_flag_overrides_config() {
    let config_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config.toml");
    let model_path = support::shipped_model_path();

    let args: Vec<OsString> = vec![
        "churnguard".into(),
        "--config".into(),
        config_path.into_os_string(),
        "--model".into(),
        model_path.clone().into_os_string(),
        "check".into(),
    ];
    let cli = Cli::try_parse_from(args).unwrap();

    let config = resolve_config(&cli).unwrap();
    assert_eq!(config.model.artifact_path(), model_path);
}
