//! Canonical test configurations.

use std::path::Path;

use crate::infrastructure::config::settings::Config;

/// Default config bound to an ephemeral localhost port, pointing at `model`.
pub fn local(model: &Path) -> Config {
    let mut config = Config::default();
    config.server.bind_addr = "127.0.0.1:0".to_string();
    config.model.path = Some(model.to_path_buf());
    config
}

/// A small but complete logistic artifact covering every column.
pub const SAMPLE_ARTIFACT: &str = r#"{
  "name": "telco-churn-logreg",
  "version": "test",
  "intercept": -1.0,
  "numeric": [
    { "feature": "tenure", "mean": 32.0, "scale": 24.0, "weight": -1.2 },
    { "feature": "MonthlyCharges", "mean": 65.0, "scale": 30.0, "weight": 0.6 }
  ],
  "categorical": [
    { "feature": "Contract", "levels": { "Month-to-month": 0.9, "One year": -0.4, "Two year": -1.4 } },
    { "feature": "InternetService", "levels": { "Fiber optic": 0.5, "DSL": -0.2, "No": -0.6 } }
  ]
}"#;
