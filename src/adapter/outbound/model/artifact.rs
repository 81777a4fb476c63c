//! On-disk model artifact format.
//!
//! The artifact is a JSON export of a fitted logistic-regression pipeline:
//! standard scaling for numeric columns, one-hot encoding for categorical
//! columns, then a single linear layer and a sigmoid.
//!
//! ```json
//! {
//!   "name": "telco-churn-logreg",
//!   "version": "1.0",
//!   "intercept": -1.1,
//!   "handle_unknown": "ignore",
//!   "numeric": [
//!     { "feature": "tenure", "mean": 32.4, "scale": 24.6, "weight": -0.9 }
//!   ],
//!   "categorical": [
//!     { "feature": "Contract", "levels": { "Two year": -1.3, "One year": -0.6 } }
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::feature::{CATEGORICAL_COLUMNS, NUMERIC_COLUMNS};
use crate::error::ModelError;

/// How the encoder treats a category it never saw during training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleUnknown {
    /// The category contributes nothing (all-zero one-hot vector).
    #[default]
    Ignore,
    /// The row is rejected with an inference error.
    Error,
}

/// Standard-scaled numeric column.
#[derive(Debug, Clone, Deserialize)]
pub struct NumericTerm {
    pub feature: String,
    pub mean: f64,
    pub scale: f64,
    pub weight: f64,
}

/// One-hot encoded categorical column with one weight per known level.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoricalTerm {
    pub feature: String,
    pub levels: BTreeMap<String, f64>,
}

/// Deserialized artifact, validated by [`ModelArtifact::load`].
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub intercept: f64,
    #[serde(default)]
    pub handle_unknown: HandleUnknown,
    #[serde(default)]
    pub numeric: Vec<NumericTerm>,
    #[serde(default)]
    pub categorical: Vec<CategoricalTerm>,
}

fn default_version() -> String {
    "unversioned".to_string()
}

impl ModelArtifact {
    /// Read, parse and validate an artifact file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid artifact,
    /// or fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: Self = serde_json::from_str(&content).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check that every term targets a known column exactly once and that
    /// every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), ModelError> {
        check_finite("intercept", "intercept", self.intercept)?;

        let mut seen = HashSet::new();

        for term in &self.numeric {
            if !NUMERIC_COLUMNS.contains(&term.feature.as_str()) {
                return Err(ModelError::UnknownFeature {
                    feature: term.feature.clone(),
                });
            }
            if !seen.insert(term.feature.as_str()) {
                return Err(ModelError::DuplicateFeature {
                    feature: term.feature.clone(),
                });
            }
            check_finite(&term.feature, "mean", term.mean)?;
            check_finite(&term.feature, "weight", term.weight)?;
            if !(term.scale.is_finite() && term.scale > 0.0) {
                return Err(ModelError::InvalidParameter {
                    feature: term.feature.clone(),
                    reason: format!("scale must be positive and finite, got {}", term.scale),
                });
            }
        }

        for term in &self.categorical {
            if !CATEGORICAL_COLUMNS.contains(&term.feature.as_str()) {
                return Err(ModelError::UnknownFeature {
                    feature: term.feature.clone(),
                });
            }
            if !seen.insert(term.feature.as_str()) {
                return Err(ModelError::DuplicateFeature {
                    feature: term.feature.clone(),
                });
            }
            if term.levels.is_empty() {
                return Err(ModelError::InvalidParameter {
                    feature: term.feature.clone(),
                    reason: "no levels declared".to_string(),
                });
            }
            for (level, weight) in &term.levels {
                check_finite(&term.feature, level, *weight)?;
            }
        }

        Ok(())
    }
}

fn check_finite(feature: &str, parameter: &str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter {
            feature: feature.to_string(),
            reason: format!("{parameter} must be finite, got {value}"),
        })
    }
}
