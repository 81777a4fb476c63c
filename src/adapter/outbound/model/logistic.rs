//! Logistic-regression scorer over a [`ModelArtifact`].

use std::path::Path;

use tracing::{debug, info};

use super::artifact::{CategoricalTerm, HandleUnknown, ModelArtifact, NumericTerm};
use crate::domain::feature::FeatureRow;
use crate::error::{InferenceError, ModelError};
use crate::port::ChurnModel;

/// Immutable logistic pipeline. Scoring allocates nothing and touches no
/// shared state, so one instance serves all requests concurrently.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    artifact: ModelArtifact,
}

impl LogisticModel {
    /// Load and validate an artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact is missing, unreadable or invalid.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let artifact = ModelArtifact::load(path)?;
        info!(
            path = %path.display(),
            model = %artifact.name,
            version = %artifact.version,
            numeric_terms = artifact.numeric.len(),
            categorical_terms = artifact.categorical.len(),
            "Model artifact loaded"
        );
        Ok(Self { artifact })
    }

    /// Wrap an already parsed artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact fails validation.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        artifact.validate()?;
        Ok(Self { artifact })
    }

    #[must_use]
    pub const fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// Linear score before the sigmoid.
    fn logit(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        let mut z = self.artifact.intercept;
        for term in &self.artifact.numeric {
            z += self.numeric_contribution(term, row)?;
        }
        for term in &self.artifact.categorical {
            z += self.categorical_contribution(term, row)?;
        }
        Ok(z)
    }

    fn numeric_contribution(&self, term: &NumericTerm, row: &FeatureRow) -> Result<f64, InferenceError> {
        let value = row
            .numeric(&term.feature)
            .ok_or_else(|| InferenceError::MissingFeature {
                feature: term.feature.clone(),
            })?;
        Ok((value - term.mean) / term.scale * term.weight)
    }

    fn categorical_contribution(
        &self,
        term: &CategoricalTerm,
        row: &FeatureRow,
    ) -> Result<f64, InferenceError> {
        let value = row
            .categorical(&term.feature)
            .ok_or_else(|| InferenceError::MissingFeature {
                feature: term.feature.clone(),
            })?;
        match term.levels.get(value) {
            Some(weight) => Ok(*weight),
            None => match self.artifact.handle_unknown {
                HandleUnknown::Ignore => {
                    debug!(feature = %term.feature, value, "Unseen category ignored");
                    Ok(0.0)
                }
                HandleUnknown::Error => Err(InferenceError::UnknownCategory {
                    feature: term.feature.clone(),
                    value: value.to_string(),
                }),
            },
        }
    }
}

impl ChurnModel for LogisticModel {
    fn name(&self) -> &str {
        &self.artifact.name
    }

    fn version(&self) -> &str {
        &self.artifact.version
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        self.logit(row).map(sigmoid)
    }
}

/// Numerically stable logistic function.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
