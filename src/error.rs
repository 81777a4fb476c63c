use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::ValidationErrors;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while loading the model artifact at startup.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to read model artifact {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model references unknown feature '{feature}'")]
    UnknownFeature { feature: String },

    #[error("feature '{feature}' is declared more than once")]
    DuplicateFeature { feature: String },

    #[error("invalid parameter for feature '{feature}': {reason}")]
    InvalidParameter { feature: String, reason: String },
}

/// Errors raised by the model while scoring a single row.
#[derive(Error, Debug, Clone)]
pub enum InferenceError {
    #[error("unknown category '{value}' for feature '{feature}'")]
    UnknownCategory { feature: String, value: String },

    #[error("feature '{feature}' is not present in the row")]
    MissingFeature { feature: String },

    #[error("model returned a non-finite probability: {probability}")]
    NonFiniteProbability { probability: f64 },

    #[error("model failure: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
