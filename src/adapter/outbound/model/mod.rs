//! Model adapters implementing `port::ChurnModel`.

pub mod artifact;
pub mod logistic;

pub use artifact::{HandleUnknown, ModelArtifact};
pub use logistic::LogisticModel;
