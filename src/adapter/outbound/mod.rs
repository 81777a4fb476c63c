//! Outbound adapters (driven side).

pub mod model;
