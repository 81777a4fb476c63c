//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`model`] - [`ChurnModel`](crate::port::ChurnModel) doubles: `StubModel`, `FailingModel`.
//! - [`domain`] - Canonical customer payloads.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod model;
