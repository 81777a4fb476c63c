//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌─────────────────────────┐
//!   HTTP / CLI ──▶│  Application + Domain   │──▶ ChurnModel
//!   (inbound)     └─────────────────────────┘    (outbound)
//! ```
//!
//! # Available Ports
//!
//! - [`ChurnModel`] - Positive-class probability for a feature row

pub mod outbound;

pub use outbound::model::ChurnModel;
