//! Churnguard - telecom churn prediction service.
//!
//! Loads a pre-trained binary classifier once at startup and serves one
//! prediction endpoint. Each request is validated, scored, bucketed into a
//! risk level and answered with a recommended retention action.
//!
//! # Architecture
//!
//! - **`domain`** - Customer payload validation, feature row, risk buckets
//! - **`port`** - The [`ChurnModel`](port::ChurnModel) trait the model sits behind
//! - **`application`** - The prediction use case
//! - **`adapter`** - HTTP API and CLI (inbound), logistic model (outbound)
//! - **`infrastructure`** - Configuration, logging and runtime wiring
//!
//! # Risk policy
//!
//! | probability    | risk   | action                        |
//! |----------------|--------|-------------------------------|
//! | `[0.00, 0.30)` | Low    | No Action                     |
//! | `[0.30, 0.60)` | Medium | Email / SMS Discount          |
//! | `[0.60, 1.00]` | High   | Call Center + Retention Offer |
//!
//! # Example
//!
//! ```no_run
//! use churnguard::infrastructure::{bootstrap, Config};
//!
//! # async fn run() -> churnguard::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! bootstrap::serve(&config).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
