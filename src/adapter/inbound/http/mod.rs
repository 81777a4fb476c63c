//! HTTP API for churn predictions.
//!
//! # API Endpoints
//!
//! - `GET /` - Returns `{"status": "API running"}`
//! - `POST /predict` - Returns churn probability, risk level and action
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use churnguard::adapter::inbound::http::{start_server, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = Arc::new(AppState::new(service));
//!     start_server(state, "0.0.0.0:8000".parse().unwrap(), std::future::pending())
//!         .await
//!         .unwrap();
//! }
//! ```

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::{create_router, start_server};
pub use state::AppState;
