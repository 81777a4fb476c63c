//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: HTTP API and CLI
//! - [`outbound`] - Driven side: model backends

pub mod inbound;
pub mod outbound;
