//! Composition root: turns a [`Config`] into a running service.
//!
//! The model is loaded exactly once here. A missing or corrupt artifact is a
//! startup error and the listener is never bound.

use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};

use crate::adapter::inbound::http::state::{AppState, API_VERSION, SERVICE_TITLE};
use crate::adapter::inbound::http::start_server;
use crate::adapter::outbound::model::LogisticModel;
use crate::application::prediction::PredictionService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::ChurnModel;

/// Load the model artifact named by the configuration.
///
/// # Errors
///
/// Returns an error if the artifact is missing, unreadable or invalid.
pub fn load_model(config: &Config) -> Result<Arc<dyn ChurnModel>> {
    let path = config.model.artifact_path();
    let model = LogisticModel::load(&path)?;
    Ok(Arc::new(model))
}

/// Build the prediction service over the configured model.
///
/// # Errors
///
/// Returns an error if the model cannot be loaded.
pub fn build_service(config: &Config) -> Result<PredictionService> {
    Ok(PredictionService::new(load_model(config)?))
}

/// Build the shared HTTP state.
///
/// # Errors
///
/// Returns an error if the model cannot be loaded.
pub fn build_state(config: &Config) -> Result<Arc<AppState>> {
    Ok(Arc::new(AppState::new(build_service(config)?)))
}

/// Load everything and serve HTTP until Ctrl-C.
///
/// # Errors
///
/// Returns an error if configuration, model loading or binding fails.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let state = build_state(config)?;

    let model = state.predictions.model();
    info!(
        service = SERVICE_TITLE,
        api_version = API_VERSION,
        model = model.name(),
        model_version = model.version(),
        "Service ready"
    );

    start_server(state, addr, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
