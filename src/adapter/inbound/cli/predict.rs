//! Handler for the `predict` command.
//!
//! Runs one payload through the same validation and prediction path as
//! `POST /predict` and prints the JSON result.

use std::io::Read;
use std::path::Path;

use crate::adapter::inbound::cli::command::PredictArgs;
use crate::application::prediction::PredictionService;
use crate::domain::customer::CustomerInput;
use crate::domain::prediction::PredictionResult;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute the predict command.
pub fn execute(config: &Config, args: &PredictArgs) -> Result<()> {
    let body = read_input(&args.input)?;
    let service = bootstrap::build_service(config)?;
    let result = predict_bytes(&service, &body)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Validate and score a raw JSON payload.
///
/// # Errors
///
/// Returns a validation error for a bad payload or an inference error if the
/// model fails.
pub fn predict_bytes(service: &PredictionService, body: &[u8]) -> Result<PredictionResult> {
    let input = CustomerInput::from_slice(body)?;
    Ok(service.predict(input)?)
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(path)?)
    }
}
