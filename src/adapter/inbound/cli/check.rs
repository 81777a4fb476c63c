//! Handler for the `check` command.

use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Validate configuration and load the model without binding a listener.
pub fn execute(config: &Config) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let path = config.model.artifact_path();
    println!("Configuration");
    println!("  bind address : {addr}");
    println!("  model path   : {}", path.display());
    println!("  log level    : {}", config.logging.level);
    println!("  log format   : {}", config.logging.format);

    let model = bootstrap::load_model(config)?;
    println!("Model");
    println!("  name         : {}", model.name());
    println!("  version      : {}", model.version());
    println!("Check passed");
    Ok(())
}
