//! CLI module graph.

pub mod check;
pub mod command;
pub mod predict;
pub mod run;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

use command::{Cli, Commands, ServeArgs};

/// Resolve configuration for a parsed command line.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or validated.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(model) = &cli.model {
        config.model.path = Some(model.clone());
    }
    Ok(config)
}

/// Dispatch a parsed command line. Logging must already be initialized.
///
/// # Errors
///
/// Returns whatever the selected command fails with.
pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => run::execute(config, &args).await,
        Commands::Check => check::execute(&config),
        Commands::Predict(args) => predict::execute(&config, &args),
    }
}
