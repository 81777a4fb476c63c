//! Handler for the `serve` command.

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute the serve command.
pub async fn execute(mut config: Config, args: &ServeArgs) -> Result<()> {
    if let Some(bind) = &args.bind {
        config.server.bind_addr = bind.clone();
        config.validate()?;
    }
    bootstrap::serve(&config).await
}
