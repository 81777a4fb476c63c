use churnguard::adapter::inbound::cli::{self, command::Cli};
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let config = match cli::resolve_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "churnguard starting");

    if let Err(e) = cli::dispatch(args, config).await {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("churnguard stopped");
}
