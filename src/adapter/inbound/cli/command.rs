//! Command-line interface definitions.
//!
//! Defines the CLI structure using `clap`. Without a subcommand the service
//! starts serving HTTP.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Telecom churn prediction service
#[derive(Parser, Debug)]
#[command(name = "churnguard")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file [default: ./config.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the model artifact path
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve the HTTP API (default)
    Serve(ServeArgs),

    /// Validate configuration and load the model without serving
    Check,

    /// Score one customer from a JSON file and print the result
    Predict(PredictArgs),
}

/// Arguments for `serve`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Override the bind address (e.g. 127.0.0.1:8000)
    #[arg(long)]
    pub bind: Option<String>,
}

/// Arguments for `predict`.
#[derive(clap::Args, Debug, Clone)]
pub struct PredictArgs {
    /// JSON file holding one customer payload ("-" reads stdin)
    #[arg(short, long)]
    pub input: PathBuf,
}
