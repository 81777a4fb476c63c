//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all service settings.
//! Configuration is read from a TOML file; every section is optional and
//! falls back to defaults. `CHURNGUARD_BIND_ADDR` and `CHURNGUARD_MODEL_PATH`
//! override the file.
//!
//! # Example
//!
//! ```no_run
//! use churnguard::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Artifact file name looked up next to the executable.
pub const DEFAULT_MODEL_FILE: &str = "model.json";

/// Environment variable overriding [`ServerConfig::bind_addr`].
pub const BIND_ADDR_ENV: &str = "CHURNGUARD_BIND_ADDR";

/// Environment variable overriding [`ModelConfig::path`].
pub const MODEL_PATH_ENV: &str = "CHURNGUARD_MODEL_PATH";

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind (e.g. "0.0.0.0:8000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl ServerConfig {
    /// Parsed bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if `bind_addr` is empty or not a socket address.
    pub fn socket_addr(&self) -> std::result::Result<SocketAddr, ConfigError> {
        if self.bind_addr.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "server.bind_addr",
            });
        }
        self.bind_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "server.bind_addr",
                reason: e.to_string(),
            })
    }
}

/// Model artifact settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    /// Path to the artifact. When unset, `model.json` next to the executable.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl ModelConfig {
    /// Resolved artifact path.
    #[must_use]
    pub fn artifact_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => executable_dir().join(DEFAULT_MODEL_FILE),
        }
    }
}

fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Model artifact location.
    #[serde(default)]
    pub model: ModelConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies environment overrides, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `explicit` if given, else from [`DEFAULT_CONFIG_FILE`] if it
    /// exists, else use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or if whichever
    /// source is used fails to parse or validate.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Self::load(fallback);
        }
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(BIND_ADDR_ENV) {
            self.server.bind_addr = addr;
        }
        if let Some(path) = lookup(MODEL_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            self.model.path = Some(PathBuf::from(path));
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.server.socket_addr()?;
        if let Some(path) = &self.model.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "model.path",
                });
            }
        }
        self.logging.validate()
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
