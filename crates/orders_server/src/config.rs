//! Server configuration.
//!
//! Configuration is resolved from three sources with increasing precedence:
//!
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. environment variables (`FXORDERS_SERVER_*`)
//! 4. command-line arguments
//!
//! # Examples
//!
//! ```
//! use orders_server::config::ServerConfig;
//!
//! let config = ServerConfig::default();
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.host, "0.0.0.0");
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    FileRead {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file could not be parsed as TOML.
    #[error("failed to parse config file '{path}': {source}")]
    FileParse {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// An environment variable held a value of the wrong type.
    #[error("invalid value for {var}: {value}")]
    InvalidEnvVar {
        /// The offending variable name.
        var: String,
        /// The value that failed to parse.
        value: String,
    },

    /// The resolved configuration failed validation.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Logging verbosity for the server process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace-level output.
    Trace,
    /// Debug-level output.
    Debug,
    /// Informational output (default).
    Info,
    /// Warnings only.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::InvalidEnvVar {
                var: "log_level".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Resolved server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory whose contents are served.
    pub root_dir: PathBuf,
    /// Logging verbosity.
    pub log_level: LogLevel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            root_dir: PathBuf::from("."),
            log_level: LogLevel::Info,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("FXORDERS_SERVER_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("FXORDERS_SERVER_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidEnvVar {
                var: "FXORDERS_SERVER_PORT".to_string(),
                value: port,
            })?;
        }
        if let Ok(root) = std::env::var("FXORDERS_SERVER_ROOT") {
            config.root_dir = PathBuf::from(root);
        }
        if let Ok(level) = std::env::var("FXORDERS_LOG_LEVEL") {
            config.log_level = level.parse()?;
        }

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::FileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlays command-line arguments on top of this configuration.
    pub fn merge_with_cli(mut self, cli: &CliArgs) -> Self {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(root) = &cli.root_dir {
            self.root_dir = root.clone();
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        self
    }

    /// Validates the resolved configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !self.root_dir.is_dir() {
            return Err(ConfigError::Validation(format!(
                "root directory '{}' does not exist",
                self.root_dir.display()
            )));
        }
        Ok(())
    }
}

/// Command-line overrides, parsed by the binary and applied last.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Optional path to a TOML config file.
    pub config_file: Option<PathBuf>,
    /// Interface override.
    pub host: Option<String>,
    /// Port override.
    pub port: Option<u16>,
    /// Served directory override.
    pub root_dir: Option<PathBuf>,
    /// Log level override.
    pub log_level: Option<LogLevel>,
}

/// Resolves the effective configuration: file, then environment, then CLI.
pub fn build_config(cli: &CliArgs) -> Result<ServerConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };

    let env_config = ServerConfig::from_env()?;
    let defaults = ServerConfig::default();
    if env_config.host != defaults.host {
        config.host = env_config.host;
    }
    if env_config.port != defaults.port {
        config.port = env_config.port;
    }
    if env_config.root_dir != defaults.root_dir {
        config.root_dir = env_config.root_dir;
    }
    if env_config.log_level != defaults.log_level {
        config.log_level = env_config.log_level;
    }

    let config = config.merge_with_cli(cli);
    config.validate()?;
    Ok(config)
}
