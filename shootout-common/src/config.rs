//! Service configuration
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments (--database, --host, --port, --read-only)
//! 2. Environment variables (SHOOTOUT_DATABASE, SHOOTOUT_HOST, SHOOTOUT_PORT)
//! 3. TOML configuration file
//! 4. Built-in defaults
//!
//! Levels 1 and 2 both arrive through clap in the binary and are handed over
//! here as `ConfigOverrides`.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Application directory name under the platform config/data dirs
const APP_DIR: &str = "pedal-shootout";

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

/// Bootstrap configuration loaded from TOML file
///
/// Every key is optional; absent keys fall through to built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Path to the SQLite catalog database
    pub database_path: Option<PathBuf>,

    pub host: Option<String>,

    pub port: Option<u16>,

    /// Origins allowed to call the API from a browser
    pub allowed_origins: Option<Vec<String>>,

    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Load TOML configuration from `path`
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an
    /// error.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Config file {} not found, using built-in defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let toml_str = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: TomlConfig = toml::from_str(&toml_str)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;

        info!("Loaded TOML configuration from {}", path.display());
        Ok(config)
    }
}

/// Command-line (and environment) configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub read_only: bool,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub log_level: String,
    /// Open the database with `mode=ro` and skip schema creation
    pub read_only: bool,
}

impl ServiceConfig {
    /// Load the TOML file (default location when `config_path` is `None`)
    /// and merge it with `overrides`
    pub async fn load(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let toml_config = match config_path {
            Some(path) => TomlConfig::load(path).await?,
            None => match default_config_path() {
                Some(path) => TomlConfig::load(&path).await?,
                None => {
                    warn!("No platform config directory, using built-in defaults");
                    TomlConfig::default()
                }
            },
        };

        Ok(Self::resolve(toml_config, overrides))
    }

    /// Merge sources by priority: overrides, then TOML, then defaults
    pub fn resolve(toml_config: TomlConfig, overrides: ConfigOverrides) -> Self {
        Self {
            database_path: overrides
                .database_path
                .or(toml_config.database_path)
                .unwrap_or_else(default_database_path),
            host: overrides
                .host
                .or(toml_config.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(toml_config.port).unwrap_or(DEFAULT_PORT),
            allowed_origins: toml_config
                .allowed_origins
                .unwrap_or_else(|| vec![DEFAULT_ALLOWED_ORIGIN.to_string()]),
            log_level: toml_config.logging.level,
            read_only: overrides.read_only,
        }
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `<config_dir>/pedal-shootout/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// `<data_local_dir>/pedal-shootout/pedals.db`, or `./pedals.db` when the
/// platform has no data directory
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pedals.db")
}
