//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which backend holds the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    Csv,
}

impl std::str::FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "csv" => Ok(Backend::Csv),
            other => Err(ConfigError::Invalid(format!(
                "unknown backend {:?}, use sqlite or csv",
                other
            ))),
        }
    }
}

/// Data source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_backend")]
    pub backend: Backend,

    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: String,

    #[serde(default = "default_stations_csv")]
    pub stations_csv: String,

    #[serde(default = "default_measurements_csv")]
    pub measurements_csv: String,
}

fn default_backend() -> Backend {
    Backend::Sqlite
}

fn default_sqlite_path() -> String {
    "Resources/hawaii.sqlite".to_string()
}

fn default_stations_csv() -> String {
    "Resources/hawaii_stations.csv".to_string()
}

fn default_measurements_csv() -> String {
    "Resources/hawaii_measurements.csv".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            sqlite_path: default_sqlite_path(),
            stations_csv: default_stations_csv(),
            measurements_csv: default_measurements_csv(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Invalid(error) => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("surfsup").join("config.toml")),
            Some(PathBuf::from("/etc/surfsup/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Data overrides
        if let Some(backend) = var("SURFSUP_BACKEND") {
            match backend.parse() {
                Ok(b) => self.data.backend = b,
                Err(e) => tracing::warn!("Ignoring SURFSUP_BACKEND: {}", e),
            }
        }
        if let Some(path) = var("SURFSUP_DATABASE") {
            self.data.sqlite_path = path;
        }
        if let Some(path) = var("SURFSUP_STATIONS_CSV") {
            self.data.stations_csv = path;
        }
        if let Some(path) = var("SURFSUP_MEASUREMENTS_CSV") {
            self.data.measurements_csv = path;
        }

        // API overrides
        if let Some(host) = var("SURFSUP_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("SURFSUP_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = var("SURFSUP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SURFSUP_LOG_FORMAT") {
            match format.to_lowercase().as_str() {
                "json" => self.logging.format = LogFormat::Json,
                "pretty" => self.logging.format = LogFormat::Pretty,
                other => tracing::warn!("Ignoring SURFSUP_LOG_FORMAT {:?}", other),
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SurfsUp Configuration
#
# Environment variables override these settings:
# - SURFSUP_BACKEND
# - SURFSUP_DATABASE
# - SURFSUP_STATIONS_CSV
# - SURFSUP_MEASUREMENTS_CSV
# - SURFSUP_API_HOST
# - SURFSUP_API_PORT
# - SURFSUP_LOG_LEVEL
# - SURFSUP_LOG_FORMAT

[data]
# Where the dataset lives: sqlite or csv
backend = "sqlite"

# SQLite database with station and measurement tables
sqlite_path = "Resources/hawaii.sqlite"

# CSV files, used when backend = "csv"
stations_csv = "Resources/hawaii_stations.csv"
measurements_csv = "Resources/hawaii_measurements.csv"

[api]
# API server host
host = "127.0.0.1"

# API server port
port = 5000

# Request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
