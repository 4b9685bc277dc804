//! Service configuration
//!
//! Resolution order, later wins:
//! 1. Built-in defaults
//! 2. Optional JSON config file (a missing file means defaults)
//! 3. Environment variables (`APP_*`, `PAGINATION_*`, `LOG_*`)
//! 4. Explicit CLI overrides (applied by the caller)
//!
//! The result is validated before use.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::risk::PaginationDefaults;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Application / listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Service name (default: "risk-tracker")
    #[serde(default = "default_name")]
    pub name: String,

    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Default pagination window for list requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default)]
    pub offset: usize,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "pretty" or "json" (default: "pretty")
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_name() -> String {
    "risk-tracker".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_limit() -> usize {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl PaginationConfig {
    pub fn defaults(&self) -> PaginationDefaults {
        PaginationDefaults {
            limit: self.limit,
            offset: self.offset,
        }
    }
}

impl AppConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from an optional file plus the process environment
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Read a JSON config file; a missing file yields defaults
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        Ok(serde_json::from_str(&content)?)
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("APP_NAME") {
            self.app.name = name;
        }
        if let Some(host) = lookup("APP_HOST") {
            self.app.host = host;
        }
        if let Some(port) = lookup("APP_PORT") {
            self.app.port = parse_env("APP_PORT", &port)?;
        }
        if let Some(limit) = lookup("PAGINATION_LIMIT") {
            self.pagination.limit = parse_env("PAGINATION_LIMIT", &limit)?;
        }
        if let Some(offset) = lookup("PAGINATION_OFFSET") {
            self.pagination.offset = parse_env("PAGINATION_OFFSET", &offset)?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.log.format = format;
        }
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.app.port == 0 {
            return Err(ConfigError::Invalid("app.port must be > 0".to_string()));
        }

        if self.pagination.limit == 0 {
            return Err(ConfigError::Invalid(
                "pagination.limit must be > 0".to_string(),
            ));
        }

        if self.log.format != "pretty" && self.log.format != "json" {
            return Err(ConfigError::Invalid(format!(
                "log.format must be 'pretty' or 'json', got '{}'",
                self.log.format
            )));
        }

        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> ConfigResult<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.pagination.limit, 10);
        assert_eq!(config.pagination.offset, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let mut config = Config::default();
        config.app.port = 9000;
        assert_eq!(config.app.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"pagination":{"limit":25}}"#).unwrap();
        assert_eq!(config.pagination.limit, 25);
        assert_eq!(config.pagination.offset, 0);
        assert_eq!(config.app, AppConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                ("APP_PORT", "9090"),
                ("PAGINATION_LIMIT", "5"),
                ("PAGINATION_OFFSET", "1"),
                ("LOG_FORMAT", "json"),
            ]))
            .unwrap();

        assert_eq!(config.app.port, 9090);
        assert_eq!(config.pagination.defaults(), PaginationDefaults { limit: 5, offset: 1 });
        assert_eq!(config.log.format, "json");
    }

    #[test]
    fn test_bad_env_value_rejected() {
        let mut config = Config::default();
        let err = config.apply_env(env(&[("APP_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    }

    #[test]
    fn test_zero_limit_invalid() {
        let mut config = Config::default();
        config.pagination.limit = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_log_format_invalid() {
        let mut config = Config::default();
        config.log.format = "xml".to_string();
        assert!(config.validate().is_err());
    }
}
