//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dataset::MetricCategory;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            cors_origins: Vec::new(),
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Category shown before any control has been activated
    #[serde(default = "default_category")]
    pub default_category: MetricCategory,

    /// Serve the Mega Mart overview page
    #[serde(default = "default_overview_enabled")]
    pub overview_enabled: bool,
}

fn default_category() -> MetricCategory {
    MetricCategory::Sales
}

fn default_overview_enabled() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            overview_enabled: default_overview_enabled(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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
            dirs::config_dir().map(|p| p.join("retail-insights").join("config.toml")),
            Some(PathBuf::from("/etc/retail-insights/config.toml")),
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
        if let Ok(host) = std::env::var("INSIGHTS_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("INSIGHTS_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Ok(category) = std::env::var("INSIGHTS_DEFAULT_CATEGORY") {
            if let Ok(c) = category.parse() {
                self.dashboard.default_category = c;
            }
        }
        if let Ok(overview) = std::env::var("INSIGHTS_OVERVIEW_ENABLED") {
            self.dashboard.overview_enabled = overview.to_lowercase() != "false" && overview != "0";
        }

        if let Ok(level) = std::env::var("INSIGHTS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("INSIGHTS_LOG_FORMAT") {
            self.logging.format = format;
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
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Retail Insights Hub Configuration
#
# Environment variables override these settings:
# - INSIGHTS_API_HOST
# - INSIGHTS_API_PORT
# - INSIGHTS_DEFAULT_CATEGORY
# - INSIGHTS_OVERVIEW_ENABLED
# - INSIGHTS_LOG_LEVEL
# - INSIGHTS_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins (empty = permissive)
cors_origins = []

[dashboard]
# Category shown before any control has been activated:
# sales, customers, inventory, marketing, supply-chain
default_category = "sales"

# Serve the Mega Mart overview page
overview_enabled = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8090);
        assert_eq!(config.dashboard.default_category, MetricCategory::Sales);
        assert!(config.dashboard.overview_enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            [api]
            port = 9000

            [dashboard]
            default_category = "customers"
            overview_enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.dashboard.default_category, MetricCategory::Customers);
        assert!(!config.dashboard.overview_enabled);
    }

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.addr(), "0.0.0.0:8090");
    }

    #[test]
    fn test_addr() {
        let api = ApiConfig::new("127.0.0.1", 8091);
        assert_eq!(api.addr(), "127.0.0.1:8091");
    }

    // Environment variables are process-global, so all override cases
    // run in one test to avoid interference between parallel tests.
    #[test]
    fn test_env_overrides() {
        std::env::set_var("INSIGHTS_API_PORT", "9100");
        std::env::set_var("INSIGHTS_DEFAULT_CATEGORY", "marketing");
        std::env::set_var("INSIGHTS_OVERVIEW_ENABLED", "false");

        let config = Config::from_env();
        assert_eq!(config.api.port, 9100);
        assert_eq!(
            config.dashboard.default_category,
            MetricCategory::Marketing
        );
        assert!(!config.dashboard.overview_enabled);

        // "0" also disables the overview
        std::env::set_var("INSIGHTS_OVERVIEW_ENABLED", "0");
        assert!(!Config::from_env().dashboard.overview_enabled);

        // Unparseable values are ignored, defaults retained
        std::env::set_var("INSIGHTS_API_PORT", "not-a-port");
        std::env::set_var("INSIGHTS_DEFAULT_CATEGORY", "revenue");
        std::env::set_var("INSIGHTS_OVERVIEW_ENABLED", "true");

        let config = Config::from_env();
        assert_eq!(config.api.port, 8090);
        assert_eq!(config.dashboard.default_category, MetricCategory::Sales);
        assert!(config.dashboard.overview_enabled);

        std::env::remove_var("INSIGHTS_API_PORT");
        std::env::remove_var("INSIGHTS_DEFAULT_CATEGORY");
        std::env::remove_var("INSIGHTS_OVERVIEW_ENABLED");
    }
}
