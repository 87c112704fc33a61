//! Configuration module for learnhub.

use serde::Deserialize;
use std::path::Path;

use crate::{LearnError, Result};

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins (empty = any origin, no credentials).
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/learnhub.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Upload storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    /// Root directory for stored uploads.
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
    /// Maximum upload size in megabytes.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_mb: u64,
    /// Upper bound for a single file write, in seconds.
    #[serde(default = "default_write_timeout")]
    pub write_timeout_secs: u64,
}

fn default_storage_path() -> String {
    "data/uploads".to_string()
}

fn default_max_upload_size() -> u64 {
    50
}

fn default_write_timeout() -> u64 {
    30
}

impl FilesConfig {
    /// Maximum upload size in bytes.
    pub fn max_upload_size_bytes(&self) -> usize {
        (self.max_upload_size_mb as usize).saturating_mul(1024 * 1024)
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            max_upload_size_mb: default_max_upload_size(),
            write_timeout_secs: default_write_timeout(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/learnhub.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Upload storage configuration.
    #[serde(default)]
    pub files: FilesConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(LearnError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| LearnError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `LEARNHUB_DATABASE_PATH`: database file path
    /// - `LEARNHUB_STORAGE_PATH`: upload storage root
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("LEARNHUB_DATABASE_PATH") {
            if !path.is_empty() {
                self.database.path = path;
            }
        }
        if let Ok(path) = std::env::var("LEARNHUB_STORAGE_PATH") {
            if !path.is_empty() {
                self.files.storage_path = path;
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.files.max_upload_size_mb == 0 {
            return Err(LearnError::Config(
                "files.max_upload_size_mb must be greater than 0".to_string(),
            ));
        }
        if self.files.write_timeout_secs == 0 {
            return Err(LearnError::Config(
                "files.write_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.cors_origins.is_empty());

        assert_eq!(config.database.path, "data/learnhub.db");

        assert_eq!(config.files.storage_path, "data/uploads");
        assert_eq!(config.files.max_upload_size_mb, 50);
        assert_eq!(config.files.write_timeout_secs, 30);
        assert_eq!(config.files.max_upload_size_bytes(), 50 * 1024 * 1024);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/learnhub.log");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 3000
cors_origins = ["http://localhost:5173"]

[database]
path = "custom/lms.db"

[files]
storage_path = "custom/uploads"
max_upload_size_mb = 5
write_timeout_secs = 10

[logging]
level = "debug"
file = "custom/logs/app.log"
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.database.path, "custom/lms.db");
        assert_eq!(config.files.storage_path, "custom/uploads");
        assert_eq!(config.files.max_upload_size_mb, 5);
        assert_eq!(config.files.write_timeout_secs, 10);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "custom/logs/app.log");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[server]
port = 9000
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.path, "data/learnhub.db");
        assert_eq!(config.files.max_upload_size_mb, 50);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.files.storage_path, "data/uploads");
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("this is not valid toml [[[");

        match result {
            Err(LearnError::Config(msg)) => assert!(msg.contains("config parse error")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("nonexistent-learnhub.toml");
        assert!(matches!(result, Err(LearnError::Io(_))));
    }

    #[test]
    fn test_apply_env_overrides() {
        let original_db = std::env::var("LEARNHUB_DATABASE_PATH").ok();
        let original_storage = std::env::var("LEARNHUB_STORAGE_PATH").ok();

        std::env::set_var("LEARNHUB_DATABASE_PATH", "env/lms.db");
        std::env::set_var("LEARNHUB_STORAGE_PATH", "");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.database.path, "env/lms.db");
        // Empty values do not override
        assert_eq!(config.files.storage_path, "data/uploads");

        match original_db {
            Some(val) => std::env::set_var("LEARNHUB_DATABASE_PATH", val),
            None => std::env::remove_var("LEARNHUB_DATABASE_PATH"),
        }
        match original_storage {
            Some(val) => std::env::set_var("LEARNHUB_STORAGE_PATH", val),
            None => std::env::remove_var("LEARNHUB_STORAGE_PATH"),
        }
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = Config::default();
        config.files.max_upload_size_mb = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.files.write_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(Config::default().validate().is_ok());
    }
}
