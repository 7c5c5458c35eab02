//! Configuration module for corkboard.

use serde::Deserialize;
use std::path::Path;

use crate::{CorkboardError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin (development mode).
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8360
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "data/corkboard.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Board policy configuration.
///
/// Controls the listing geometry and the accepted field lengths. The
/// service receives this by value at construction.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Posts shown per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    /// Page links shown per navigation block.
    #[serde(default = "default_block_size")]
    pub block_size: i64,
    /// Maximum title length in characters.
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,
    /// Maximum writer name length in characters.
    #[serde(default = "default_max_writer_len")]
    pub max_writer_len: usize,
    /// Maximum content length in characters.
    #[serde(default = "default_max_content_len")]
    pub max_content_len: usize,
    /// Maximum password length in characters.
    #[serde(default = "default_max_password_len")]
    pub max_password_len: usize,
}

fn default_page_size() -> i64 {
    10
}

fn default_block_size() -> i64 {
    10
}

fn default_max_title_len() -> usize {
    60
}

fn default_max_writer_len() -> usize {
    20
}

fn default_max_content_len() -> usize {
    4000
}

fn default_max_password_len() -> usize {
    60
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            block_size: default_block_size(),
            max_title_len: default_max_title_len(),
            max_writer_len: default_max_writer_len(),
            max_content_len: default_max_content_len(),
            max_password_len: default_max_password_len(),
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
    "logs/corkboard.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Board policy settings.
    #[serde(default)]
    pub board: BoardConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CorkboardError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8360);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.database.path, "data/corkboard.db");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.board.page_size, 10);
        assert_eq!(config.board.block_size, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_empty() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.board.page_size, 10);
        assert_eq!(config.board.max_title_len, 60);
    }

    #[test]
    fn test_parse_partial_section() {
        let config = Config::parse(
            r#"
[server]
port = 9000

[board]
page_size = 20
max_title_len = 100
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        // Unset keys fall back to their defaults
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.board.page_size, 20);
        assert_eq!(config.board.block_size, 10);
        assert_eq!(config.board.max_title_len, 100);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::parse("[server\nport = 9000");
        assert!(matches!(result, Err(CorkboardError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\npath = \"test.db\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.database.path, "test.db");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("does/not/exist.toml");
        assert!(matches!(result, Err(CorkboardError::Io(_))));
    }
}
