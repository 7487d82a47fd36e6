//! Server configuration
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line flags or their environment variables.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default listen address
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Default location of the todo file, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "tmp/todos.json";

/// Runtime configuration for the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub addr: String,
    /// JSON file backing the store
    pub data_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(self.addr.clone()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;

        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataPath);
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid listen address: {0}")]
    InvalidAddr(String),

    #[error("data_path must not be empty")]
    EmptyDataPath,
}

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "todo-server", version, about = "HTTP server for a file-backed todo list")]
pub struct CliArgs {
    /// Path to a TOML config file
    #[arg(long, env = "TODO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Socket address to listen on
    #[arg(long, env = "TODO_ADDR")]
    pub addr: Option<String>,

    /// JSON file backing the store
    #[arg(long, env = "TODO_DATA_PATH")]
    pub data_path: Option<PathBuf>,
}

impl CliArgs {
    /// Merge arguments over the config file (if any) and defaults
    pub fn resolve(self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(addr) = self.addr {
            config.addr = addr;
        }
        if let Some(data_path) = self.data_path {
            config.data_path = data_path;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(config.data_path, PathBuf::from("tmp/todos.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml(r#"addr = "127.0.0.1:9000""#).unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000");
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ServerConfig::from_toml("addr = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate() {
        let bad_addr = ServerConfig {
            addr: ":8080".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad_addr.validate(), Err(ConfigError::InvalidAddr(_))));

        let empty_path = ServerConfig {
            data_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(empty_path.validate(), Err(ConfigError::EmptyDataPath)));
    }

    #[test]
    fn test_cli_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("todo.toml");
        std::fs::write(
            &config_path,
            "addr = \"127.0.0.1:9000\"\ndata_path = \"/var/lib/todo/todos.json\"\n",
        )
        .unwrap();

        let args = CliArgs {
            config: Some(config_path),
            addr: Some("127.0.0.1:7000".to_string()),
            data_path: None,
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.addr, "127.0.0.1:7000");
        assert_eq!(config.data_path, PathBuf::from("/var/lib/todo/todos.json"));
    }

    #[test]
    fn test_cli_missing_config_file() {
        let args = CliArgs {
            config: Some(PathBuf::from("/nonexistent/todo.toml")),
            addr: None,
            data_path: None,
        };
        assert!(matches!(args.resolve(), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_cli_parse_flags() {
        let args = CliArgs::try_parse_from([
            "todo-server",
            "--addr",
            "127.0.0.1:3000",
            "--data-path",
            "data/todos.json",
        ])
        .unwrap();
        assert_eq!(args.addr.as_deref(), Some("127.0.0.1:3000"));
        assert_eq!(args.data_path, Some(PathBuf::from("data/todos.json")));
    }
}
