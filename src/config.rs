//! Application Configuration
//!
//! Configuration management for the service, supporting a YAML configuration
//! file with sensible defaults when no file is present.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Storage backend types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum StorageBackend {
    LocalDisk,
    Mock,
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::LocalDisk
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Storage configuration
    pub storage: StorageConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Number of worker threads
    pub workers: usize,
    /// Maximum payload size in bytes
    pub max_payload_size: usize,
}

/// Storage backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend type
    pub backend: StorageBackend,
    /// Root directory holding the per-user folders
    pub root_path: String,
    /// Staging directory for two-phase user deletion
    pub trash_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Path to log configuration file
    pub config_file: String,
}

impl AppConfig {
    /// Load configuration from file, use defaults if not found
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = "config.yaml";
        if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path)?;
            let config: AppConfig = serde_yaml::from_str(&content)?;
            info!("Loaded configuration from {}", config_path);
            Ok(config)
        } else {
            warn!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                workers: 4,
                max_payload_size: 52428800, // 50MB
            },
            storage: StorageConfig {
                backend: StorageBackend::LocalDisk,
                root_path: "registered_faces".to_string(),
                trash_path: "registered_faces/.trash".to_string(),
            },
            logging: LoggingConfig {
                config_file: "server_log.yaml".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.backend, StorageBackend::LocalDisk);
        assert_eq!(config.storage.root_path, "registered_faces");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9000
  workers: 2
  max_payload_size: 1048576
storage:
  backend: Mock
  root_path: "/tmp/faces"
  trash_path: "/tmp/faces/.trash"
logging:
  config_file: "log.yaml"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage.backend, StorageBackend::Mock);
        assert_eq!(config.storage.root_path, "/tmp/faces");
    }
}
