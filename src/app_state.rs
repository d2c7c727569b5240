//! Application State Management
//!
//! This module provides the application state that contains the registry
//! service and its dependencies, following the dependency injection pattern.

use std::sync::Arc;

use log::info;

use crate::config::{AppConfig, StorageBackend};
use crate::service::registry_service::RegistryService;
use crate::storage::{local_store::LocalFaceStore, mock_store::MockFaceStore, FaceStore};

/// Application state containing all services and their dependencies
#[derive(Clone)]
pub struct AppState {
    pub registry_service: Arc<RegistryService>,
    pub config: AppConfig,
}

impl AppState {
    /// Create a new application state with services configured from YAML config
    pub fn new() -> Self {
        let config = AppConfig::load().expect("Failed to load configuration");
        Self::from_config(config)
    }

    /// Create application state from configuration
    pub fn from_config(config: AppConfig) -> Self {
        let store: Arc<dyn FaceStore> = match config.storage.backend {
            StorageBackend::LocalDisk => {
                info!(
                    "Using local disk storage backend with root_path: {}, trash_path: {}",
                    config.storage.root_path, config.storage.trash_path
                );
                Arc::new(LocalFaceStore::new(&config.storage))
            }
            StorageBackend::Mock => {
                info!("Using mock storage backend");
                Arc::new(MockFaceStore::new())
            }
        };

        let registry_service = Arc::new(RegistryService::new(store));

        info!("Application state initialized successfully");
        Self {
            registry_service,
            config,
        }
    }

    /// Create application state for testing with the mock backend
    pub fn new_for_testing() -> Self {
        let config = AppConfig::default();
        let store: Arc<dyn FaceStore> = Arc::new(MockFaceStore::new());
        let registry_service = Arc::new(RegistryService::new(store));

        Self {
            registry_service,
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
