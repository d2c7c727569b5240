//! Face Storage Layer Abstraction
//!
//! This module provides an abstraction over face image storage backends,
//! allowing the system to use different implementations (local directories,
//! in-memory mock) without affecting higher-level services.

pub mod local_store;
pub mod mock_store;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Directory prefix identifying a user folder inside the root directory.
pub const USER_DIR_PREFIX: &str = "user_";

/// Extension given to every stored image.
pub const IMAGE_EXTENSION: &str = "jpg";

/// One user as reported by a store listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserEntry {
    pub user_id: String,
    pub image_count: usize,
    pub folder_path: String,
}

/// Trait defining the face storage interface
pub trait FaceStore: Send + Sync {
    /// Persist an already-encoded JPEG for a user, creating the user lazily.
    /// Returns the generated filename.
    fn save_image(&self, user_id: &str, jpeg_bytes: &[u8]) -> Result<String, RegistryError>;

    /// Number of stored images for a user. The user must exist.
    fn image_count(&self, user_id: &str) -> Result<usize, RegistryError>;

    /// All known users in backend enumeration order.
    fn list_users(&self) -> Result<Vec<UserEntry>, RegistryError>;

    /// Image filenames for a user. `UserNotFound` if the user does not exist.
    fn list_images(&self, user_id: &str) -> Result<Vec<String>, RegistryError>;

    /// Remove a user and every stored image. `UserNotFound` if absent.
    fn delete_user(&self, user_id: &str) -> Result<(), RegistryError>;
}

/// Generate a fresh image filename: a random hex token plus the fixed extension.
pub fn new_image_filename() -> String {
    format!("{}.{}", uuid::Uuid::new_v4().simple(), IMAGE_EXTENSION)
}
