//! Mock implementation of FaceStore trait for testing

use crate::error::RegistryError;
use crate::storage::{FaceStore, UserEntry, USER_DIR_PREFIX};
use log::info;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory face store: user_id -> filename -> image bytes
pub struct MockFaceStore {
    data: Arc<Mutex<HashMap<String, HashMap<String, Vec<u8>>>>>,
}

impl MockFaceStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get the number of users in the store
    pub fn user_count(&self) -> usize {
        let data = self.data.lock().unwrap();
        data.len()
    }

    /// Check if a user exists in the store
    pub fn user_exists(&self, user_id: &str) -> bool {
        let data = self.data.lock().unwrap();
        data.contains_key(user_id)
    }

    /// Fetch stored image bytes for inspection in tests
    pub fn image_bytes(&self, user_id: &str, filename: &str) -> Option<Vec<u8>> {
        let data = self.data.lock().unwrap();
        data.get(user_id)
            .and_then(|images| images.get(filename))
            .cloned()
    }

    /// Clear all data from the store
    pub fn clear(&self) {
        let mut data = self.data.lock().unwrap();
        data.clear();
    }
}

impl Default for MockFaceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceStore for MockFaceStore {
    fn save_image(&self, user_id: &str, jpeg_bytes: &[u8]) -> Result<String, RegistryError> {
        let mut data = self.data.lock().unwrap();
        let images = data.entry(user_id.to_string()).or_insert_with(HashMap::new);
        let filename = crate::storage::new_image_filename();
        images.insert(filename.clone(), jpeg_bytes.to_vec());
        info!("Mock: saved image {} for user {}", filename, user_id);
        Ok(filename)
    }

    fn image_count(&self, user_id: &str) -> Result<usize, RegistryError> {
        let data = self.data.lock().unwrap();
        data.get(user_id)
            .map(|images| images.len())
            .ok_or_else(|| RegistryError::UserNotFound(user_id.to_string()))
    }

    fn list_users(&self) -> Result<Vec<UserEntry>, RegistryError> {
        let data = self.data.lock().unwrap();
        Ok(data
            .iter()
            .map(|(user_id, images)| UserEntry {
                user_id: user_id.clone(),
                image_count: images.len(),
                folder_path: format!("registered_faces/{}{}", USER_DIR_PREFIX, user_id),
            })
            .collect())
    }

    fn list_images(&self, user_id: &str) -> Result<Vec<String>, RegistryError> {
        let data = self.data.lock().unwrap();
        data.get(user_id)
            .map(|images| images.keys().cloned().collect())
            .ok_or_else(|| RegistryError::UserNotFound(user_id.to_string()))
    }

    fn delete_user(&self, user_id: &str) -> Result<(), RegistryError> {
        let mut data = self.data.lock().unwrap();
        if data.remove(user_id).is_none() {
            return Err(RegistryError::UserNotFound(user_id.to_string()));
        }
        info!("Mock: deleted user {}", user_id);
        Ok(())
    }
}
