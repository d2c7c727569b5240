//! Local directory-backed face storage implementation

use crate::config::StorageConfig;
use crate::error::RegistryError;
use crate::storage::{FaceStore, UserEntry, IMAGE_EXTENSION, USER_DIR_PREFIX};
use log::{error, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Local filesystem store: one `user_<id>` directory per user under the root,
/// one `<token>.jpg` file per image.
pub struct LocalFaceStore {
    root_path: PathBuf,
    trash_path: PathBuf,
    // Per-user advisory locks so a delete cannot remove the directory while
    // an upload for the same user is mid-write. Entries live for the process
    // lifetime.
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl LocalFaceStore {
    pub fn new(config: &StorageConfig) -> Self {
        let root_path = PathBuf::from(&config.root_path);
        let trash_path = PathBuf::from(&config.trash_path);

        if !root_path.exists() {
            fs::create_dir_all(&root_path).expect("Failed to create storage root directory");
        }
        if !trash_path.exists() {
            fs::create_dir_all(&trash_path).expect("Failed to create trash directory");
        }
        Self::sweep_trash(&trash_path);
        info!("Using storage root directory: {}", root_path.display());

        Self {
            root_path,
            trash_path,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Remove anything left in the trash area by a previous run whose
    /// `remove_dir_all` failed after the rename
    fn sweep_trash(trash_path: &Path) {
        let entries = match fs::read_dir(trash_path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to read trash directory {}: {}", trash_path.display(), e);
                return;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let result = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            match result {
                Ok(()) => info!("Swept staged directory {}", path.display()),
                Err(e) => warn!("Failed to sweep {}: {}", path.display(), e),
            }
        }
    }

    /// Get the directory path for a user
    fn user_dir(&self, user_id: &str) -> PathBuf {
        self.root_path
            .join(format!("{}{}", USER_DIR_PREFIX, user_id))
    }

    /// Fetch (or create) the advisory lock for a user
    fn lock_for(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().unwrap();
        locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Count of `.jpg` files directly inside a directory
    fn count_images(dir: &Path) -> Result<usize, RegistryError> {
        Ok(Self::image_names(dir)?.len())
    }

    /// Names of `.jpg` files directly inside a directory
    fn image_names(dir: &Path) -> Result<Vec<String>, RegistryError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type()?.is_file()
                && Path::new(&name)
                    .extension()
                    .map_or(false, |ext| ext == IMAGE_EXTENSION)
            {
                names.push(name);
            }
        }
        Ok(names)
    }
}

impl FaceStore for LocalFaceStore {
    fn save_image(&self, user_id: &str, jpeg_bytes: &[u8]) -> Result<String, RegistryError> {
        let lock = self.lock_for(user_id);
        let _guard = lock.lock().unwrap();

        let user_dir = self.user_dir(user_id);
        // Idempotent: no-op if the directory already exists
        fs::create_dir_all(&user_dir)?;

        let filename = crate::storage::new_image_filename();
        fs::write(user_dir.join(&filename), jpeg_bytes)?;

        info!(
            "Saved image {} for user {} ({} bytes)",
            filename,
            user_id,
            jpeg_bytes.len()
        );
        Ok(filename)
    }

    fn image_count(&self, user_id: &str) -> Result<usize, RegistryError> {
        let user_dir = self.user_dir(user_id);
        if !user_dir.exists() {
            return Err(RegistryError::UserNotFound(user_id.to_string()));
        }
        Self::count_images(&user_dir)
    }

    fn list_users(&self) -> Result<Vec<UserEntry>, RegistryError> {
        let mut users = Vec::new();
        if !self.root_path.exists() {
            return Ok(users);
        }

        for entry in fs::read_dir(&self.root_path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !entry.file_type()?.is_dir() || !name.starts_with(USER_DIR_PREFIX) {
                continue;
            }
            let user_id = name[USER_DIR_PREFIX.len()..].to_string();
            let folder = entry.path();
            users.push(UserEntry {
                user_id,
                image_count: Self::count_images(&folder)?,
                folder_path: folder.display().to_string(),
            });
        }
        Ok(users)
    }

    fn list_images(&self, user_id: &str) -> Result<Vec<String>, RegistryError> {
        let user_dir = self.user_dir(user_id);
        if !user_dir.exists() {
            return Err(RegistryError::UserNotFound(user_id.to_string()));
        }
        Self::image_names(&user_dir)
    }

    fn delete_user(&self, user_id: &str) -> Result<(), RegistryError> {
        let lock = self.lock_for(user_id);
        let _guard = lock.lock().unwrap();

        let user_dir = self.user_dir(user_id);
        if !user_dir.exists() {
            return Err(RegistryError::UserNotFound(user_id.to_string()));
        }

        // Two-phase delete: rename into the trash area first so no concurrent
        // request can observe a half-removed user directory, then remove.
        let staged = self.trash_path.join(format!(
            "{}{}_{}",
            USER_DIR_PREFIX,
            user_id,
            Uuid::new_v4().simple()
        ));
        fs::rename(&user_dir, &staged)?;

        if let Err(e) = fs::remove_dir_all(&staged) {
            // The user is already gone from the root; the leftover is swept
            // on the next startup.
            error!(
                "Failed to remove staged directory {}: {}",
                staged.display(),
                e
            );
            return Err(RegistryError::Io(e));
        }

        info!("Deleted user {} and all stored images", user_id);
        Ok(())
    }
}
