//! Registry service layer that composes the image codec with the storage
//! abstraction behind a clean interface for the HTTP handlers.

use crate::error::RegistryError;
use crate::service::image_codec;
use crate::storage::{FaceStore, UserEntry};
use log::{error, info};
use std::sync::Arc;

/// Result of a successful upload batch.
#[derive(Debug)]
pub struct RegisterOutcome {
    pub saved_images: Vec<String>,
    pub total_images_now: usize,
}

/// Registry service with an injected storage backend
pub struct RegistryService {
    store: Arc<dyn FaceStore>,
}

impl RegistryService {
    /// Create a new registry service with injected storage backend
    pub fn new(store: Arc<dyn FaceStore>) -> Self {
        Self { store }
    }

    /// Register a batch of uploaded images for a user.
    ///
    /// Every buffer is decoded and re-encoded before the first write, so an
    /// undecodable image rejects the whole batch without touching the store.
    pub fn register_images(
        &self,
        user_id: &str,
        uploads: &[Vec<u8>],
    ) -> Result<RegisterOutcome, RegistryError> {
        if uploads.is_empty() {
            return Err(RegistryError::BadRequest(
                "No image files in upload".to_string(),
            ));
        }

        let mut encoded = Vec::with_capacity(uploads.len());
        for (index, raw) in uploads.iter().enumerate() {
            match image_codec::transcode_to_jpeg(raw) {
                Ok(jpeg) => encoded.push(jpeg),
                Err(e) => {
                    error!("Failed to decode image {} for user {}: {}", index, user_id, e);
                    return Err(e);
                }
            }
        }

        let mut saved_images = Vec::with_capacity(encoded.len());
        for jpeg in &encoded {
            saved_images.push(self.store.save_image(user_id, jpeg)?);
        }

        let total_images_now = self.store.image_count(user_id)?;
        info!(
            "Registered {} image(s) for user {}, {} total",
            saved_images.len(),
            user_id,
            total_images_now
        );

        Ok(RegisterOutcome {
            saved_images,
            total_images_now,
        })
    }

    /// All known users
    pub fn list_users(&self) -> Result<Vec<UserEntry>, RegistryError> {
        self.store.list_users()
    }

    /// Image filenames for one user
    pub fn list_images(&self, user_id: &str) -> Result<Vec<String>, RegistryError> {
        self.store.list_images(user_id)
    }

    /// Remove a user and all stored images
    pub fn delete_user(&self, user_id: &str) -> Result<(), RegistryError> {
        self.store.delete_user(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::mock_store::MockFaceStore;
    use image::ImageFormat;
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]));
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    fn service_with_mock() -> (Arc<MockFaceStore>, RegistryService) {
        let store = Arc::new(MockFaceStore::new());
        let service = RegistryService::new(store.clone());
        (store, service)
    }

    #[test]
    fn test_register_single_image() {
        let (store, service) = service_with_mock();

        let outcome = service.register_images("123", &[png_bytes()]).unwrap();
        assert_eq!(outcome.saved_images.len(), 1);
        assert_eq!(outcome.total_images_now, 1);

        // The stored bytes are JPEG regardless of the PNG input
        let stored = store
            .image_bytes("123", &outcome.saved_images[0])
            .unwrap();
        assert_eq!(&stored[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_register_batch_counts_accumulate() {
        let (_store, service) = service_with_mock();

        let first = service.register_images("u", &[png_bytes()]).unwrap();
        assert_eq!(first.total_images_now, 1);

        let second = service
            .register_images("u", &[png_bytes(), png_bytes()])
            .unwrap();
        assert_eq!(second.saved_images.len(), 2);
        assert_eq!(second.total_images_now, 3);
        assert_ne!(second.saved_images[0], second.saved_images[1]);
    }

    #[test]
    fn test_decode_failure_writes_nothing() {
        let (store, service) = service_with_mock();

        let uploads = vec![png_bytes(), b"garbage".to_vec()];
        let err = service.register_images("u", &uploads).unwrap_err();
        assert!(matches!(err, RegistryError::Decode(_)));
        // Whole batch rejected before any write
        assert!(!store.user_exists("u"));
    }

    #[test]
    fn test_empty_batch_is_bad_request() {
        let (_store, service) = service_with_mock();
        assert!(matches!(
            service.register_images("u", &[]),
            Err(RegistryError::BadRequest(_))
        ));
    }

    #[test]
    fn test_delete_then_list_is_not_found() {
        let (_store, service) = service_with_mock();

        service.register_images("u", &[png_bytes()]).unwrap();
        service.delete_user("u").unwrap();
        assert!(matches!(
            service.list_images("u"),
            Err(RegistryError::UserNotFound(_))
        ));
    }
}
