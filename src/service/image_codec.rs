//! Image transcoding helpers
//!
//! Uploads arrive in whatever format the client produced; everything stored
//! on disk is JPEG. Decoding doubles as validation: bytes that no decoder
//! accepts are rejected before anything touches the store.

use crate::error::RegistryError;
use image::ImageFormat;
use std::io::Cursor;

/// Decode arbitrary image bytes and re-encode them as JPEG.
pub fn transcode_to_jpeg(raw: &[u8]) -> Result<Vec<u8>, RegistryError> {
    let img = image::load_from_memory(raw).map_err(|e| RegistryError::Decode(e.to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Jpeg)
        .map_err(|e| RegistryError::Decode(e.to_string()))?;

    Ok(buf.into_inner())
}
