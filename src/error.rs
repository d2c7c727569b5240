//! Error taxonomy for the face registry
//!
//! Every fallible operation in the crate returns one of these kinds so that
//! callers can branch on the failure instead of parsing a message string.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// The named user has no directory in the store.
    #[error("User {0} not found")]
    UserNotFound(String),

    /// The uploaded bytes could not be decoded into an image, or the
    /// re-encode to JPEG failed.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Any filesystem failure (permissions, disk full, racing delete).
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Malformed request: missing user header, unreadable multipart body,
    /// or an empty upload batch.
    #[error("{0}")]
    BadRequest(String),
}

impl ResponseError for RegistryError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::UserNotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RegistryError::Decode(_) | RegistryError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Clients expect the {"detail": ...} error body shape.
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RegistryError::UserNotFound("42".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RegistryError::Decode("bad magic".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RegistryError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RegistryError::BadRequest("missing header".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_message_names_user() {
        let err = RegistryError::UserNotFound("123".into());
        assert_eq!(err.to_string(), "User 123 not found");
    }
}
