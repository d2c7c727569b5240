//! HTTP request handlers

use actix_multipart::Multipart;
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use bytes::BytesMut;
use futures::TryStreamExt;
use log::{debug, info, warn};
use serde_json::json;

use crate::api::response::{
    DeleteUserResponse, ListUsersResponse, RegisterFaceResponse, UserImagesResponse,
    STATUS_SUCCESS,
};
use crate::app_state::AppState;
use crate::error::RegistryError;

/// Header carrying the caller-supplied user identifier on uploads.
const USER_ID_HEADER: &str = "nic";

/// Extract the user identifier header from an upload request
fn user_id_from_header(req: &HttpRequest) -> Result<String, RegistryError> {
    req.headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
        .ok_or_else(|| {
            RegistryError::BadRequest(format!("Missing required header: {}", USER_ID_HEADER))
        })
}

/// Drain every part of the multipart body into one byte buffer per image
async fn collect_image_parts(mut payload: Multipart) -> Result<Vec<Vec<u8>>, RegistryError> {
    let mut uploads = Vec::new();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| RegistryError::BadRequest(format!("Error reading multipart body: {}", e)))?
    {
        let mut bytes = BytesMut::new();
        while let Some(chunk) = field.try_next().await.map_err(|e| {
            warn!("Error reading multipart chunk: {}", e);
            RegistryError::BadRequest(format!("Error reading multipart body: {}", e))
        })? {
            bytes.extend_from_slice(&chunk);
        }
        uploads.push(bytes.to_vec());
    }

    Ok(uploads)
}

/// Register one or more face images for a user
#[post("/register_face")]
pub async fn register_face(
    req: HttpRequest,
    payload: Multipart,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, RegistryError> {
    let user_id = user_id_from_header(&req)?;
    debug!("register_face: user={}", user_id);

    let uploads = collect_image_parts(payload).await?;
    let outcome = app_state
        .registry_service
        .register_images(&user_id, &uploads)?;

    Ok(HttpResponse::Ok().json(RegisterFaceResponse {
        status: STATUS_SUCCESS.to_string(),
        user_id,
        saved_images: outcome.saved_images,
        total_images_now: outcome.total_images_now,
    }))
}

/// Delete a user and all stored images
#[delete("/delete_user/{user_id}")]
pub async fn delete_user(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, RegistryError> {
    let user_id = path.into_inner();
    debug!("delete_user: user={}", user_id);

    app_state.registry_service.delete_user(&user_id)?;
    info!("Deleted user {}", user_id);

    Ok(HttpResponse::Ok().json(DeleteUserResponse {
        status: STATUS_SUCCESS.to_string(),
        user_id,
        message: "User folder and all images deleted successfully".to_string(),
    }))
}

/// List all registered users
#[get("/list_users")]
pub async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, RegistryError> {
    let users = app_state.registry_service.list_users()?;
    let total_users = users.len();

    Ok(HttpResponse::Ok().json(ListUsersResponse {
        status: STATUS_SUCCESS.to_string(),
        users,
        total_users,
    }))
}

/// List stored image filenames for a specific user
#[get("/user_images/{user_id}")]
pub async fn user_images(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, RegistryError> {
    let user_id = path.into_inner();
    debug!("user_images: user={}", user_id);

    let images = app_state.registry_service.list_images(&user_id)?;
    let total_images = images.len();

    Ok(HttpResponse::Ok().json(UserImagesResponse {
        status: STATUS_SUCCESS.to_string(),
        user_id,
        images,
        total_images,
    }))
}

/// Root endpoint describing the API surface
#[get("/")]
pub async fn info() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Face Registration API",
        "endpoints": {
            "POST /register_face": "Register one or many face images for a user",
            "DELETE /delete_user/{user_id}": "Delete a user and all their images",
            "GET /list_users": "List all registered users",
            "GET /user_images/{user_id}": "Get images for a specific user"
        }
    }))
}
