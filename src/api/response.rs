//! Typed JSON response bodies for the HTTP surface
//!
//! These shapes are part of the wire contract and must not change field
//! names: existing clients parse them as-is.

use serde::{Deserialize, Serialize};

use crate::storage::UserEntry;

pub const STATUS_SUCCESS: &str = "success";

/// Body for POST /register_face
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterFaceResponse {
    pub status: String,
    pub user_id: String,
    pub saved_images: Vec<String>,
    pub total_images_now: usize,
}

/// Body for DELETE /delete_user/{user_id}
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub status: String,
    pub user_id: String,
    pub message: String,
}

/// Body for GET /list_users
#[derive(Debug, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub status: String,
    pub users: Vec<UserEntry>,
    pub total_users: usize,
}

/// Body for GET /user_images/{user_id}
#[derive(Debug, Serialize, Deserialize)]
pub struct UserImagesResponse {
    pub status: String,
    pub user_id: String,
    pub images: Vec<String>,
    pub total_images: usize,
}
