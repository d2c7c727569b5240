// src/api/mod.rs

pub mod handlers;
pub mod response;

pub use handlers::{delete_user, info, list_users, register_face, user_images};
