// src/service/mod.rs

pub mod image_codec;
pub mod registry_service;
