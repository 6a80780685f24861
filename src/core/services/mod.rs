pub mod auth_service;
pub mod feed_service;
pub mod pagination;
pub mod refresh_controller;
pub mod session_storage;
