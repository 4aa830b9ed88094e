//! Cloth Catalog API
//!
//! A small HTTP service for creating and querying clothing items kept in a
//! MongoDB collection.

pub mod api;
pub mod config;
pub mod error;
pub mod store;

pub use error::{AppError, Result};

use std::sync::Arc;

use store::ClothStore;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<config::Settings>,
    pub store: Arc<dyn ClothStore>,
}

impl AppState {
    pub fn new(settings: config::Settings, store: Arc<dyn ClothStore>) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
        }
    }
}
