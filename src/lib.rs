//! Bookstore
//!
//! A REST JSON API for managing book records (title, author, publish year),
//! together with a terminal client for listing, viewing, creating, editing
//! and deleting books.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state around an already connected record store
    pub fn new(store: Arc<dyn repository::BookStore>) -> Self {
        Self {
            services: Arc::new(services::Services::new(store)),
        }
    }
}
