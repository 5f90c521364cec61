//! Serendib Travel Site Server
//!
//! A Rust implementation of the Serendib travel-content marketing backend,
//! providing a REST JSON API over the site's content types, JWT
//! authentication and file upload management.

use std::sync::Arc;

pub mod api;
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
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
