//! Bookshelf - Book Catalog Service
//!
//! A Rust REST JSON API for managing a catalog of book records, backed by
//! PostgreSQL.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers. Handlers receive the
/// store through [`services::Services`]; there are no ambient singletons.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
