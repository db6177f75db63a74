//! Inventario IT Equipment Inventory
//!
//! A Rust REST API server tracking an organization's notebooks, mobile
//! phones and time-clock terminals, with an append-only audit trail of
//! every equipment mutation.

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
