//! Lending Admin Server
//!
//! Read-only analytics and reporting for the admin backend of a P2P lending
//! platform: user, loan, transaction and revenue reports, a dashboard
//! snapshot with alerts, and per-lender offer totals.

use std::sync::Arc;

pub mod analytics;
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
