//! Price Tracking Backend Library
//!
//! This module exposes the backend components for use by tests and
//! other consumers.

pub mod config;
pub mod database;
pub mod error;
pub mod http_api;
pub mod models;
pub mod pricing;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use config::QueryDefaults;
use database::Database;
use repositories::ObservationRepository;
use services::{CatalogService, FrequencyService, HistoryService, ProductService};
use std::sync::Arc;

/// Application state containing the repository and services
pub struct AppState {
    pub database: Database,
    pub observation_repo: Arc<ObservationRepository>,
    pub product_service: Arc<ProductService>,
    pub history_service: Arc<HistoryService>,
    pub catalog_service: Arc<CatalogService>,
    pub frequency_service: Arc<FrequencyService>,
}

impl AppState {
    /// Create a new AppState with initialized repository and services
    pub fn new(pool: sqlx::SqlitePool, defaults: QueryDefaults) -> Self {
        let database = Database::new(pool.clone());
        let observation_repo = Arc::new(ObservationRepository::new(pool));

        Self {
            database,
            product_service: Arc::new(ProductService::new(observation_repo.clone())),
            history_service: Arc::new(HistoryService::new(
                observation_repo.clone(),
                defaults.clone(),
            )),
            catalog_service: Arc::new(CatalogService::new(observation_repo.clone())),
            frequency_service: Arc::new(FrequencyService::new(
                observation_repo.clone(),
                defaults,
            )),
            observation_repo,
        }
    }
}
