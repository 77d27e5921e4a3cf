//! Price Tracking Backend Service
//!
//! Main entry point. Loads configuration, sets up the SQLite pool and
//! schema, and serves the HTTP API.

use pricetrack_backend::config::AppConfig;
use pricetrack_backend::database::{create_pool, run_migrations};
use pricetrack_backend::error::{AppError, AppResult};
use pricetrack_backend::{http_api, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        AppError::Config(e)
    })?;

    // Initialize tracing/logging with config
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!(
                "pricetrack_backend={},sqlx=warn,tower_http=info",
                config.log_level
            )
            .into()
        }))
        .init();

    info!("Price tracking backend starting");
    info!("Environment: {}", config.environment);
    info!("Log level: {}", config.log_level);
    info!("Database: {}", config.database_url());

    // Database setup
    let pool = create_pool(&config.database).await.map_err(|e| {
        error!("Failed to create database pool: {}", e);
        AppError::Database(e)
    })?;
    info!("Database connection pool created");

    run_migrations(&pool).await.map_err(|e| {
        error!("Database migration failed: {}", e);
        AppError::Database(e)
    })?;
    info!("Database migrations completed");

    // Application state and router
    let state = Arc::new(AppState::new(pool, config.query.clone()));
    let app = http_api::router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.http_port)
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid HTTP address: {}", e)))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Message(format!("Failed to bind {}: {}", addr, e)))?;

    info!("HTTP API listening on {}", addr);
    info!("Press Ctrl+C to shutdown gracefully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Message(format!("Server error: {}", e)))?;

    info!("Price tracking backend shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, shutting down gracefully..."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
