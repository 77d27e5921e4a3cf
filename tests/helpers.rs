#![allow(dead_code)]

use chrono::NaiveDateTime;
use pricetrack_backend::database::MIGRATOR;
use pricetrack_backend::models::{NewObservation, PriceObservation};
use pricetrack_backend::repositories::ObservationRepository;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// In-memory SQLite pool with the schema applied. A single connection
/// keeps every query on the same in-memory database.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    MIGRATOR.run(&pool).await.expect("failed to run migrations");
    pool
}

pub fn at(ts: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").expect("invalid test timestamp")
}

pub fn observation(
    name: &str,
    total_price: f64,
    units: f64,
    place: &str,
    ts: &str,
) -> NewObservation {
    NewObservation {
        name: name.to_string(),
        total_price,
        units,
        place: place.to_string(),
        recorded_at: Some(at(ts)),
    }
}

pub async fn insert(
    repo: &ObservationRepository,
    name: &str,
    total_price: f64,
    units: f64,
    place: &str,
    ts: &str,
) -> PriceObservation {
    let new = observation(name, total_price, units, place, ts);
    let recorded_at = new.recorded_at.expect("timestamp set by helper");
    repo.create(&new, recorded_at).await.expect("insert failed")
}
