use crate::error::{AppError, AppResult};
use crate::models::{NewObservation, PriceObservation, DATETIME_FORMAT};
use crate::pricing::{self, TrendDirection};
use crate::repositories::ObservationRepository;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Service for recording observations and comparing product prices
pub struct ProductService {
    repo: Arc<ObservationRepository>,
}

/// Best-price and trend summary for a single product.
#[derive(Debug, Serialize)]
pub struct ProductComparison {
    pub product_name: String,
    pub best_place: String,
    pub best_price_per_unit: f64,
    pub date: String,
    pub price_trend: TrendDirection,
    pub price_change: f64,
}

impl ProductService {
    pub fn new(repo: Arc<ObservationRepository>) -> Self {
        Self { repo }
    }

    /// Record a new price observation
    ///
    /// Validation runs before any store access so an invalid
    /// observation never enters the table.
    pub async fn add_observation(&self, new: NewObservation) -> AppResult<PriceObservation> {
        new.validate().map_err(AppError::InvalidObservation)?;

        let recorded_at = new.recorded_at.unwrap_or_else(|| Utc::now().naive_utc());
        let observation = self.repo.create(&new, recorded_at).await?;

        info!(
            id = observation.id,
            name = %observation.name,
            place = %observation.place,
            "recorded price observation"
        );

        Ok(observation)
    }

    /// Compare all places a product was recorded at
    ///
    /// Returns the best unit price along with the trend between the
    /// oldest and newest observation. Fails with `NotFound` when the
    /// product has no observations.
    pub async fn compare(&self, name: &str) -> AppResult<ProductComparison> {
        let observations = self.repo.find_by_name(name).await?;
        if observations.is_empty() {
            return Err(AppError::NotFound(format!(
                "no observations recorded for '{name}'"
            )));
        }

        let best = pricing::best_price(&observations)?;
        let trend = pricing::trend(&observations)?;

        Ok(ProductComparison {
            product_name: name.to_string(),
            best_place: best.place,
            best_price_per_unit: best.unit_price,
            date: best.recorded_at.format(DATETIME_FORMAT).to_string(),
            price_trend: trend.direction,
            price_change: trend.percent_change,
        })
    }
}
