use crate::config::QueryDefaults;
use crate::error::{AppError, AppResult};
use crate::repositories::ObservationRepository;
use serde::Serialize;
use std::sync::Arc;

/// One entry of the most-recorded-products ranking.
#[derive(Debug, Serialize)]
pub struct FrequentProduct {
    pub name: String,
    /// Place of the product's most recent observation.
    pub place: String,
    pub avg_total_price: f64,
    pub avg_units: f64,
}

/// Service for frequency ranking of recorded products
pub struct FrequencyService {
    repo: Arc<ObservationRepository>,
    defaults: QueryDefaults,
}

impl FrequencyService {
    pub fn new(repo: Arc<ObservationRepository>, defaults: QueryDefaults) -> Self {
        Self { repo, defaults }
    }

    /// Return the most frequently recorded products, at most `limit`
    ///
    /// Ordered by observation count descending, count ties broken
    /// lexicographically by name. Averages are rounded to two decimal
    /// places. An empty store yields an empty success.
    pub async fn top_frequent(&self, limit: Option<i64>) -> AppResult<Vec<FrequentProduct>> {
        let limit = limit.unwrap_or(self.defaults.top_limit);
        if limit <= 0 {
            return Err(AppError::InvalidObservation(
                "limit must be greater than zero".to_string(),
            ));
        }

        let aggregates = self.repo.aggregate_by_name(limit).await?;

        Ok(aggregates
            .into_iter()
            .map(|agg| FrequentProduct {
                name: agg.name,
                place: agg.place,
                avg_total_price: round2(agg.avg_total_price),
                avg_units: round2(agg.avg_units),
            })
            .collect())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
