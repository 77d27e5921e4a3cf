use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Display format for timestamps in API responses and range parameters.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display format for day-granularity keys (catalog grouping, range defaults).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One recorded price event for a product at a place and time.
///
/// Observations are append-only: once stored they are never updated
/// or deleted. The unit price is not stored; it is recomputed from
/// `total_price / units` on every read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PriceObservation {
    pub id: i64,
    pub name: String,
    pub total_price: f64,
    pub units: f64,
    pub place: String,
    pub recorded_at: NaiveDateTime,
}

/// Insert request for a new price observation.
///
/// `recorded_at` is optional and defaults to the current UTC time
/// at creation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewObservation {
    pub name: String,
    pub total_price: f64,
    pub units: f64,
    pub place: String,
    #[serde(default)]
    pub recorded_at: Option<NaiveDateTime>,
}

impl NewObservation {
    /// Validate that the observation satisfies the field invariants.
    ///
    /// Enforced before anything reaches the store so a division by a
    /// non-positive unit count can never occur downstream.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        if self.place.trim().is_empty() {
            return Err("place is required".to_string());
        }
        if !self.total_price.is_finite() || self.total_price < 0.0 {
            return Err("total_price must be a non-negative number".to_string());
        }
        if !self.units.is_finite() || self.units <= 0.0 {
            return Err("units must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewObservation {
        NewObservation {
            name: "Milk".to_string(),
            total_price: 4.0,
            units: 2.0,
            place: "StoreA".to_string(),
            recorded_at: None,
        }
    }

    #[test]
    fn test_valid_observation_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut obs = valid();
        obs.name = "  ".to_string();
        assert!(obs.validate().is_err());
    }

    #[test]
    fn test_blank_place_rejected() {
        let mut obs = valid();
        obs.place = String::new();
        assert!(obs.validate().is_err());
    }

    #[test]
    fn test_zero_units_rejected() {
        let mut obs = valid();
        obs.units = 0.0;
        assert!(obs.validate().is_err());
    }

    #[test]
    fn test_negative_units_rejected() {
        let mut obs = valid();
        obs.units = -1.5;
        assert!(obs.validate().is_err());
    }

    #[test]
    fn test_nan_units_rejected() {
        let mut obs = valid();
        obs.units = f64::NAN;
        assert!(obs.validate().is_err());
    }

    #[test]
    fn test_negative_total_price_rejected() {
        let mut obs = valid();
        obs.total_price = -0.01;
        assert!(obs.validate().is_err());
    }
}
