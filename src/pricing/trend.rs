use super::{unit_price, PricingError, PricingResult};
use crate::models::PriceObservation;
use serde::Serialize;

/// Direction of the unit-price movement between the oldest and
/// newest observation of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Stable => "stable",
        }
    }
}

/// Directional trend with the magnitude of the change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceTrend {
    pub direction: TrendDirection,
    /// Absolute percent change between oldest and newest unit price.
    pub percent_change: f64,
}

/// Compare the newest and oldest observation of a product.
///
/// Expects the input ordered by `recorded_at` descending, as returned
/// by the store: the newest observation is first, the oldest last. A
/// single observation compares against itself and yields `stable, 0`.
/// A zero baseline unit price is rejected instead of dividing by it.
pub fn trend(observations: &[PriceObservation]) -> PricingResult<PriceTrend> {
    let newest = observations.first().ok_or(PricingError::EmptyHistory)?;
    let oldest = observations.last().ok_or(PricingError::EmptyHistory)?;

    let old = unit_price(oldest.total_price, oldest.units)?;
    let new = unit_price(newest.total_price, newest.units)?;

    if old == 0.0 {
        return Err(PricingError::ZeroBaseline);
    }

    let percent_change = ((new - old) / old) * 100.0;
    let direction = if percent_change > 0.0 {
        TrendDirection::Up
    } else if percent_change < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    };

    Ok(PriceTrend {
        direction,
        percent_change: percent_change.abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn obs(id: i64, total: f64, units: f64, ts: &str) -> PriceObservation {
        PriceObservation {
            id,
            name: "Milk".to_string(),
            total_price: total,
            units,
            place: "StoreA".to_string(),
            recorded_at: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
        }
    }

    // Newest first, matching the store's descending order.
    fn newest_first(newest: PriceObservation, oldest: PriceObservation) -> Vec<PriceObservation> {
        vec![newest, oldest]
    }

    #[test]
    fn test_upward_trend() {
        let observations = newest_first(
            obs(2, 4.5, 2.0, "2024-01-02 10:00:00"),
            obs(1, 4.0, 2.0, "2024-01-01 10:00:00"),
        );

        let t = trend(&observations).unwrap();
        assert_eq!(t.direction, TrendDirection::Up);
        assert_eq!(t.percent_change, 12.5);
    }

    #[test]
    fn test_downward_trend_reports_absolute_magnitude() {
        let observations = newest_first(
            obs(2, 4.0, 2.0, "2024-01-02 10:00:00"),
            obs(1, 4.5, 2.0, "2024-01-01 10:00:00"),
        );

        let t = trend(&observations).unwrap();
        assert_eq!(t.direction, TrendDirection::Down);
        assert!(t.percent_change > 0.0);
    }

    #[test]
    fn test_single_observation_is_stable_zero() {
        let observations = vec![obs(1, 4.0, 2.0, "2024-01-01 10:00:00")];

        let t = trend(&observations).unwrap();
        assert_eq!(t.direction, TrendDirection::Stable);
        assert_eq!(t.percent_change, 0.0);
    }

    #[test]
    fn test_equal_prices_are_stable() {
        let observations = newest_first(
            obs(2, 8.0, 4.0, "2024-01-02 10:00:00"),
            obs(1, 4.0, 2.0, "2024-01-01 10:00:00"),
        );

        let t = trend(&observations).unwrap();
        assert_eq!(t.direction, TrendDirection::Stable);
        assert_eq!(t.percent_change, 0.0);
    }

    #[test]
    fn test_scale_invariance() {
        let base = newest_first(
            obs(2, 4.5, 2.0, "2024-01-02 10:00:00"),
            obs(1, 4.0, 2.0, "2024-01-01 10:00:00"),
        );
        let scaled = newest_first(
            obs(2, 4.5 * 3.0, 2.0 * 3.0, "2024-01-02 10:00:00"),
            obs(1, 4.0 * 3.0, 2.0 * 3.0, "2024-01-01 10:00:00"),
        );

        let a = trend(&base).unwrap();
        let b = trend(&scaled).unwrap();
        assert_eq!(a.direction, b.direction);
        assert!((a.percent_change - b.percent_change).abs() < 1e-9);
    }

    #[test]
    fn test_zero_baseline_fails() {
        let observations = newest_first(
            obs(2, 4.0, 2.0, "2024-01-02 10:00:00"),
            obs(1, 0.0, 2.0, "2024-01-01 10:00:00"),
        );

        assert!(matches!(
            trend(&observations),
            Err(PricingError::ZeroBaseline)
        ));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(trend(&[]), Err(PricingError::EmptyHistory)));
    }

    #[test]
    fn test_direction_as_str() {
        assert_eq!(TrendDirection::Up.as_str(), "up");
        assert_eq!(TrendDirection::Down.as_str(), "down");
        assert_eq!(TrendDirection::Stable.as_str(), "stable");
    }
}
