//! Pure derived-metric computations over price observations.
//!
//! Nothing in this module touches the store: every function takes
//! observations (or raw numbers) and returns a computed value, so the
//! numeric policy (unit-price guards, tie-breaks, trend edge cases)
//! is testable without a database.

pub mod best_price;
pub mod trend;
pub mod unit_price;

pub use best_price::{best_price, BestPrice};
pub use trend::{trend, PriceTrend, TrendDirection};
pub use unit_price::unit_price;

use thiserror::Error;

/// Error types for pricing computations
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("units must be greater than zero, got {0}")]
    NonPositiveUnits(f64),

    #[error("cannot compute trend from a zero baseline unit price")]
    ZeroBaseline,

    #[error("no observations to compute over")]
    EmptyHistory,
}

/// Result type for pricing computations
pub type PricingResult<T> = Result<T, PricingError>;
