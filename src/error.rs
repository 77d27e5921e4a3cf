use crate::database::DatabaseError;
use crate::pricing::PricingError;
use sqlx::Error as SqlxError;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// SQLx database errors
    #[error("SQL error: {0}")]
    Sqlx(#[from] SqlxError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected price observation or query input
    #[error("Invalid observation: {0}")]
    InvalidObservation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Message(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Check if error is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    /// Check if error is a client-input rejection
    pub fn is_invalid_observation(&self) -> bool {
        matches!(self, AppError::InvalidObservation(_))
    }

    /// Get HTTP status code for the error
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::NotFound(_) => 404,
            AppError::InvalidObservation(_) => 400,
            AppError::Config(_) => 500,
            AppError::Database(_) | AppError::Sqlx(_) => 500,
            _ => 500,
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            // An empty observation set means the product has no data,
            // which the API surfaces as a distinct "no data" outcome.
            PricingError::EmptyHistory => AppError::NotFound("no observations found".to_string()),
            other => AppError::InvalidObservation(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingError;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound("x".into()).status_code(), 404);
        assert_eq!(AppError::InvalidObservation("x".into()).status_code(), 400);
        assert_eq!(AppError::Config("x".into()).status_code(), 500);
    }

    #[test]
    fn test_pricing_error_mapping() {
        let err: AppError = PricingError::EmptyHistory.into();
        assert!(err.is_not_found());

        let err: AppError = PricingError::NonPositiveUnits(0.0).into();
        assert!(err.is_invalid_observation());

        let err: AppError = PricingError::ZeroBaseline.into();
        assert!(err.is_invalid_observation());
    }
}
