//! Domain models for the price tracking backend.
//!
//! This module contains the database-backed model for recorded
//! price observations and the shapes used to create them.

pub mod observation;

// Re-export for convenient access
pub use observation::{NewObservation, PriceObservation, DATETIME_FORMAT, DATE_FORMAT};
