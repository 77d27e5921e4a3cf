pub mod observation_repository;

// Re-export for convenient access
pub use observation_repository::{ObservationRepository, ProductAggregate};
