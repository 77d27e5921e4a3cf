pub mod catalog_service;
pub mod frequency_service;
pub mod history_service;
pub mod product_service;

pub use catalog_service::{project_catalog, CatalogService, ProductCatalog};
pub use frequency_service::{FrequencyService, FrequentProduct};
pub use history_service::{HistoryEntry, HistoryService};
pub use product_service::{ProductComparison, ProductService};
