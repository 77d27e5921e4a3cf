use crate::error::AppResult;
use crate::models::{PriceObservation, DATE_FORMAT};
use crate::pricing::{unit_price, PricingResult};
use crate::repositories::ObservationRepository;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Grid of unit prices keyed product -> day -> place, plus the set of
/// distinct places seen.
///
/// Unit prices are display strings rounded to two decimals ("3.14"),
/// matching what the browse view renders. BTreeMap keys keep the JSON
/// output deterministically ordered.
#[derive(Debug, Serialize)]
pub struct ProductCatalog {
    pub products: BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>,
    pub places: BTreeSet<String>,
}

/// Service for the browse-all catalog view
pub struct CatalogService {
    repo: Arc<ObservationRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<ObservationRepository>) -> Self {
        Self { repo }
    }

    /// Build the full product x date x place catalog
    ///
    /// An empty store yields an empty catalog, which is a valid
    /// success for the browse view.
    pub async fn catalog(&self) -> AppResult<ProductCatalog> {
        let observations = self.repo.find_all().await?;
        Ok(project_catalog(&observations)?)
    }
}

/// Project observations into the catalog grid in a single pass.
///
/// The input is expected oldest-first; when the same (name, day,
/// place) cell is recorded more than once the most recent observation
/// wins.
pub fn project_catalog(observations: &[PriceObservation]) -> PricingResult<ProductCatalog> {
    let mut products: BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>> =
        BTreeMap::new();
    let mut places = BTreeSet::new();

    for obs in observations {
        let price = unit_price(obs.total_price, obs.units)?;
        let day = obs.recorded_at.format(DATE_FORMAT).to_string();

        products
            .entry(obs.name.clone())
            .or_default()
            .entry(day)
            .or_default()
            .insert(obs.place.clone(), format!("{price:.2}"));
        places.insert(obs.place.clone());
    }

    Ok(ProductCatalog { products, places })
}
