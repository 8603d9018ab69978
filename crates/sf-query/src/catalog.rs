//! An owned dataset snapshot with an optional spatial index.

use sf_core::{GeoPoint, Store};
use sf_spatial::StoreIndex;

use crate::{LinearScan, ProximityQueryEngine, QueryOutcome, QueryResult};

/// One immutable dataset snapshot, ready to answer queries.
///
/// A catalog is what a long-running service holds (typically behind an
/// `Arc`) instead of process-wide state: it is built once, never mutated,
/// and `Sync`, so any number of queries can run against it concurrently.
///
/// # Example
///
/// ```
/// use sf_core::{GeoPoint, Store};
/// use sf_query::StoreCatalog;
///
/// let catalog = StoreCatalog::new(vec![
///     Store::new(1, "Downtown", 30.6954, -88.0399),
///     Store::new(2, "Airport", 30.6912, -88.2428),
/// ])
/// .with_index();
///
/// let outcome = catalog.query(GeoPoint::new(30.69, -88.04), 5.0).unwrap();
/// assert_eq!(outcome.total_matches(), 1);
/// assert_eq!(outcome.nearest().unwrap().store_id, 1);
/// ```
pub struct StoreCatalog {
    stores: Vec<Store>,
    index:  Option<StoreIndex>,
}

impl StoreCatalog {
    /// Catalog answering queries by linear scan.
    pub fn new(stores: Vec<Store>) -> Self {
        Self { stores, index: None }
    }

    /// Build an R-tree over the stores and use it to pre-filter candidates.
    /// Results are identical to the linear scan.
    pub fn with_index(mut self) -> Self {
        self.index = Some(StoreIndex::build(&self.stores));
        self
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Every store within `radius_km` of `at`, nearest first.
    pub fn query(&self, at: GeoPoint, radius_km: f64) -> QueryResult<QueryOutcome> {
        match &self.index {
            Some(index) => ProximityQueryEngine::new(index).query(&self.stores, at, radius_km),
            None => ProximityQueryEngine::new(LinearScan).query(&self.stores, at, radius_km),
        }
    }
}
