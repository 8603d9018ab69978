//! Candidate sources for the query engine.
//!
//! # Pluggability
//!
//! The engine asks a [`CandidateScan`] which records are worth running the
//! distance function on, then applies the exact radius filter itself.  A scan
//! may over-report but must never drop a record that is within the radius,
//! and must list candidates in ascending record order.
//!
//! | Scan           | Candidates                                         |
//! |----------------|----------------------------------------------------|
//! | [`LinearScan`] | every record                                       |
//! | `StoreIndex`   | records inside the radius' bounding box (R-tree)   |

use sf_core::{GeoPoint, RecordIndex, Store};
use sf_spatial::StoreIndex;

use crate::engine::check_len;
use crate::{QueryError, QueryResult};

/// Pluggable candidate pre-filter.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one scan can serve concurrent
/// queries from a shared catalog.
pub trait CandidateScan: Send + Sync {
    /// Records of `stores` that may lie within `radius_km` of `center`,
    /// ascending by record index.
    fn candidates(
        &self,
        stores: &[Store],
        center: GeoPoint,
        radius_km: f64,
    ) -> QueryResult<Vec<RecordIndex>>;
}

// ── LinearScan ────────────────────────────────────────────────────────────────

/// Full scan: every record is a candidate.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearScan;

impl CandidateScan for LinearScan {
    fn candidates(
        &self,
        stores: &[Store],
        _center: GeoPoint,
        _radius_km: f64,
    ) -> QueryResult<Vec<RecordIndex>> {
        check_len(stores.len())?;
        Ok((0..stores.len())
            .filter_map(|i| RecordIndex::try_from(i).ok())
            .collect())
    }
}

// ── StoreIndex ────────────────────────────────────────────────────────────────

impl CandidateScan for StoreIndex {
    fn candidates(
        &self,
        stores: &[Store],
        center: GeoPoint,
        radius_km: f64,
    ) -> QueryResult<Vec<RecordIndex>> {
        if self.len() != stores.len() {
            return Err(QueryError::IndexMismatch {
                indexed: self.len(),
                dataset: stores.len(),
            });
        }
        Ok(self.candidates_within(center, radius_km))
    }
}

impl<S: CandidateScan + ?Sized> CandidateScan for &S {
    fn candidates(
        &self,
        stores: &[Store],
        center: GeoPoint,
        radius_km: f64,
    ) -> QueryResult<Vec<RecordIndex>> {
        (**self).candidates(stores, center, radius_km)
    }
}
