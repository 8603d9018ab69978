//! The proximity query engine.

use std::cmp::Ordering;

use sf_core::{GeoPoint, RecordIndex, Store};

use crate::{CandidateScan, LinearScan, QueryError, QueryOutcome, QueryResult, RankedStore};

/// Run one radius query over `stores` with a full linear scan.
///
/// Shorthand for `ProximityQueryEngine::new(LinearScan).query(..)`.
pub fn query(stores: &[Store], at: GeoPoint, radius_km: f64) -> QueryResult<QueryOutcome> {
    ProximityQueryEngine::new(LinearScan).query(stores, at, radius_km)
}

// ── ProximityQueryEngine ──────────────────────────────────────────────────────

/// Stateless radius-filter-and-rank engine.
///
/// Each call to [`query`](Self::query) runs five steps over a read-only
/// dataset:
///
/// 1. **Validate** the arguments and every record's coordinates.
/// 2. **Candidates** from the [`CandidateScan`] (all records for
///    [`LinearScan`]).
/// 3. **Distance** from the query point to each candidate (parallel with the
///    `parallel` feature).
/// 4. **Filter** on the unrounded distance: keep iff `d <= radius_km`.
/// 5. **Rank** by `(rounded distance, record index)` ascending.
///
/// The record index is the tie-break, so equal display distances keep
/// dataset order no matter how step 3 was scheduled.
pub struct ProximityQueryEngine<S: CandidateScan> {
    scan: S,
}

impl<S: CandidateScan> ProximityQueryEngine<S> {
    pub fn new(scan: S) -> Self {
        Self { scan }
    }

    pub fn scan(&self) -> &S {
        &self.scan
    }

    /// Every store within `radius_km` of `at`, nearest first.
    ///
    /// # Errors
    ///
    /// - [`QueryError::InvalidArgument`] if `radius_km` is negative or NaN, or
    ///   `at` is outside the valid coordinate range.
    /// - [`QueryError::DataIntegrity`] for the first record (in dataset
    ///   order) with out-of-range coordinates.
    /// - [`QueryError::DatasetTooLarge`] if `stores` has more records than a
    ///   [`RecordIndex`] can address.
    /// - [`QueryError::IndexMismatch`] if the scan was built for a different
    ///   dataset.
    ///
    /// An empty dataset or a query matching nothing is an empty outcome, not
    /// an error.
    pub fn query(&self, stores: &[Store], at: GeoPoint, radius_km: f64) -> QueryResult<QueryOutcome> {
        check_arguments(at, radius_km)?;
        check_records(stores)?;

        let candidates = self.scan.candidates(stores, at, radius_km)?;
        let mut ranked = within_radius(stores, &candidates, at, radius_km);
        ranked.sort_unstable_by(rank_order);

        Ok(QueryOutcome::from_ranked(ranked))
    }
}

impl Default for ProximityQueryEngine<LinearScan> {
    fn default() -> Self {
        Self::new(LinearScan)
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

fn check_arguments(at: GeoPoint, radius_km: f64) -> QueryResult<()> {
    if radius_km.is_nan() {
        return Err(QueryError::InvalidArgument("radius_km must be a number".into()));
    }
    if radius_km < 0.0 {
        return Err(QueryError::InvalidArgument(format!(
            "radius_km must be non-negative, got {radius_km}"
        )));
    }
    at.validate()
        .map_err(|e| QueryError::InvalidArgument(format!("query point {at}: {e}")))?;
    Ok(())
}

/// `len` records must fit in [`RecordIndex`].
pub(crate) fn check_len(len: usize) -> QueryResult<()> {
    if len > RecordIndex::MAX_RECORDS {
        return Err(QueryError::DatasetTooLarge { len, max: RecordIndex::MAX_RECORDS });
    }
    Ok(())
}

/// Reject the dataset if any record has out-of-range coordinates.  Always
/// covers the whole dataset, independent of which records the scan would
/// yield.
fn check_records(stores: &[Store]) -> QueryResult<()> {
    check_len(stores.len())?;

    let invalid = |(i, s): (usize, &Store)| s.pos.validate().err().map(|e| (i, e));

    #[cfg(not(feature = "parallel"))]
    let bad = stores.iter().enumerate().find_map(invalid);

    #[cfg(feature = "parallel")]
    let bad = {
        use rayon::prelude::*;
        stores.par_iter().enumerate().find_map_first(invalid)
    };

    match bad {
        None => Ok(()),
        Some((i, source)) => {
            let store = &stores[i];
            Err(QueryError::DataIntegrity {
                record: record_index(i)?,
                id:     store.id,
                pos:    store.pos,
                source,
            })
        }
    }
}

fn record_index(i: usize) -> QueryResult<RecordIndex> {
    RecordIndex::try_from(i)
        .map_err(|_| QueryError::DatasetTooLarge { len: i + 1, max: RecordIndex::MAX_RECORDS })
}

// ── Distance + filter ─────────────────────────────────────────────────────────

/// Distance-evaluate `candidates` and keep those within the radius.
///
/// Output preserves candidate order; ranking happens afterwards.
fn within_radius(
    stores:     &[Store],
    candidates: &[RecordIndex],
    at:         GeoPoint,
    radius_km:  f64,
) -> Vec<RankedStore> {
    let keep = |&record: &RecordIndex| {
        let store = &stores[record.index()];
        let d = store.pos.distance_km(at);
        (d <= radius_km).then(|| RankedStore::new(store, record, d))
    };

    #[cfg(not(feature = "parallel"))]
    {
        candidates.iter().filter_map(keep).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        candidates.par_iter().filter_map(keep).collect()
    }
}

/// Total order over ranked stores: rounded distance, then dataset position.
fn rank_order(a: &RankedStore, b: &RankedStore) -> Ordering {
    a.distance_km
        .total_cmp(&b.distance_km)
        .then(a.record.cmp(&b.record))
}
