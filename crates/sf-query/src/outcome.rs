//! Query result types and their JSON shape.
//!
//! ```json
//! {
//!   "total_stores_found": 2,
//!   "closest_store": { "store_id": 1, "store_name": "Downtown", "latitude": 30.69,
//!                      "longitude": -88.04, "distance_km": 0.0 },
//!   "all_stores": [ ... ]
//! }
//! ```

use serde::Serialize;

use sf_core::{RecordIndex, Store};

/// Round a distance to two decimals, halves away from zero.
///
/// Operates on the binary value of `d * 100`, so a distance whose nearest
/// `f64` lies just below a decimal half rounds down: `1.005` becomes `1.0`
/// where decimal HALF_UP arithmetic would give `1.01`.
#[inline]
pub fn round_km(d: f64) -> f64 {
    (d * 100.0).round() / 100.0
}

// ── RankedStore ───────────────────────────────────────────────────────────────

/// One store that passed the radius filter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedStore {
    pub store_id:    i64,
    pub store_name:  String,
    pub latitude:    f64,
    pub longitude:   f64,
    /// Distance from the query point, rounded to two decimals.
    pub distance_km: f64,
    /// Position of the store in the queried dataset.
    #[serde(skip)]
    pub record:      RecordIndex,
}

impl RankedStore {
    pub fn new(store: &Store, record: RecordIndex, distance_km: f64) -> Self {
        Self {
            store_id:    store.id.0,
            store_name:  store.name.clone(),
            latitude:    store.pos.lat,
            longitude:   store.pos.lon,
            distance_km: round_km(distance_km),
            record,
        }
    }
}

// ── QueryOutcome ──────────────────────────────────────────────────────────────

/// Complete, internally consistent answer to one radius query.
///
/// Fields are private so `nearest` and `total_matches` can never disagree
/// with `matches`; build one with [`QueryOutcome::from_ranked`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryOutcome {
    #[serde(rename = "total_stores_found")]
    total_matches: usize,
    #[serde(rename = "closest_store")]
    nearest:       Option<RankedStore>,
    #[serde(rename = "all_stores")]
    matches:       Vec<RankedStore>,
}

impl QueryOutcome {
    /// Wrap an already-ranked list (ascending distance, then record index).
    pub fn from_ranked(matches: Vec<RankedStore>) -> Self {
        debug_assert!(matches.windows(2).all(|w| {
            (w[0].distance_km, w[0].record) <= (w[1].distance_km, w[1].record)
        }));
        Self {
            total_matches: matches.len(),
            nearest:       matches.first().cloned(),
            matches,
        }
    }

    pub fn empty() -> Self {
        Self::from_ranked(Vec::new())
    }

    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    /// The closest store, or `None` when nothing is within the radius.
    pub fn nearest(&self) -> Option<&RankedStore> {
        self.nearest.as_ref()
    }

    pub fn matches(&self) -> &[RankedStore] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn into_matches(self) -> Vec<RankedStore> {
        self.matches
    }
}
