//! R-tree index over store positions.
//!
//! # Contract
//!
//! [`StoreIndex::candidates_within`] returns a **superset** of the records
//! whose haversine distance to the centre is within the radius.  Callers
//! still evaluate the exact distance for every candidate; the index only
//! skips records that cannot possibly qualify.  Candidates are returned in
//! ascending [`RecordIndex`] order so a caller iterating them sees the same
//! relative order as a full linear scan.
//!
//! # Bounding box
//!
//! A spherical cap of angular radius `δ` around `(φ, λ)` is contained in
//!
//! ```text
//! lat ∈ [φ − δ, φ + δ]
//! lon ∈ [λ − Δλ, λ + Δλ],   sin Δλ = sin δ / cos φ
//! ```
//!
//! When the cap reaches a pole every longitude qualifies.  When the longitude
//! range crosses ±180° it is split into two boxes.  A small margin absorbs
//! floating-point disagreement between this bound and the distance function.

use rstar::{RTree, RTreeObject, AABB};

use sf_core::{GeoPoint, RecordIndex, Store, EARTH_RADIUS_KM};

/// Slack added to every box edge, in degrees (~0.1 m).
const MARGIN_DEG: f64 = 1e-6;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point with the record it
/// came from.
#[derive(Clone)]
struct StoreEntry {
    point:  [f64; 2], // [lat, lon]
    record: RecordIndex,
}

impl RTreeObject for StoreEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── StoreIndex ────────────────────────────────────────────────────────────────

/// Spatial index over one dataset snapshot.
///
/// The index remembers how many records it was built from so a query engine
/// can refuse to pair it with a different dataset.
pub struct StoreIndex {
    tree:    RTree<StoreEntry>,
    records: usize,
}

impl StoreIndex {
    /// Bulk-load an index over `stores`.
    ///
    /// Records with out-of-range coordinates are left out of the tree; they
    /// can never be candidates, and the engine rejects such datasets before
    /// consulting the index anyway.  Records past
    /// [`RecordIndex::MAX_RECORDS`] are left out too; such a dataset cannot
    /// be queried.
    ///
    /// Time complexity: O(N log N).
    pub fn build(stores: &[Store]) -> Self {
        let entries: Vec<StoreEntry> = stores
            .iter()
            .enumerate()
            .filter(|(_, s)| s.pos.is_valid())
            .filter_map(|(i, s)| {
                let record = RecordIndex::try_from(i).ok()?;
                Some(StoreEntry { point: [s.pos.lat, s.pos.lon], record })
            })
            .collect();

        Self {
            tree:    RTree::bulk_load(entries),
            records: stores.len(),
        }
    }

    /// Number of records in the dataset this index was built from.
    pub fn len(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Records that may lie within `radius_km` of `center`, ascending by
    /// record index.
    pub fn candidates_within(&self, center: GeoPoint, radius_km: f64) -> Vec<RecordIndex> {
        let mut out: Vec<RecordIndex> = Vec::new();
        for bbox in search_boxes(center, radius_km) {
            out.extend(
                self.tree
                    .locate_in_envelope_intersecting(&bbox)
                    .map(|e| e.record),
            );
        }

        // Split boxes never overlap, so no dedup is needed; only order.
        out.sort_unstable();
        out
    }
}

// ── Bounding-box geometry ─────────────────────────────────────────────────────

/// Latitude/longitude boxes (as `[lat, lon]` AABBs) covering the cap of
/// `radius_km` around `center`.
fn search_boxes(center: GeoPoint, radius_km: f64) -> Vec<AABB<[f64; 2]>> {
    let delta = radius_km / EARTH_RADIUS_KM; // angular radius, radians

    if delta >= std::f64::consts::PI {
        return vec![whole_globe()];
    }

    let delta_deg = delta.to_degrees();
    let lat_min = (center.lat - delta_deg - MARGIN_DEG).max(-90.0);
    let lat_max = (center.lat + delta_deg + MARGIN_DEG).min(90.0);

    // Cap touches a pole: every meridian passes through it.
    if center.lat.abs() + delta_deg + MARGIN_DEG >= 90.0 {
        return vec![AABB::from_corners([lat_min, -180.0], [lat_max, 180.0])];
    }

    let ratio = delta.sin() / center.lat.to_radians().cos();
    if ratio >= 1.0 {
        return vec![AABB::from_corners([lat_min, -180.0], [lat_max, 180.0])];
    }
    let d_lon = ratio.asin().to_degrees() + MARGIN_DEG;

    let lon_min = center.lon - d_lon;
    let lon_max = center.lon + d_lon;

    if lon_min < -180.0 {
        vec![
            AABB::from_corners([lat_min, lon_min + 360.0], [lat_max, 180.0]),
            AABB::from_corners([lat_min, -180.0], [lat_max, lon_max]),
        ]
    } else if lon_max > 180.0 {
        vec![
            AABB::from_corners([lat_min, lon_min], [lat_max, 180.0]),
            AABB::from_corners([lat_min, -180.0], [lat_max, lon_max - 360.0]),
        ]
    } else {
        vec![AABB::from_corners([lat_min, lon_min], [lat_max, lon_max])]
    }
}

fn whole_globe() -> AABB<[f64; 2]> {
    AABB::from_corners([-90.0, -180.0], [90.0, 180.0])
}
