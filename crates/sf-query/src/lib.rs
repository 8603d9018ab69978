//! `sf-query` — radius filter and nearest-first ranking.
//!
//! # Query pipeline
//!
//! ```text
//! query(stores, at, radius_km):
//!   ① Validate   — radius ≥ 0, query point in range, every record in range
//!   ② Candidates — CandidateScan (LinearScan = all records, StoreIndex = R-tree)
//!   ③ Distance   — haversine per candidate (parallel with the `parallel` feature)
//!   ④ Filter     — keep iff unrounded distance ≤ radius_km
//!   ⑤ Rank       — sort by (distance rounded to 0.01 km, record index)
//! ```
//!
//! Filtering on the unrounded distance while ranking and reporting the
//! rounded one means a store 5.004 km away passes a 5.005 km radius and is
//! shown as `5.00`, while one 5.006 km away is excluded.  At a 5.00 km radius
//! the 5.004 km store is excluded too, even though it would display as
//! `5.00`.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs steps ① and ③ on Rayon's thread pool.             |
//!
//! # Quick-start
//!
//! ```
//! use sf_core::{GeoPoint, Store};
//!
//! let stores = vec![Store::new(1, "Philly", 40.0, -75.0)];
//! let outcome = sf_query::query(&stores, GeoPoint::new(40.0, -75.0), 1.0).unwrap();
//! assert_eq!(outcome.total_matches(), 1);
//! assert_eq!(outcome.nearest().unwrap().distance_km, 0.0);
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod scan;


pub use catalog::StoreCatalog;
pub use engine::{query, ProximityQueryEngine};
pub use error::{QueryError, QueryResult};
pub use outcome::{round_km, QueryOutcome, RankedStore};
pub use scan::{CandidateScan, LinearScan};
