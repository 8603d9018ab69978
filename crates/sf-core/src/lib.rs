//! `sf-core` — foundational types for the `store-finder` workspace.
//!
//! This crate is a dependency of every other `sf-*` crate.  It has no `sf-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`geo`]   | `GeoPoint`, `haversine_km`, `EARTH_RADIUS_KM`              |
//! | [`ids`]   | `StoreId`, `RecordIndex`                                   |
//! | [`store`] | `Store` (one point-of-interest record)                     |
//! | [`error`] | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod store;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{haversine_km, GeoPoint, EARTH_RADIUS_KM};
pub use ids::{RecordIndex, StoreId};
pub use store::Store;
