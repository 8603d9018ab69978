//! The point-of-interest record queried by the engine.

use crate::{GeoPoint, StoreId};

/// One store in a dataset snapshot.
///
/// `name` is carried through to results untouched; only `pos` takes part in
/// distance computation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Store {
    pub id:   StoreId,
    pub name: String,
    pub pos:  GeoPoint,
}

impl Store {
    pub fn new(id: i64, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id:   StoreId(id),
            name: name.into(),
            pos:  GeoPoint::new(lat, lon),
        }
    }
}
