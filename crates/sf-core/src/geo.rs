//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Distances are reported in
//! kilometres and compared against caller-supplied radii, so single precision
//! would let rounding decide membership at the radius edge.

use crate::{CoreError, CoreResult};

/// Sphere radius used by [`haversine_km`], in kilometres.
///
/// Fixed; stored results are only comparable across runs if every query uses
/// the same constant.
pub const EARTH_RADIUS_KM: f64 = 6378.1;

/// Haversine great-circle distance in kilometres between `(lat1, lon1)` and
/// `(lat2, lon2)`, all in degrees.
///
/// Total over the valid coordinate domain: the intermediate term is clamped
/// to `[0, 1]` so floating-point overshoot near identical or antipodal points
/// can never feed a negative value into `sqrt`.  Identical inputs return
/// exactly `0.0`.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    // Absolute deltas keep the result bit-identical under argument swap.
    let d_lat = (lat2 - lat1).abs();
    let d_lon = (lon2 - lon1).abs();

    let a = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` if both components are finite and inside `[-90, 90]` ×
    /// `[-180, 180]`.
    #[inline]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Like [`is_valid`](Self::is_valid) but reports which component is out
    /// of range.
    pub fn validate(self) -> CoreResult<Self> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoreError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(CoreError::LongitudeOutOfRange(self.lon));
        }
        Ok(self)
    }

    /// Haversine great-circle distance to `other` in kilometres.
    #[inline]
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
