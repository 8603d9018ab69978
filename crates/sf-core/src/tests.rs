//! Unit tests for sf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RecordIndex, StoreId};

    #[test]
    fn index_roundtrip() {
        let r = RecordIndex(42);
        assert_eq!(r.index(), 42);
        assert_eq!(RecordIndex::try_from(42usize).unwrap(), r);
    }

    #[test]
    fn ordering() {
        assert!(RecordIndex(0) < RecordIndex(1));
        assert!(StoreId(-3) < StoreId(7));
    }

    #[test]
    fn display() {
        assert_eq!(StoreId(7).to_string(), "StoreId(7)");
        assert_eq!(RecordIndex(3).to_string(), "#3");
    }
}

#[cfg(test)]
mod geo {
    use crate::{haversine_km, CoreError, GeoPoint, EARTH_RADIUS_KM};

    #[test]
    fn zero_distance_is_exact() {
        let p = GeoPoint::new(40.0, -75.0);
        assert_eq!(p.distance_km(p), 0.0);
        assert_eq!(haversine_km(-33.8688, 151.2093, -33.8688, 151.2093), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // R · π / 180 with R = 6378.1 km
        let d = haversine_km(40.0, -75.0, 41.0, -75.0);
        assert!((d - 111.318_845).abs() < 1e-4, "got {d}");
    }

    #[test]
    fn berlin_to_paris() {
        let berlin = GeoPoint::new(52.52, 13.405);
        let paris = GeoPoint::new(48.8566, 2.3522);
        let d = berlin.distance_km(paris);
        assert!((d - 878.44).abs() < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let pairs = [
            (GeoPoint::new(40.0, -75.0), GeoPoint::new(40.009, -75.0)),
            (GeoPoint::new(-12.5, 179.9), GeoPoint::new(13.25, -179.9)),
            (GeoPoint::new(89.99, 0.0), GeoPoint::new(-89.99, 120.0)),
        ];
        for (p, q) in pairs {
            assert_eq!(p.distance_km(q), q.distance_km(p));
        }
    }

    #[test]
    fn antipodal_points_are_finite() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        for (p, q) in [
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0)),
            (GeoPoint::new(90.0, 0.0), GeoPoint::new(-90.0, 0.0)),
            (GeoPoint::new(45.0, -90.0), GeoPoint::new(-45.0, 90.0)),
        ] {
            let d = p.distance_km(q);
            assert!(d.is_finite());
            assert!((d - half_circumference).abs() < 1e-3, "got {d}");
        }
    }

    #[test]
    fn crosses_antimeridian() {
        let d = haversine_km(0.0, 179.9, 0.0, -179.9);
        assert!((d - 22.2638).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn validity() {
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(GeoPoint::new(-90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(90.0001, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn validate_names_the_component() {
        assert_eq!(
            GeoPoint::new(91.0, 0.0).validate(),
            Err(CoreError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            GeoPoint::new(0.0, 200.0).validate(),
            Err(CoreError::LongitudeOutOfRange(200.0))
        );
        assert!(GeoPoint::new(30.69, -88.04).validate().is_ok());
    }
}

#[cfg(test)]
mod store {
    use crate::{GeoPoint, Store, StoreId};

    #[test]
    fn new_fills_fields() {
        let s = Store::new(3, "Downtown", 30.695, -88.05);
        assert_eq!(s.id, StoreId(3));
        assert_eq!(s.name, "Downtown");
        assert_eq!(s.pos, GeoPoint::new(30.695, -88.05));
    }
}
