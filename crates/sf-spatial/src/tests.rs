//! Unit tests for sf-spatial.
//!
//! The index must never hide a record the distance function would accept,
//! so most tests compare against a brute-force scan.

#[cfg(test)]
mod helpers {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use sf_core::{GeoPoint, RecordIndex, Store};

    /// `n` stores scattered uniformly over the whole globe.
    pub fn random_stores(n: usize, seed: u64) -> Vec<Store> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..n)
            .map(|i| {
                Store::new(
                    i as i64,
                    format!("store-{i}"),
                    rng.gen_range(-90.0..=90.0),
                    rng.gen_range(-180.0..=180.0),
                )
            })
            .collect()
    }

    /// Records within `radius_km` by exhaustive haversine scan.
    pub fn brute_force(stores: &[Store], center: GeoPoint, radius_km: f64) -> Vec<RecordIndex> {
        stores
            .iter()
            .enumerate()
            .filter(|(_, s)| s.pos.distance_km(center) <= radius_km)
            .map(|(i, _)| RecordIndex(i as u32))
            .collect()
    }

    pub fn assert_superset(candidates: &[RecordIndex], exact: &[RecordIndex]) {
        for r in exact {
            assert!(
                candidates.binary_search(r).is_ok(),
                "record {r} within radius but missing from candidates"
            );
        }
    }
}

// ── Structure ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod structure {
    use sf_core::{GeoPoint, Store};
    use crate::StoreIndex;

    #[test]
    fn empty_build() {
        let idx = StoreIndex::build(&[]);
        assert!(idx.is_empty());
        assert_eq!(idx.len(), 0);
        assert!(idx.candidates_within(GeoPoint::new(0.0, 0.0), 1_000.0).is_empty());
    }

    #[test]
    fn len_counts_every_record() {
        let stores = vec![
            Store::new(1, "a", 10.0, 10.0),
            Store::new(2, "bad", 123.0, 10.0), // out of range, not indexed
            Store::new(3, "c", 10.1, 10.1),
        ];
        let idx = StoreIndex::build(&stores);
        assert_eq!(idx.len(), 3);
    }

    #[test]
    fn candidates_are_ascending() {
        let stores = super::helpers::random_stores(500, 7);
        let idx = StoreIndex::build(&stores);
        let c = idx.candidates_within(GeoPoint::new(10.0, 20.0), 3_000.0);
        assert!(!c.is_empty());
        assert!(c.windows(2).all(|w| w[0] < w[1]));
    }
}

// ── Candidate coverage ────────────────────────────────────────────────────────

#[cfg(test)]
mod coverage {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use sf_core::{GeoPoint, Store};
    use crate::StoreIndex;
    use super::helpers::{assert_superset, brute_force, random_stores};

    #[test]
    fn superset_of_exact_matches_random_queries() {
        let stores = random_stores(2_000, 42);
        let idx = StoreIndex::build(&stores);
        let mut rng = SmallRng::seed_from_u64(99);

        for _ in 0..200 {
            let center = GeoPoint::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
            let radius = rng.gen_range(0.0..5_000.0);
            let candidates = idx.candidates_within(center, radius);
            assert_superset(&candidates, &brute_force(&stores, center, radius));
        }
    }

    #[test]
    fn small_radius_prunes() {
        let stores = random_stores(2_000, 3);
        let idx = StoreIndex::build(&stores);
        let c = idx.candidates_within(GeoPoint::new(0.0, 0.0), 50.0);
        assert!(c.len() < stores.len() / 10);
    }

    #[test]
    fn wraps_across_antimeridian() {
        let stores = vec![
            Store::new(1, "east", 0.0, 179.95),
            Store::new(2, "west", 0.0, -179.95),
            Store::new(3, "far", 0.0, 170.0),
        ];
        let idx = StoreIndex::build(&stores);
        for center in [GeoPoint::new(0.0, 179.99), GeoPoint::new(0.0, -179.99), GeoPoint::new(0.0, 180.0)] {
            let c = idx.candidates_within(center, 20.0);
            assert_superset(&c, &brute_force(&stores, center, 20.0));
            assert_eq!(brute_force(&stores, center, 20.0).len(), 2);
        }
    }

    #[test]
    fn polar_cap_spans_every_longitude() {
        let stores = vec![
            Store::new(1, "a", 89.9, 0.0),
            Store::new(2, "b", 89.9, 180.0),
            Store::new(3, "c", 89.9, -90.0),
        ];
        let idx = StoreIndex::build(&stores);
        let center = GeoPoint::new(89.95, 90.0);
        let c = idx.candidates_within(center, 50.0);
        assert_eq!(c.len(), 3);
        assert_superset(&c, &brute_force(&stores, center, 50.0));
    }

    #[test]
    fn zero_radius_finds_exact_location() {
        let stores = vec![Store::new(1, "here", 40.0, -75.0), Store::new(2, "near", 40.001, -75.0)];
        let idx = StoreIndex::build(&stores);
        let c = idx.candidates_within(GeoPoint::new(40.0, -75.0), 0.0);
        assert_superset(&c, &brute_force(&stores, GeoPoint::new(40.0, -75.0), 0.0));
        assert!(c.contains(&sf_core::RecordIndex(0)));
    }

    #[test]
    fn huge_radius_returns_everything() {
        let stores = random_stores(300, 11);
        let idx = StoreIndex::build(&stores);
        let c = idx.candidates_within(GeoPoint::new(-45.0, 100.0), 25_000.0);
        assert_eq!(c.len(), stores.len());
    }
}
