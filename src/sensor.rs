//! The false-negative-prone sensor.
//!
//! A query is the only channel through which an agent learns anything
//! about ground truth. Querying a cell that does not hold the target
//! always reports "not detected". Querying the target's cell misses
//! with probability equal to the cell's false-negative rate, so a miss
//! is a modeled physical outcome and never an error.

use rand::Rng;

use crate::{grid::Coord, map::TerrainMap};

/// Run one sensor query at `coord`, consuming one uniform draw when the
/// cell holds the target. Returns `true` on detection.
pub fn query<R: Rng>(map: &TerrainMap, coord: Coord, rng: &mut R) -> bool {
    if !map.is_target(coord) {
        return false;
    }
    let sample: f64 = rng.random();
    sample > map.terrain(coord).false_negative_rate()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::terrain::Terrain;

    fn uniform_map(terrain: Terrain, target: Coord) -> TerrainMap {
        TerrainMap::from_rows(vec![vec![terrain; 3]; 3], target).unwrap()
    }

    #[test]
    fn non_target_cell_never_detects() {
        let map = uniform_map(Terrain::Flat, Coord::new(0, 0));
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(!query(&map, Coord::new(2, 2), &mut rng));
        }
    }

    #[test]
    fn non_target_query_consumes_no_randomness() {
        let map = uniform_map(Terrain::Flat, Coord::new(0, 0));
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);
        query(&map, Coord::new(1, 1), &mut rng_a);
        assert_eq!(rng_a.random::<u64>(), rng_b.random::<u64>());
    }

    #[test]
    fn target_detection_rate_tracks_fnr() {
        let map = uniform_map(Terrain::Forested, Coord::new(1, 1));
        let mut rng = StdRng::seed_from_u64(1234);
        let trials = 20_000;
        let hits = (0..trials)
            .filter(|_| query(&map, Coord::new(1, 1), &mut rng))
            .count();
        let rate = hits as f64 / trials as f64;
        // Forested detects with probability 0.3.
        assert!(
            (rate - 0.3).abs() < 0.02,
            "detection rate {rate} too far from 0.3"
        );
    }

    #[test]
    fn target_eventually_detected_even_in_caves() {
        let map = uniform_map(Terrain::Caves, Coord::new(2, 0));
        let mut rng = StdRng::seed_from_u64(77);
        let detected = (0..1000).any(|_| query(&map, Coord::new(2, 0), &mut rng));
        assert!(detected);
    }
}
