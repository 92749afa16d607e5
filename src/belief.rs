//! Posterior belief over the target's location.
//!
//! The belief grid holds P(target at cell | all observations so far),
//! initialized uniformly and renormalized after every negative sensor
//! observation. It is owned by exactly one search episode and discarded
//! when the target is found.
//!
//! The update for a miss at cell q with false-negative rate f is
//! standard recursive Bayes:
//!
//! ```text
//! D    = f·B(q) + (1 − B(q))
//! B(q) ← f·B(q) / D
//! B(c) ← B(c) / D        for all c ≠ q
//! ```
//!
//! Starting from a strictly positive uniform prior, B(q) stays inside
//! (0, 1) and D stays positive, so a non-positive denominator can only
//! mean a corrupted grid and is reported as a fatal
//! [`Error::DegenerateBelief`].

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    grid::{Coord, Grid},
    map::TerrainMap,
};

/// An N×N probability distribution over target location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeliefState {
    grid: Grid<f64>,
}

impl BeliefState {
    /// Uniform prior: every cell at 1/N².
    pub fn uniform(size: usize) -> BeliefState {
        let cells = (size * size) as f64;
        BeliefState {
            grid: Grid::filled(size, 1.0 / cells),
        }
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Current belief at a cell.
    pub fn at(&self, coord: Coord) -> f64 {
        self.grid[coord]
    }

    /// The scoring grid used for belief-maximizing selection.
    pub fn grid(&self) -> &Grid<f64> {
        &self.grid
    }

    /// Sum of all cell probabilities. 1.0 up to floating-point error.
    pub fn total_mass(&self) -> f64 {
        self.grid.values().sum()
    }

    /// Condition the belief on a negative observation at `queried` with
    /// false-negative rate `fnr`.
    ///
    /// Strictly decreases the queried cell's belief (for fnr < 1) and
    /// strictly increases every other cell's, preserving total mass 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateBelief`] if the prior at `queried`
    /// lies outside [0, 1] or the renormalization denominator is not
    /// positive. Both indicate a corrupted grid, not a recoverable
    /// condition.
    pub fn observe_miss(&mut self, queried: Coord, fnr: f64) -> Result<()> {
        let prior = self.grid[queried];
        let denominator = fnr * prior + (1.0 - prior);
        if !(0.0..=1.0).contains(&prior) || !denominator.is_finite() || denominator <= 0.0 {
            return Err(Error::DegenerateBelief {
                row: queried.row,
                col: queried.col,
                prior,
                denominator,
            });
        }
        // Single elementwise pass over the dense grid.
        self.grid.transform(|coord, &b| {
            if coord == queried {
                b * fnr / denominator
            } else {
                b / denominator
            }
        });
        Ok(())
    }

    /// Derive the containment-probability grid against `map`:
    /// belief(c) × (1 − FNR(terrain(c))), the probability the target is
    /// at c AND a query there would detect it. Recomputed from scratch
    /// after every update; never persisted independently.
    pub fn containment(&self, map: &TerrainMap) -> Grid<f64> {
        Grid::from_fn(self.size(), |coord| {
            self.grid[coord] * (1.0 - map.terrain(coord).false_negative_rate())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::Terrain;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn uniform_prior_sums_to_one() {
        let belief = BeliefState::uniform(7);
        assert!((belief.total_mass() - 1.0).abs() < TOLERANCE);
        assert!((belief.at(Coord::new(3, 3)) - 1.0 / 49.0).abs() < TOLERANCE);
    }

    #[test]
    fn miss_preserves_total_mass() {
        let mut belief = BeliefState::uniform(5);
        for (coord, fnr) in [
            (Coord::new(0, 0), 0.1),
            (Coord::new(4, 4), 0.9),
            (Coord::new(2, 3), 0.3),
            (Coord::new(0, 0), 0.1),
        ] {
            belief.observe_miss(coord, fnr).unwrap();
            assert!(
                (belief.total_mass() - 1.0).abs() < TOLERANCE,
                "mass drifted after miss at ({}, {})",
                coord.row,
                coord.col
            );
        }
    }

    #[test]
    fn miss_moves_mass_away_from_queried_cell() {
        let mut belief = BeliefState::uniform(4);
        let queried = Coord::new(1, 2);
        let other = Coord::new(3, 0);
        let prior_queried = belief.at(queried);
        let prior_other = belief.at(other);

        belief.observe_miss(queried, 0.3).unwrap();

        assert!(belief.at(queried) < prior_queried);
        assert!(belief.at(other) > prior_other);
    }

    #[test]
    fn miss_update_matches_hand_computation() {
        // 2x2 uniform prior 0.25, flat terrain miss at (0, 0):
        // D = 0.1*0.25 + 0.75 = 0.775
        let mut belief = BeliefState::uniform(2);
        belief
            .observe_miss(Coord::new(0, 0), Terrain::Flat.false_negative_rate())
            .unwrap();

        let expected_queried = 0.1 * 0.25 / 0.775;
        let expected_other = 0.25 / 0.775;
        assert!((belief.at(Coord::new(0, 0)) - expected_queried).abs() < TOLERANCE);
        for coord in [Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)] {
            assert!((belief.at(coord) - expected_other).abs() < TOLERANCE);
        }
    }

    #[test]
    fn corrupted_prior_is_degenerate() {
        let mut belief = BeliefState::uniform(2);
        belief.grid[Coord::new(0, 0)] = 1.5;
        let err = belief.observe_miss(Coord::new(0, 0), 0.0).unwrap_err();
        assert!(matches!(err, Error::DegenerateBelief { .. }));
    }

    #[test]
    fn containment_discounts_by_detection_probability() {
        let rows = vec![
            vec![Terrain::Flat, Terrain::Caves],
            vec![Terrain::Forested, Terrain::Hilly],
        ];
        let map = TerrainMap::from_rows(rows, Coord::new(0, 0)).unwrap();
        let belief = BeliefState::uniform(2);
        let containment = belief.containment(&map);

        assert!((containment[Coord::new(0, 0)] - 0.25 * 0.9).abs() < TOLERANCE);
        assert!((containment[Coord::new(0, 1)] - 0.25 * 0.1).abs() < TOLERANCE);
        assert!((containment[Coord::new(1, 0)] - 0.25 * 0.3).abs() < TOLERANCE);
        assert!((containment[Coord::new(1, 1)] - 0.25 * 0.7).abs() < TOLERANCE);
    }
}
