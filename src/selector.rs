//! Next-cell selection with the three-level tie-break chain.
//!
//! Candidates are ranked by score (belief or containment probability),
//! then by Manhattan distance from the agent, then uniformly at random.
//! Under a uniform prior every cell ties at the maximum, so the distance
//! level does real work early in a search and must not be short-circuited
//! by first-match selection.

use rand::{Rng, prelude::IndexedRandom};

use crate::grid::{Coord, Grid};

/// Pick the next cell to query from `scores`.
///
/// 1. Collect all cells at the maximum score.
/// 2. Among those, keep the cells nearest `agent` by Manhattan distance.
/// 3. Among those, choose uniformly at random with the injected `rng`.
///
/// The score grid is non-empty and finite by construction, so an empty
/// candidate set is a programming error and asserts.
pub fn select_cell<R: Rng>(scores: &Grid<f64>, agent: Coord, rng: &mut R) -> Coord {
    let max = scores
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(max.is_finite(), "score grid must be non-empty and finite");

    let candidates: Vec<Coord> = scores
        .enumerate()
        .filter(|&(_, &score)| score == max)
        .map(|(coord, _)| coord)
        .collect();
    assert!(!candidates.is_empty(), "candidate set cannot be empty");

    if candidates.len() == 1 {
        return candidates[0];
    }

    let shortest = candidates
        .iter()
        .map(|&c| c.manhattan_distance(agent))
        .min()
        .expect("non-empty candidate set");
    let nearest: Vec<Coord> = candidates
        .into_iter()
        .filter(|&c| c.manhattan_distance(agent) == shortest)
        .collect();

    if nearest.len() == 1 {
        nearest[0]
    } else {
        *nearest.choose(rng).expect("non-empty tie set")
    }
}
