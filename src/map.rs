//! Search map generation and rendering.
//!
//! A `TerrainMap` is the external data source an episode consumes: an
//! N×N grid of terrain classes plus one designated target cell. Terrain
//! and target are two explicit fields rather than an in-band numeric
//! marker, so a target cell can never be misread as a shifted terrain
//! class.

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    grid::{Coord, Grid},
    terrain::{ALL_TERRAIN, Terrain},
};

/// Where the hidden target may be placed during map generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPlacement {
    /// Any cell, uniformly at random.
    Anywhere,
    /// A uniformly random cell of the given terrain class.
    On(Terrain),
}

impl fmt::Display for TargetPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetPlacement::Anywhere => write!(f, "anywhere"),
            TargetPlacement::On(terrain) => write!(f, "{terrain}"),
        }
    }
}

impl FromStr for TargetPlacement {
    type Err = Error;

    fn from_str(s: &str) -> Result<TargetPlacement> {
        match s.to_lowercase().as_str() {
            "anywhere" | "any" | "random" => Ok(TargetPlacement::Anywhere),
            other => other
                .parse::<Terrain>()
                .map(TargetPlacement::On)
                .map_err(|_| Error::ParsePlacement {
                    input: other.to_string(),
                    expected: "anywhere, flat, hilly, forested, caves".to_string(),
                }),
        }
    }
}

/// An N×N terrain grid with one hidden target cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainMap {
    terrain: Grid<Terrain>,
    target: Coord,
}

impl TerrainMap {
    /// Generate a random map: each cell's terrain class drawn uniformly
    /// over the four classes, target placed per `placement`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `size` is zero, or if
    /// `placement` requires a terrain class the generated map does not
    /// contain (possible on very small maps).
    pub fn generate<R: Rng>(
        size: usize,
        placement: TargetPlacement,
        rng: &mut R,
    ) -> Result<TerrainMap> {
        if size == 0 {
            return Err(Error::InvalidConfiguration {
                message: "map size must be at least 1".to_string(),
            });
        }

        // One uniform draw per cell, split into quartiles.
        let terrain = Grid::from_fn(size, |_| {
            let p: f64 = rng.random();
            if p <= 0.25 {
                Terrain::Flat
            } else if p <= 0.5 {
                Terrain::Hilly
            } else if p <= 0.75 {
                Terrain::Forested
            } else {
                Terrain::Caves
            }
        });

        let target = match placement {
            TargetPlacement::Anywhere => random_coord(size, rng),
            TargetPlacement::On(required) => {
                if !terrain.values().any(|&t| t == required) {
                    return Err(Error::InvalidConfiguration {
                        message: format!("generated {size}x{size} map has no {required} cell"),
                    });
                }
                // Rejection sampling over uniform coordinates.
                let mut coord = random_coord(size, rng);
                while terrain[coord] != required {
                    coord = random_coord(size, rng);
                }
                coord
            }
        };

        Ok(TerrainMap { terrain, target })
    }

    /// Build a map from explicit terrain rows and a target coordinate.
    /// Intended for tests and fixed scenarios.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the rows are not
    /// square or the target lies outside the grid.
    pub fn from_rows(rows: Vec<Vec<Terrain>>, target: Coord) -> Result<TerrainMap> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return Err(Error::InvalidConfiguration {
                message: "terrain rows must form a non-empty square grid".to_string(),
            });
        }
        if target.row >= size || target.col >= size {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "target ({}, {}) outside {size}x{size} grid",
                    target.row, target.col
                ),
            });
        }
        let terrain = Grid::from_fn(size, |c| rows[c.row][c.col]);
        Ok(TerrainMap { terrain, target })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.terrain.size()
    }

    /// Terrain class at a cell.
    pub fn terrain(&self, coord: Coord) -> Terrain {
        self.terrain[coord]
    }

    /// Ground truth: does this cell hold the target? Only the sensor
    /// may consult this during a search.
    pub fn is_target(&self, coord: Coord) -> bool {
        coord == self.target
    }

    /// The target's terrain class.
    pub fn target_terrain(&self) -> Terrain {
        self.terrain[self.target]
    }

    /// Count of cells per terrain class, in `ALL_TERRAIN` order.
    pub fn terrain_census(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for &t in self.terrain.values() {
            let slot = ALL_TERRAIN.iter().position(|&k| k == t);
            counts[slot.unwrap_or(0)] += 1;
        }
        counts
    }
}

fn random_coord<R: Rng>(size: usize, rng: &mut R) -> Coord {
    Coord::new(rng.random_range(0..size), rng.random_range(0..size))
}

impl fmt::Display for TerrainMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let rule = "-".repeat(size * 5 + 1);
        writeln!(f, "{rule}")?;
        for row in 0..size {
            for col in 0..size {
                write!(f, "| {} ", self.terrain[Coord::new(row, col)].tag())?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
