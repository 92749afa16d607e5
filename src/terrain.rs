//! Terrain classes and their sensor characteristics.
//!
//! Every cell of a search map carries one of four terrain classes. The
//! class fixes the cell's false-negative rate: the probability that a
//! sensor query at the cell containing the target fails to detect it.
//! Terrain is immutable for the duration of a search episode.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A terrain class with a fixed false-negative rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    /// Open flat land, FNR 0.1
    Flat,
    /// Hilly ground, FNR 0.3
    Hilly,
    /// Dense forest, FNR 0.7
    Forested,
    /// Maze of caves, FNR 0.9
    Caves,
}

/// All terrain classes in ascending difficulty order.
pub const ALL_TERRAIN: [Terrain; 4] = [
    Terrain::Flat,
    Terrain::Hilly,
    Terrain::Forested,
    Terrain::Caves,
];

impl Terrain {
    /// Probability that a query at the target's cell reports "not detected".
    pub fn false_negative_rate(self) -> f64 {
        match self {
            Terrain::Flat => 0.1,
            Terrain::Hilly => 0.3,
            Terrain::Forested => 0.7,
            Terrain::Caves => 0.9,
        }
    }

    /// Numeric terrain code, 1 through 4.
    pub fn code(self) -> u8 {
        match self {
            Terrain::Flat => 1,
            Terrain::Hilly => 2,
            Terrain::Forested => 3,
            Terrain::Caves => 4,
        }
    }

    /// Decode a numeric terrain code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTerrain`] for any code outside 1-4. A bad
    /// code indicates a malformed external map and is never recovered.
    pub fn from_code(code: u8) -> Result<Terrain> {
        match code {
            1 => Ok(Terrain::Flat),
            2 => Ok(Terrain::Hilly),
            3 => Ok(Terrain::Forested),
            4 => Ok(Terrain::Caves),
            _ => Err(Error::InvalidTerrain { code }),
        }
    }

    /// Number of consecutive queries the adaptive agent spends at a cell
    /// of this terrain before moving on: the squared terrain code, so
    /// harder terrain gets quadratically more persistence (1, 4, 9, 16).
    pub fn search_effort(self) -> u32 {
        let code = u32::from(self.code());
        code * code
    }

    /// Two-letter tag used in map rendering.
    pub fn tag(self) -> &'static str {
        match self {
            Terrain::Flat => "FL",
            Terrain::Hilly => "HI",
            Terrain::Forested => "FO",
            Terrain::Caves => "CA",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Flat => "flat",
            Terrain::Hilly => "hilly",
            Terrain::Forested => "forested",
            Terrain::Caves => "caves",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Terrain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Terrain> {
        match s.to_lowercase().as_str() {
            "flat" | "flats" => Ok(Terrain::Flat),
            "hilly" | "hills" => Ok(Terrain::Hilly),
            "forested" | "forest" => Ok(Terrain::Forested),
            "caves" | "cave" => Ok(Terrain::Caves),
            other => Err(Error::UnknownTerrainName {
                name: other.to_string(),
                expected: "flat, hilly, forested, caves".to_string(),
            }),
        }
    }
}
