//! Bayesian target-search toolkit
//!
//! This crate provides:
//! - A grid world of four terrain classes with type-dependent sensor
//!   false-negative rates
//! - Recursive Bayesian belief updates over the target's location
//! - Three competing search policies (belief-max, containment-max,
//!   adaptive) sharing one select/travel/query/update loop
//! - An experiment sweep runner with CSV/JSON reporting

pub mod agent;
pub mod belief;
pub mod cli;
pub mod error;
pub mod experiment;
pub mod export;
pub mod grid;
pub mod map;
pub mod selector;
pub mod sensor;
pub mod terrain;

pub use agent::{ALL_POLICIES, EpisodeReport, SearchPolicy, run_episode};
pub use belief::BeliefState;
pub use error::{Error, Result};
pub use experiment::{ExperimentSweep, PolicyScore, SweepConfig, SweepResult};
pub use grid::{Coord, Grid};
pub use map::{TargetPlacement, TerrainMap};
pub use terrain::{ALL_TERRAIN, Terrain};
