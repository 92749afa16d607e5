//! Experiment sweeps: many episodes, aggregated scores.
//!
//! A sweep runs every configured policy over fresh random maps for each
//! target placement and reports per-(placement, policy) score
//! statistics. Within one run all policies search the same map, so the
//! comparison between policies is paired rather than across different
//! terrain draws.

use std::path::Path;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::{
    agent::{ALL_POLICIES, SearchPolicy, run_episode},
    error::{Error, Result},
    map::{TargetPlacement, TerrainMap},
    terrain::ALL_TERRAIN,
};

/// Configuration for an experiment sweep.
///
/// All parameters are explicit; nothing is read from process-wide
/// state. The default mirrors the standard benchmark: 50×50 maps,
/// 25 runs, all three policies, one placement per terrain class plus
/// unconstrained placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Map side length N.
    pub size: usize,
    /// Episodes per (placement, policy) pair.
    pub runs: usize,
    /// Seed for the sweep's RNG; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Policies to compare.
    pub policies: Vec<SearchPolicy>,
    /// Target placements to benchmark under.
    pub placements: Vec<TargetPlacement>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        let mut placements = vec![TargetPlacement::Anywhere];
        placements.extend(ALL_TERRAIN.into_iter().map(TargetPlacement::On));
        Self {
            size: 50,
            runs: 25,
            seed: None,
            policies: ALL_POLICIES.to_vec(),
            placements,
        }
    }
}

impl SweepConfig {
    /// Total number of episodes the sweep will run.
    pub fn total_episodes(&self) -> u64 {
        (self.placements.len() * self.runs * self.policies.len()) as u64
    }

    fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfiguration {
                message: "map size must be at least 1".to_string(),
            });
        }
        if self.runs == 0 {
            return Err(Error::InvalidConfiguration {
                message: "sweep needs at least one run".to_string(),
            });
        }
        if self.policies.is_empty() || self.placements.is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "sweep needs at least one policy and one placement".to_string(),
            });
        }
        Ok(())
    }
}

/// Aggregated scores for one (placement, policy) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyScore {
    pub placement: TargetPlacement,
    pub policy: SearchPolicy,
    pub runs: usize,
    pub mean_score: f64,
    pub std_dev: f64,
    pub min_score: u64,
    pub max_score: u64,
}

/// Full result of a sweep, including the configuration that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResult {
    pub config: SweepConfig,
    /// Seed the sweep actually ran with (resolved from entropy when the
    /// config left it unset).
    pub seed: u64,
    pub rows: Vec<PolicyScore>,
}

impl SweepResult {
    /// Save the result to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a previously saved result.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Runner for a configured sweep.
pub struct ExperimentSweep {
    config: SweepConfig,
}

impl ExperimentSweep {
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Run the sweep, invoking `on_episode` after every completed
    /// episode (for progress reporting).
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, on map generation failure
    /// (e.g. a required terrain class absent from a tiny map), or on a
    /// degenerate belief update.
    pub fn run(&self, mut on_episode: impl FnMut()) -> Result<SweepResult> {
        self.config.validate()?;

        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        let mut rows = Vec::new();
        for &placement in &self.config.placements {
            // scores[i] collects policy i's scores across all runs.
            let mut scores: Vec<Vec<u64>> = vec![Vec::new(); self.config.policies.len()];
            for _ in 0..self.config.runs {
                let map = TerrainMap::generate(self.config.size, placement, &mut rng)?;
                for (slot, &policy) in self.config.policies.iter().enumerate() {
                    let report = run_episode(&map, policy, &mut rng)?;
                    scores[slot].push(report.score);
                    on_episode();
                }
            }
            for (slot, &policy) in self.config.policies.iter().enumerate() {
                rows.push(summarize(placement, policy, &scores[slot]));
            }
        }

        Ok(SweepResult {
            config: self.config.clone(),
            seed,
            rows,
        })
    }
}

fn summarize(placement: TargetPlacement, policy: SearchPolicy, scores: &[u64]) -> PolicyScore {
    let samples: Vec<f64> = scores.iter().map(|&s| s as f64).collect();
    let std_dev = if samples.len() > 1 {
        samples.iter().std_dev()
    } else {
        0.0
    };
    PolicyScore {
        placement,
        policy,
        runs: scores.len(),
        mean_score: samples.iter().mean(),
        std_dev,
        min_score: scores.iter().copied().min().unwrap_or(0),
        max_score: scores.iter().copied().max().unwrap_or(0),
    }
}
