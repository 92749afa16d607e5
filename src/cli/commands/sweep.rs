//! Sweep command - Benchmark the search policies against each other

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    agent::SearchPolicy,
    cli::output::{create_sweep_progress, print_kv, print_score_table, print_section},
    experiment::{ExperimentSweep, SweepConfig},
    export::SweepCsvExporter,
    map::TargetPlacement,
};

#[derive(Parser, Debug)]
#[command(about = "Run an experiment sweep comparing search policies")]
pub struct SweepArgs {
    /// Map side length N
    #[arg(long, short = 'n', default_value_t = 50)]
    pub size: usize,

    /// Episodes per (placement, policy) pair
    #[arg(long, short = 'r', default_value_t = 25)]
    pub runs: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Policies to compare (default: all three)
    #[arg(long, short = 'p', value_delimiter = ',')]
    pub policies: Vec<SearchPolicy>,

    /// Target placements to benchmark (default: anywhere plus each terrain)
    #[arg(long, value_delimiter = ',')]
    pub placements: Vec<TargetPlacement>,

    /// Export aggregated rows to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Save the full result (config + rows) as JSON
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: SweepArgs) -> Result<()> {
    let defaults = SweepConfig::default();
    let config = SweepConfig {
        size: args.size,
        runs: args.runs,
        seed: args.seed,
        policies: if args.policies.is_empty() {
            defaults.policies
        } else {
            args.policies
        },
        placements: if args.placements.is_empty() {
            defaults.placements
        } else {
            args.placements
        },
    };

    print_section("Experiment Sweep");
    print_kv("map size", &format!("{0}x{0}", config.size));
    print_kv("runs per pair", &config.runs.to_string());
    print_kv("episodes", &config.total_episodes().to_string());

    let progress = (!args.no_progress).then(|| create_sweep_progress(config.total_episodes()));
    let result = ExperimentSweep::new(config).run(|| {
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    })?;
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    print_kv("seed", &result.seed.to_string());
    print_section("Mean scores (lower is better)");
    print_score_table(&result.rows);

    if let Some(path) = &args.export {
        SweepCsvExporter::write(&result, path)?;
        println!("\nExported CSV to {}", path.display());
    }
    if let Some(path) = &args.save {
        result.save(path)?;
        println!("Saved result to {}", path.display());
    }

    Ok(())
}
