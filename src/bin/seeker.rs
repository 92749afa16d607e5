//! seeker CLI - Bayesian target search on noisy terrain grids
//!
//! This CLI provides a unified interface for:
//! - Running single search episodes with any of the three policies
//! - Sweeping experiments that benchmark the policies against each other
//! - Generating and rendering terrain maps

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "seeker")]
#[command(version, about = "Bayesian target search on noisy terrain grids", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single search episode
    Run(seeker::cli::commands::run::RunArgs),

    /// Run an experiment sweep comparing search policies
    Sweep(seeker::cli::commands::sweep::SweepArgs),

    /// Generate and render a terrain map
    Map(seeker::cli::commands::map::MapArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => seeker::cli::commands::run::execute(args),
        Commands::Sweep(args) => seeker::cli::commands::sweep::execute(args),
        Commands::Map(args) => seeker::cli::commands::map::execute(args),
    }
}
