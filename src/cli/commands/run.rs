//! Run command - One search episode on a freshly generated map

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    agent::{SearchPolicy, run_episode},
    cli::output::{print_kv, print_section},
    map::{TargetPlacement, TerrainMap},
};

#[derive(Parser, Debug)]
#[command(about = "Run a single search episode")]
pub struct RunArgs {
    /// Search policy to run
    #[arg(long, short = 'p', default_value = "adaptive")]
    pub policy: SearchPolicy,

    /// Map side length N
    #[arg(long, short = 'n', default_value_t = 50)]
    pub size: usize,

    /// Target placement constraint (anywhere, flat, hilly, forested, caves)
    #[arg(long, default_value = "anywhere")]
    pub placement: TargetPlacement,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render the generated map before searching
    #[arg(long)]
    pub show_map: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    let map = TerrainMap::generate(args.size, args.placement, &mut rng)?;
    if args.show_map {
        print!("{map}");
    }

    print_section("Search Episode");
    print_kv("policy", &args.policy.to_string());
    print_kv("map size", &format!("{0}x{0}", args.size));
    print_kv("placement", &args.placement.to_string());
    print_kv("target terrain", &map.target_terrain().to_string());
    print_kv("seed", &seed.to_string());

    let report = run_episode(&map, args.policy, &mut rng)?;

    print_section("Result");
    print_kv("score", &report.score.to_string());
    print_kv("travel cost", &report.travel_cost.to_string());
    print_kv("queries", &report.queries.to_string());
    print_kv("cell visits", &report.visits.to_string());
    print_kv(
        "found at",
        &format!("({}, {})", report.found_at.row, report.found_at.col),
    );

    Ok(())
}
