//! Map command - Generate and render a terrain map

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    cli::output::print_kv,
    map::{TargetPlacement, TerrainMap},
    terrain::ALL_TERRAIN,
};

#[derive(Parser, Debug)]
#[command(about = "Generate and render a terrain map")]
pub struct MapArgs {
    /// Map side length N
    #[arg(long, short = 'n', default_value_t = 10)]
    pub size: usize,

    /// Target placement constraint (anywhere, flat, hilly, forested, caves)
    #[arg(long, default_value = "anywhere")]
    pub placement: TargetPlacement,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reveal the target cell (hidden by default, as agents see it)
    #[arg(long)]
    pub reveal_target: bool,
}

pub fn execute(args: MapArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let map = TerrainMap::generate(args.size, args.placement, &mut rng)?;

    print!("{map}");
    print_kv("seed", &seed.to_string());

    let census = map.terrain_census();
    for (terrain, count) in ALL_TERRAIN.into_iter().zip(census) {
        print_kv(&terrain.to_string(), &format!("{count} cells"));
    }

    if args.reveal_target {
        print_kv("target terrain", &map.target_terrain().to_string());
    }

    Ok(())
}
