use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

mod demo;

/// Builds a level, tessellates both render passes, runs random ticks and
/// destroys a block, then reports what came out.
#[derive(Parser, Debug)]
#[command(name = "cubit", version, about)]
struct Args {
    /// Tile definitions (TOML). Uses the built-in set when omitted.
    #[arg(long)]
    tiles: Option<PathBuf>,
    /// Terrain parameters (TOML). Uses defaults when omitted.
    #[arg(long)]
    terrain: Option<PathBuf>,
    #[arg(long, default_value_t = 64)]
    width: i32,
    #[arg(long, default_value_t = 64)]
    height: i32,
    #[arg(long, default_value_t = 64)]
    depth: i32,
    #[arg(long, default_value_t = 1337)]
    seed: i32,
    /// Random ticks to run before the second rebuild.
    #[arg(long, default_value_t = 4096)]
    ticks: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let opts = demo::DemoOptions {
        tiles: args.tiles,
        terrain: args.terrain,
        size: (args.width, args.height, args.depth),
        seed: args.seed,
        ticks: args.ticks,
    };
    let summary = demo::run(&opts)?;
    log::info!(
        "done: {} lit + {} shadow quads, {} cells changed by ticks, {} debris",
        summary.lit_quads,
        summary.shadow_quads,
        summary.tick_changes,
        summary.debris
    );
    Ok(())
}
