//! Tunes a three-parameter network configuration (bandwidth, cost, latency)
//! with the default run parameters and prints the best point found.
//!
//! Run with `RUST_LOG`-style verbosity through `BWO_LOG=debug` to see
//! per-generation progress on stderr.

use bwo::{EvolutionLauncher, EvolutionOptions, NetworkCost};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("BWO_LOG").unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let options = EvolutionOptions::builder()
        .dimensions(NetworkCost::DIMENSIONS)
        .build();
    let result = EvolutionLauncher::black_widow(NetworkCost::default()).evolve(&options)?;

    let coordinates: Vec<String> = result.best.genes().iter().map(|v| v.to_string()).collect();
    println!("Best solution: {}", coordinates.join(" "));
    println!("Best fitness: {}", result.fitness);

    Ok(())
}
