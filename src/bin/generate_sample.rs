use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use corns::data::sample::{SampleOptions, generate};

/// Write a random, valid site-by-species matrix for trying out `corns`.
#[derive(Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Number of sites (columns)
    #[arg(long, default_value = "20")]
    sites: usize,

    /// Number of species (rows)
    #[arg(long, default_value = "100")]
    species: usize,

    /// Probability of a presence in any cell
    #[arg(long, default_value = "0.15")]
    density: f64,

    /// Random seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Output path
    #[arg(short, long, default_value = "sample_matrix.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let options = SampleOptions {
        sites: args.sites,
        species: args.species,
        density: args.density,
        seed: args.seed,
    };

    let text = generate(&options);
    std::fs::write(&args.output, text)
        .with_context(|| format!("writing `{}`", args.output.display()))?;

    println!(
        "Wrote {} species x {} sites to {}",
        options.species.max(1),
        options.sites.max(1),
        args.output.display()
    );
    Ok(())
}
