//! CoRNS - command line entry point.
//!
//! Complementary reserve selection over a site-by-species matrix.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use clap::{ArgAction, Parser};
use corns::output;
use corns::pipeline::{self, RunConfig};

#[derive(Parser)]
#[command(name = "corns")]
#[command(version, disable_version_flag = true)]
#[command(
    about = "Greedy complementary reserve selection: orders sites so each one adds the most \
             species not yet preserved, reporting cumulative counts and percent diversity"
)]
struct Cli {
    /// Site-by-species matrix (CSV): species as row headers, sites as column headers
    #[arg(short = 'i', value_name = "PATH")]
    infile: PathBuf,

    /// Matrix of a second organism group, measured against the site order of the first
    #[arg(short = 'm', value_name = "PATH")]
    infile2: Option<PathBuf>,

    /// Root name of the output file (`<root>.csv`); defaults to a timestamped name
    #[arg(short = 'o', value_name = "NAME")]
    outfile_root: Option<String>,

    /// Print version
    #[arg(short = 'v', action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let default_root = output::default_root(Local::now());
    let cli = Cli::parse();

    let target = output::resolve(Path::new(""), cli.outfile_root.as_deref(), &default_root);
    if let Some(replaced) = &target.replaced {
        log::warn!(
            "`{}` already exists. Output name changed to `{}`",
            replaced.display(),
            target.path.display()
        );
    }

    let config = RunConfig {
        primary: cli.infile,
        secondary: cli.infile2,
    };
    let report = pipeline::run(&config)?;
    report.save(&target.path)?;

    Ok(())
}
