use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use icon_trim::cli::{CleanArgs, Command, CropArgs};
use icon_trim::{clean_asset_dirs, crop_guarded, CleanOutcome, Cli, CropOutcome};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Crop(args) => crop(&args),
        Command::Clean(args) => clean(&args),
    }
}

/// Crop failures are reported but never fail the process
fn crop(args: &CropArgs) -> Result<()> {
    match crop_guarded(&args.input, &args.output) {
        Ok(CropOutcome::Cropped(report)) => {
            info!("Cropped {:?} to {:?}", args.input, args.output);
            info!("Bounding box: {}", report.bounds);
            info!("Dimensions: {} -> {}", report.original, report.output);
        }
        Ok(CropOutcome::FullyTransparent) => {
            warn!("{:?} is fully transparent, nothing written", args.input);
        }
        Err(e) => {
            error!("{}", e);
        }
    }
    Ok(())
}

fn clean(args: &CleanArgs) -> Result<()> {
    let root = std::fs::metadata(&args.root)
        .with_context(|| format!("Failed to read project root: {:?}", args.root))?;
    if !root.is_dir() {
        bail!("Project root is not a directory: {:?}", args.root);
    }

    let results = clean_asset_dirs(&args.root, args.targets().as_slice());
    let failed = results.iter().filter(|(_, outcome)| outcome.is_failure()).count();

    for (path, outcome) in results {
        match outcome {
            CleanOutcome::Deleted => info!("Deleted {:?}", path),
            CleanOutcome::NotFound => info!("Not found: {:?}", path),
            CleanOutcome::Failed(e) => error!("Failed to delete {:?}: {}", path, e),
        }
    }

    if failed > 0 {
        warn!("{} target(s) could not be deleted", failed);
    }
    Ok(())
}
