use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::clean::DEFAULT_ASSET_TARGETS;

#[derive(Parser, Debug)]
#[command(name = "icon-trim")]
#[command(version, about = "Crop app icons to their visible content and clean stale Xcode asset sets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crop an image to the bounding box of its non-transparent pixels
    Crop(CropArgs),
    /// Delete stale icon and launch-image asset directories
    Clean(CleanArgs),
}

#[derive(Args, Debug)]
pub struct CropArgs {
    /// Source image path
    #[arg(default_value = "assets/unnamed-removebg-preview.png")]
    pub input: PathBuf,

    /// Output path, always written as PNG
    #[arg(short, long, default_value = "assets/icon_optimized.png")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Project root the targets are relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Directory to delete; repeat for several [default: the Xcode icon and launch sets]
    #[arg(short, long = "target")]
    pub targets: Vec<PathBuf>,
}

impl CleanArgs {
    pub fn targets(&self) -> Vec<PathBuf> {
        if self.targets.is_empty() {
            DEFAULT_ASSET_TARGETS.iter().map(PathBuf::from).collect()
        } else {
            self.targets.clone()
        }
    }
}
