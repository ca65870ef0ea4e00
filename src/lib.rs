pub mod clean;
pub mod cli;
pub mod crop;
pub mod detection;
pub mod error;
pub mod geometry;
pub mod transform;

pub use clean::{clean_asset_dirs, CleanOutcome, DEFAULT_ASSET_TARGETS};
pub use cli::Cli;
pub use crop::{crop_guarded, crop_to_opaque_bounds, load_rgba, save_png, CropOutcome, CropReport};
pub use detection::find_opaque_bounds;
pub use error::CropError;
pub use geometry::{BoundingBox, CroppedSize};
pub use transform::{crop_to_bounds, normalize_transparent, TRANSPARENT_FILL};
