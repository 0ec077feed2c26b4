//! Asset manifest: the fixed tables of asset ids and the builder that resolves them.

mod catalog;
mod generation;

pub use catalog::{
  COLOR_SWATCHES, EXPRESSION_IMAGES, FINALE_VIDEO, LAYER_IMAGES, PART_ICONS, PART_SOUNDS,
  PART_VIDEOS, relative_asset_paths,
};
pub use generation::build_asset_bundle;
