//! Resolve the fixed asset tables into a bundle of loadable URLs.

use std::collections::BTreeMap;

use crate::asset_paths::make_asset_path;
use crate::manifest::catalog::{
  COLOR_SWATCHES, EXPRESSION_IMAGES, FINALE_VIDEO, LAYER_IMAGES, PART_ICONS, PART_SOUNDS,
  PART_VIDEOS,
};
use crate::models::{AssetBundle, AssetCategory, Layers};
use crate::project::AssetResolver;

/// Build the asset bundle by resolving every manifest entry through `resolver`.
///
/// The only calls made are to the resolver, once per produced URL. Given a deterministic
/// resolver, repeated calls yield equal bundles.
pub fn build_asset_bundle<R: AssetResolver + ?Sized>(resolver: &R) -> AssetBundle {
  let image = |id: &str| resolver.from_base(&make_asset_path(AssetCategory::Image, id));
  let video = |id: &str| resolver.from_base(&make_asset_path(AssetCategory::Video, id));
  let sound = |id: &str| resolver.from_base(&make_asset_path(AssetCategory::Sound, id));

  let colors = PART_ICONS.iter().map(|id| image(*id)).collect();

  let color_dictionary = COLOR_SWATCHES
    .iter()
    .map(|(hex, id)| (hex.to_string(), image(*id)))
    .collect();

  let expressions = EXPRESSION_IMAGES.iter().map(|id| image(*id)).collect();

  let [wheel1, cam, wheel2, board, microphone, pen, screen, speaker] =
    LAYER_IMAGES.map(|(_, id)| image(id));
  let layers = Layers {
    wheel1,
    cam,
    wheel2,
    board,
    microphone,
    pen,
    screen,
    speaker,
  };

  let videos = PART_VIDEOS
    .iter()
    .map(|(id, _)| *id)
    .chain(std::iter::once(FINALE_VIDEO))
    .map(|id| video(id))
    .collect();

  // The finale video stays out of the reverse lookup.
  let mut src_dictionary = BTreeMap::new();
  for (id, part) in PART_VIDEOS {
    src_dictionary.insert(video(id), part);
  }

  let sounds = PART_SOUNDS.iter().map(|id| sound(*id)).collect();

  AssetBundle {
    colors,
    color_dictionary,
    expressions,
    layers,
    videos,
    sounds,
    src_dictionary,
  }
}
