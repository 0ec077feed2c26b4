//! Data structures describing the resolved doodlebot asset bundle.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Subdirectory of the asset base that a file lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
  /// Still images: part icons, swatches, expressions and layers.
  Image,
  /// Part showcase videos and the finale dance.
  Video,
  /// Per-part sound effects.
  Sound,
}

impl AssetCategory {
  /// Directory name used for the category below the asset base.
  pub fn dir_name(self) -> &'static str {
    match self {
      Self::Image => "images",
      Self::Video => "videos",
      Self::Sound => "sounds",
    }
  }
}

/// Semantic label correlating videos, sounds and layers with a robot part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartLabel {
  /// Main circuit board.
  Board,
  /// Camera module.
  Cam,
  /// Microphone.
  Microphone,
  /// Drawing pen.
  Pen,
  /// Face screen.
  Screen,
  /// Drive wheels, treated as a single part outside of layering.
  Wheel,
  /// Speaker.
  Speaker,
}

impl PartLabel {
  /// Every part in the order used by the sound and video tables.
  pub const ALL: [PartLabel; 7] = [
    PartLabel::Board,
    PartLabel::Cam,
    PartLabel::Microphone,
    PartLabel::Pen,
    PartLabel::Screen,
    PartLabel::Wheel,
    PartLabel::Speaker,
  ];

  /// Lowercase label as it appears in serialized manifests.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Board => "board",
      Self::Cam => "cam",
      Self::Microphone => "microphone",
      Self::Pen => "pen",
      Self::Screen => "screen",
      Self::Wheel => "wheel",
      Self::Speaker => "speaker",
    }
  }

  /// Position of the part within [`PartLabel::ALL`].
  pub fn index(self) -> usize {
    match self {
      Self::Board => 0,
      Self::Cam => 1,
      Self::Microphone => 2,
      Self::Pen => 3,
      Self::Screen => 4,
      Self::Wheel => 5,
      Self::Speaker => 6,
    }
  }
}

impl fmt::Display for PartLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Compositing layers for the assembled robot, one image per physical part.
///
/// The two wheels are separate layers here even though sounds and videos treat
/// them as a single part.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Layers {
  /// Back wheel layer.
  pub wheel1: String,
  /// Camera layer.
  pub cam: String,
  /// Front wheel layer.
  pub wheel2: String,
  /// Main board layer.
  pub board: String,
  /// Microphone layer.
  pub microphone: String,
  /// Pen layer.
  pub pen: String,
  /// Screen layer.
  pub screen: String,
  /// Speaker layer.
  pub speaker: String,
}

impl Layers {
  /// Layer keys in compositing order.
  pub const KEYS: [&'static str; 8] = [
    "wheel1",
    "cam",
    "wheel2",
    "board",
    "microphone",
    "pen",
    "screen",
    "speaker",
  ];

  /// Iterate `(key, url)` pairs in compositing order.
  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
    Self::KEYS.into_iter().zip([
      self.wheel1.as_str(),
      self.cam.as_str(),
      self.wheel2.as_str(),
      self.board.as_str(),
      self.microphone.as_str(),
      self.pen.as_str(),
      self.screen.as_str(),
      self.speaker.as_str(),
    ])
  }

  /// Look up a layer by its key.
  pub fn get(&self, key: &str) -> Option<&str> {
    self
      .iter()
      .find(|(candidate, _)| *candidate == key)
      .map(|(_, url)| url)
  }

  /// Part label a layer belongs to. Both wheel layers map to [`PartLabel::Wheel`].
  pub fn part_for_key(key: &str) -> Option<PartLabel> {
    match key {
      "wheel1" | "wheel2" => Some(PartLabel::Wheel),
      "cam" => Some(PartLabel::Cam),
      "board" => Some(PartLabel::Board),
      "microphone" => Some(PartLabel::Microphone),
      "pen" => Some(PartLabel::Pen),
      "screen" => Some(PartLabel::Screen),
      "speaker" => Some(PartLabel::Speaker),
      _ => None,
    }
  }
}

/// Fully resolved asset bundle handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBundle {
  /// Selectable robot-part icons.
  pub colors: Vec<String>,
  /// Hex colour string to paint-swatch image.
  pub color_dictionary: BTreeMap<String, String>,
  /// Facial-expression sprites.
  pub expressions: Vec<String>,
  /// Layered robot-part graphics.
  pub layers: Layers,
  /// Part showcase videos followed by the finale dance.
  pub videos: Vec<String>,
  /// Part sounds, positionally aligned with [`PartLabel::ALL`].
  pub sounds: Vec<String>,
  /// Video URL back to the part it showcases.
  pub src_dictionary: BTreeMap<String, PartLabel>,
}

impl AssetBundle {
  /// Part showcased by a resolved video URL, if any.
  pub fn part_for_video(&self, url: &str) -> Option<PartLabel> {
    self.src_dictionary.get(url).copied()
  }

  /// Swatch image for a hex colour. Matching ignores case and accepts at most one
  /// leading `#`.
  pub fn swatch_for_color(&self, hex: &str) -> Option<&str> {
    let hex = hex.trim();
    let wanted = hex.strip_prefix('#').unwrap_or(hex);
    self
      .color_dictionary
      .iter()
      .find(|(key, _)| {
        key
          .strip_prefix('#')
          .unwrap_or(key.as_str())
          .eq_ignore_ascii_case(wanted)
      })
      .map(|(_, url)| url.as_str())
  }

  /// Sound played for a part.
  pub fn sound_for_part(&self, part: PartLabel) -> Option<&str> {
    self.sounds.get(part.index()).map(String::as_str)
  }

  /// Distinct resolved URLs in the bundle. `srcDictionary` keys repeat `videos`
  /// entries and are counted once.
  pub fn unique_urls(&self) -> BTreeSet<&str> {
    let mut urls: BTreeSet<&str> = BTreeSet::new();
    urls.extend(self.colors.iter().map(String::as_str));
    urls.extend(self.color_dictionary.values().map(String::as_str));
    urls.extend(self.expressions.iter().map(String::as_str));
    urls.extend(self.layers.iter().map(|(_, url)| url));
    urls.extend(self.videos.iter().map(String::as_str));
    urls.extend(self.sounds.iter().map(String::as_str));
    urls.extend(self.src_dictionary.keys().map(String::as_str));
    urls
  }
}
