//! Fixed asset ids shipped with the experience.
//!
//! Every id is relative to its category directory below
//! [`ASSETS_BASE_PATH`](crate::asset_paths::ASSETS_BASE_PATH). Renaming a file on disk
//! means updating the matching entry here.

use crate::asset_paths::make_asset_path;
use crate::models::{AssetCategory, PartLabel};

/// Selectable robot-part icons.
pub const PART_ICONS: [&str; 7] = [
  "board.png",
  "cam2.png",
  "mic2.png",
  "pen.png",
  "screen2.png",
  "wheel.png",
  "speak4.png",
];

/// Hex colour paired with its paint-swatch image.
pub const COLOR_SWATCHES: [(&str, &str); 6] = [
  ("#88d0f9", "colors/DB1_v09-Blue.png"),
  ("#f9c37f", "colors/DB1_v09-Gold.png"),
  ("#f984b0", "colors/DB1_v09-Pink.png"),
  ("#a182ff", "colors/DB1_v09-Grape.png"),
  ("#cf98e5", "colors/DB1_v09-Lavender.png"),
  ("#92ed8f", "colors/DB1_v09-Lime.png"),
];

/// Facial-expression sprites.
pub const EXPRESSION_IMAGES: [&str; 8] = [
  "expressions/DB1_v09-Front-Angry.png",
  "expressions/DB1_v09-Front-Annoyed.png",
  "expressions/DB1_v09-Front-Baseline.png",
  "expressions/DB1_v09-Front-Confused.png",
  "expressions/DB1_v09-Front-Disgust.png",
  "expressions/DB1_v09-Front-Love.png",
  "expressions/DB1_v09-Front-Sad3.png",
  "expressions/DB1_v09-Front-Surprise.png",
];

/// Layer key paired with its compositing image, in [`Layers::KEYS`](crate::models::Layers::KEYS) order.
pub const LAYER_IMAGES: [(&str, &str); 8] = [
  ("wheel1", "layers/BackWheelLayer.png"),
  ("cam", "layers/CameraLayer.png"),
  ("wheel2", "layers/FrontWheelLayer.png"),
  ("board", "layers/MainBoardLayer.png"),
  ("microphone", "layers/MicrophoneLayer.png"),
  ("pen", "layers/PenLayer.png"),
  ("screen", "layers/ScreenLayer.png"),
  ("speaker", "layers/SpeakerLayer.png"),
];

/// Showcase video for each part.
pub const PART_VIDEOS: [(&str, PartLabel); 7] = [
  ("DB_amazing_v02_board.mp4", PartLabel::Board),
  ("DB_amazing_v02_cam.mp4", PartLabel::Cam),
  ("DB_amazing_v02_mic.mp4", PartLabel::Microphone),
  ("DB_amazing_v02_pen.mp4", PartLabel::Pen),
  ("DB_amazing_v02_screen.mp4", PartLabel::Screen),
  ("DB_amazing_v02_wheels.mp4", PartLabel::Wheel),
  ("DB_amazing_v02_speaker.mp4", PartLabel::Speaker),
];

/// Closing dance played once the robot is complete. It showcases no single part.
pub const FINALE_VIDEO: &str = "CompletedDoodleBotDance.mp4";

/// Sound for each part, in [`PartLabel::ALL`] order.
pub const PART_SOUNDS: [&str; 7] = [
  "board.mp3",
  "cam.mp3",
  "mic.mp3",
  "pen.mp3",
  "screen.mp3",
  "wheels.mp3",
  "speaker.mp3",
];

/// Every unique relative path the manifest references, before resolution.
pub fn relative_asset_paths() -> Vec<String> {
  let images = PART_ICONS
    .iter()
    .copied()
    .chain(COLOR_SWATCHES.iter().map(|(_, id)| *id))
    .chain(EXPRESSION_IMAGES.iter().copied())
    .chain(LAYER_IMAGES.iter().map(|(_, id)| *id))
    .map(|id| make_asset_path(AssetCategory::Image, id));
  let videos = PART_VIDEOS
    .iter()
    .map(|(id, _)| *id)
    .chain(std::iter::once(FINALE_VIDEO))
    .map(|id| make_asset_path(AssetCategory::Video, id));
  let sounds = PART_SOUNDS
    .iter()
    .map(|id| make_asset_path(AssetCategory::Sound, id));

  let mut seen = std::collections::BTreeSet::new();
  images
    .chain(videos)
    .chain(sounds)
    .filter(|path| seen.insert(path.clone()))
    .collect()
}
