#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod builder;
pub mod config;
pub mod manifest;
pub mod models;
pub mod project;

pub use builder::{AuditReport, ManifestExporter};
pub use config::{ConfigError, ManifestConfig};
pub use manifest::build_asset_bundle;
pub use models::{AssetBundle, AssetCategory, Layers, PartLabel};
pub use project::{AssetResolver, BaseUrlResolver, SceneContext, SceneNavigator};
