//! Capabilities injected by the hosting experience.

use crate::asset_paths::{is_absolute_reference, join_url};
use crate::manifest::build_asset_bundle;
use crate::models::AssetBundle;

/// Resolves a path relative to the asset root into a loadable URL.
///
/// Implementations should be deterministic: the manifest builder calls the resolver
/// once per produced URL and assumes the same input always yields the same output.
pub trait AssetResolver {
  /// Map a relative asset path to a fully qualified URL.
  fn from_base(&self, src: &str) -> String;
}

impl<F> AssetResolver for F
where
  F: Fn(&str) -> String,
{
  fn from_base(&self, src: &str) -> String {
    self(src)
  }
}

/// Moves the experience to a scene on the following page.
pub trait SceneNavigator {
  /// Switch to `scene_index` once the next page is shown.
  fn go_to_scene_in_next_page(&self, scene_index: usize);
}

impl<F> SceneNavigator for F
where
  F: Fn(usize),
{
  fn go_to_scene_in_next_page(&self, scene_index: usize) {
    self(scene_index)
  }
}

/// Pair of capabilities the hosting page hands to each scene.
#[derive(Debug, Clone)]
pub struct SceneContext<R, N> {
  /// Asset path resolver.
  pub resolver: R,
  /// Scene navigation hook.
  pub navigator: N,
}

impl<R: AssetResolver, N: SceneNavigator> SceneContext<R, N> {
  /// Create a context from its two capabilities.
  pub fn new(resolver: R, navigator: N) -> Self {
    Self {
      resolver,
      navigator,
    }
  }

  /// Build the asset bundle using only the resolver half of the context.
  pub fn assets(&self) -> AssetBundle {
    build_asset_bundle(&self.resolver)
  }

  /// Forward a navigation request to the host.
  pub fn go_to_scene_in_next_page(&self, scene_index: usize) {
    self.navigator.go_to_scene_in_next_page(scene_index);
  }
}

/// Resolver that prefixes relative paths with a fixed base URL or directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseUrlResolver {
  base_url: String,
}

impl BaseUrlResolver {
  /// Create a resolver for the provided base. An empty base leaves paths relative.
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
    }
  }

  /// Base prefix applied to relative paths.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

impl AssetResolver for BaseUrlResolver {
  fn from_base(&self, src: &str) -> String {
    if is_absolute_reference(src) {
      return src.to_string();
    }
    join_url(&self.base_url, src)
  }
}
