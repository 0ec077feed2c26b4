//! Export helpers that serialise the resolved manifest and check a local asset tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::manifest::{build_asset_bundle, relative_asset_paths};
use crate::models::AssetBundle;
use crate::project::AssetResolver;

/// Outcome of checking a local asset tree against the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
  /// Directory the relative asset paths were checked under.
  pub root: PathBuf,
  /// Number of unique asset paths checked.
  pub checked: usize,
  /// Relative paths with no matching file under `root`.
  pub missing: Vec<String>,
}

impl AuditReport {
  /// Returns `true` when every referenced file exists.
  pub fn is_complete(&self) -> bool {
    self.missing.is_empty()
  }

  /// Process exit status for the audit: failure when any file is missing.
  pub fn exit_code(&self) -> ExitCode {
    if self.is_complete() {
      ExitCode::SUCCESS
    } else {
      ExitCode::FAILURE
    }
  }
}

/// Holds a resolved bundle and writes it out for the rendering layer.
pub struct ManifestExporter {
  bundle: AssetBundle,
}

impl ManifestExporter {
  /// Resolve the manifest through `resolver` and wrap the result for export.
  pub fn new<R: AssetResolver + ?Sized>(resolver: &R) -> Self {
    Self {
      bundle: build_asset_bundle(resolver),
    }
  }

  /// Wrap an already resolved bundle.
  pub fn from_bundle(bundle: AssetBundle) -> Self {
    Self { bundle }
  }

  /// Resolved bundle held by the exporter.
  pub fn bundle(&self) -> &AssetBundle {
    &self.bundle
  }

  /// Serialise the bundle as prettified JSON.
  pub fn render_json(&self) -> Result<String> {
    serde_json::to_string_pretty(&self.bundle).context("failed to serialise asset bundle")
  }

  /// Write the prettified JSON manifest to `path`, creating parent directories.
  pub fn write_json(&self, path: &Path) -> Result<()> {
    let json = self.render_json()?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
      fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!(
      "wrote {} asset urls to {}",
      self.bundle.unique_urls().len(),
      path.display()
    );
    Ok(())
  }

  /// Check that every file the manifest references exists below `root`.
  ///
  /// Paths are checked before resolution, so the report is independent of any base url.
  pub fn audit(root: &Path) -> AuditReport {
    let paths = relative_asset_paths();
    let checked = paths.len();
    let missing: Vec<String> = paths
      .into_iter()
      .filter(|relative| !root.join(relative).is_file())
      .collect();

    for relative in &missing {
      log::warn!("missing asset {} under {}", relative, root.display());
    }
    log::info!(
      "checked {} assets under {}, {} missing",
      checked,
      root.display(),
      missing.len()
    );

    AuditReport {
      root: root.to_path_buf(),
      checked,
      missing,
    }
  }
}
