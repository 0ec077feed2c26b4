//! Configuration loader for the manifest export tooling.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::project::BaseUrlResolver;

/// File name searched for when discovering configuration.
pub const DEFAULT_CONFIG_FILE: &str = "doodlebot.config.json";

/// Settings controlling how the manifest is resolved, exported and audited.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Prefix applied to every relative asset path.
    pub base_url: String,
    /// Local directory holding the `build-a-doodlebot` asset tree.
    pub asset_root: PathBuf,
    /// Destination of the exported JSON manifest.
    pub output: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            asset_root: "static".into(),
            output: "target/doodlebot-assets.json".into(),
        }
    }
}

/// Errors that can occur while loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to parse the JSON configuration file.
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
}

impl ManifestConfig {
    /// Load configuration from `dir`, falling back to defaults when the file is absent.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        match fs::read_to_string(&candidate) {
            Ok(content) => Self::parse(&candidate, &content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io {
                path: candidate,
                source: err,
            }),
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Replace configured values with any provided command-line overrides.
    ///
    /// Overridden paths follow the same rule as configured ones: relative paths are
    /// resolved against the configuration directory by [`Self::asset_root_path`] and
    /// [`Self::output_path`].
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        output: Option<PathBuf>,
        asset_root: Option<PathBuf>,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(asset_root) = asset_root {
            self.asset_root = asset_root;
        }
        self
    }

    /// Resolver prefixing asset paths with the configured base url.
    pub fn resolver(&self) -> BaseUrlResolver {
        BaseUrlResolver::new(self.base_url.clone())
    }

    /// Asset root resolved against `dir`. Absolute roots are returned unchanged.
    pub fn asset_root_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.asset_root)
    }

    /// Output path resolved against `dir`. Absolute paths are returned unchanged.
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.output)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::AssetResolver;
    use tempfile::tempdir;

    #[test]
    fn discover_returns_defaults_for_missing_file() {
        let temp = tempdir().expect("failed to create temp dir");
        let config = ManifestConfig::discover(temp.path()).expect("missing files are not errors");
        assert_eq!(config, ManifestConfig::default());
    }

    #[test]
    fn discover_reads_partial_configuration() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{"base_url": "https://cdn.example.com"}"#,
        )
        .expect("failed to write config");

        let config = ManifestConfig::discover(temp.path()).expect("config should load");
        assert_eq!(config.base_url, "https://cdn.example.com");
        assert_eq!(config.asset_root, Path::new("static"));
        assert_eq!(
            config.resolver().from_base("build-a-doodlebot/sounds/pen.mp3"),
            "https://cdn.example.com/build-a-doodlebot/sounds/pen.mp3"
        );
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ not json").expect("failed to write config");

        let err = ManifestConfig::load(&path).expect_err("invalid JSON should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn load_reports_missing_files() {
        let temp = tempdir().expect("failed to create temp dir");
        let err = ManifestConfig::load(temp.path().join("absent.json"))
            .expect_err("explicit paths must exist");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn paths_are_relative_to_the_config_dir() {
        let config = ManifestConfig::default();
        let dir = Path::new("project");
        assert_eq!(config.asset_root_path(dir), dir.join("static"));
        assert_eq!(
            config.output_path(dir),
            dir.join("target/doodlebot-assets.json")
        );
    }

    #[test]
    fn overrides_take_precedence_over_file_values() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{"base_url": "/static", "asset_root": "public", "output": "dist/assets.json"}"#,
        )
        .expect("failed to write config");

        let config = ManifestConfig::discover(temp.path())
            .expect("config should load")
            .with_overrides(
                Some("https://cdn.example.com".into()),
                Some(PathBuf::from("out.json")),
                None,
            );

        assert_eq!(config.base_url, "https://cdn.example.com");
        assert_eq!(config.output_path(temp.path()), temp.path().join("out.json"));
        assert_eq!(config.asset_root_path(temp.path()), temp.path().join("public"));
    }

    #[test]
    fn missing_overrides_keep_file_values() {
        let config = ManifestConfig {
            base_url: "/static".into(),
            asset_root: "public".into(),
            output: "dist/assets.json".into(),
        }
        .with_overrides(None, None, None);

        assert_eq!(config.base_url, "/static");
        assert_eq!(config.output, Path::new("dist/assets.json"));
        assert_eq!(config.asset_root, Path::new("public"));
    }

    #[test]
    fn absolute_overrides_ignore_the_config_dir() {
        let temp = tempdir().expect("failed to create temp dir");
        let absolute = temp.path().join("elsewhere/assets");
        let config = ManifestConfig::default().with_overrides(None, None, Some(absolute.clone()));
        assert_eq!(config.asset_root_path(Path::new("project")), absolute);
    }
}
