//! Configuration for the manifest generator.
//!
//! The configuration is a small JSON document, `config.json`, that normally
//! lives next to the executable:
//!
//! ```json
//! {
//!   "baseUrl": "https://example.com/media",
//!   "createHtAccess": false,
//!   "outputDirectory": null
//! }
//! ```
//!
//! A missing file is created with defaults so a first run leaves something
//! to edit.

mod builder;

use crate::error::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use builder::ManifestConfigBuilder;

/// Default file name of the configuration document.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Base URL written into a freshly created configuration file.
pub const DEFAULT_BASE_URL: &str = "https://example.com/media";

/// Main configuration structure for manifest generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestConfig {
    /// Public URL under which local files are served. Must use https.
    pub base_url: String,

    /// Whether to emit an `.htaccess` allowing cross-origin access when the
    /// manifest has text tracks.
    #[serde(default, rename = "createHtAccess")]
    pub create_htaccess: bool,

    /// Where to write the manifest when the first source is a remote URL.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            create_htaccess: false,
            output_directory: None,
        }
    }
}

impl ManifestConfig {
    /// Parses and normalizes a configuration document without validating it.
    ///
    /// Callers that layer overrides on top (see [`ManifestConfigBuilder`])
    /// validate once the final values are known.
    pub fn parse_json(text: &str) -> CoreResult<Self> {
        let mut config: ManifestConfig = serde_json::from_str(text)
            .map_err(|e| CoreError::Config(format!("Error deserializing configuration: {e}")))?;
        config.normalize();
        Ok(config)
    }

    /// Parses a configuration document, normalizes it and validates it.
    pub fn from_json(text: &str) -> CoreResult<Self> {
        let config = Self::parse_json(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the configuration at `path` without validating it.
    pub fn read(path: &Path) -> CoreResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse_json(&text)
    }

    /// Loads and validates the configuration at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`read`](Self::read), first writing a default file if none exists.
    pub fn read_or_create(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            log::info!("Configuration not found, creating default at {}", path.display());
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_json::to_string_pretty(&Self::default())?)?;
        }
        Self::read(path)
    }

    /// Loads and validates the configuration at `path`, first writing a
    /// default one if the file does not exist.
    pub fn load_or_create(path: &Path) -> CoreResult<Self> {
        let config = Self::read_or_create(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Strips trailing slashes from the base URL.
    pub fn normalize(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = trimmed.to_string();
    }

    /// Rejects base URLs that the playback platform would refuse.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.base_url.starts_with("https://") {
            return Err(CoreError::Config(format!(
                "Base URL \"{}\" does not begin with \"https://\"; the platform will reject the media",
                self.base_url
            )));
        }
        if self.base_url.len() == "https://".len() {
            return Err(CoreError::Config("Base URL has no host".to_string()));
        }
        Ok(())
    }
}
