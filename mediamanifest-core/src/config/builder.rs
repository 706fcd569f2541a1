// ============================================================================
// mediamanifest-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ManifestConfig
//
// Provides a fluent API for creating ManifestConfig instances in code, for
// callers that do not read a config.json (tests, embedding applications, or
// CLI overrides layered on top of a loaded file).

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::ManifestConfig;
use crate::error::CoreResult;

/// Builder for creating ManifestConfig instances.
///
/// # Examples
///
/// ```rust
/// use mediamanifest_core::config::ManifestConfigBuilder;
///
/// let config = ManifestConfigBuilder::new()
///     .base_url("https://cdn.example.com/media/")
///     .create_htaccess(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.base_url, "https://cdn.example.com/media");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManifestConfigBuilder {
    config: ManifestConfig,
}

impl ManifestConfigBuilder {
    /// Creates a builder starting from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration, e.g. one loaded from disk.
    pub fn from_config(config: ManifestConfig) -> Self {
        Self { config }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn create_htaccess(mut self, enabled: bool) -> Self {
        self.config.create_htaccess = enabled;
        self
    }

    pub fn output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_directory = Some(dir.into());
        self
    }

    /// Normalizes and validates the configuration.
    pub fn build(mut self) -> CoreResult<ManifestConfig> {
        self.config.normalize();
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_builder_defaults() {
        let config = ManifestConfigBuilder::new().build().unwrap();
        assert_eq!(config, ManifestConfig::default());
    }

    #[test]
    fn test_builder_overrides_loaded_config() {
        let loaded = ManifestConfig::default();
        let config = ManifestConfigBuilder::from_config(loaded)
            .base_url("https://override.example.com/")
            .output_directory("/tmp/manifests")
            .build()
            .unwrap();
        assert_eq!(config.base_url, "https://override.example.com");
        assert_eq!(config.output_directory, Some(PathBuf::from("/tmp/manifests")));
    }

    #[test]
    fn test_builder_validates() {
        let result = ManifestConfigBuilder::new().base_url("ftp://example.com").build();
        assert!(matches!(result, Err(CoreError::Config(_))));
    }
}
