//! Shared configuration loader for markdown2html.
//!
//! `defaults/mdh.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdhConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdh_pipeline::ConversionRules;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdh.default.toml");

/// Top-level configuration consumed by markdown2html.
#[derive(Debug, Clone, Deserialize)]
pub struct MdhConfig {
    pub lists: ListsConfig,
    pub headings: HeadingsConfig,
    pub directives: DirectivesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListsConfig {
    pub unordered_marker: String,
    pub ordered_marker: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadingsConfig {
    pub marker: char,
    pub max_level: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectivesConfig {
    pub strip_char: char,
}

impl From<&MdhConfig> for ConversionRules {
    fn from(config: &MdhConfig) -> Self {
        ConversionRules {
            unordered_marker: config.lists.unordered_marker.clone(),
            ordered_marker: config.lists.ordered_marker.clone(),
            heading_marker: config.headings.marker,
            max_heading_level: config.headings.max_level,
            strip_char: config.directives.strip_char,
        }
    }
}

impl From<MdhConfig> for ConversionRules {
    fn from(config: MdhConfig) -> Self {
        ConversionRules {
            unordered_marker: config.lists.unordered_marker,
            ordered_marker: config.lists.ordered_marker,
            heading_marker: config.headings.marker,
            max_heading_level: config.headings.max_level,
            strip_char: config.directives.strip_char,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdhConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdhConfig, ConfigError> {
    Loader::new().build()
}
