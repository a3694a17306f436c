//! Layered configuration for `mdclip`.
//!
//! `defaults/mdclip.default.toml` is embedded into the binary. [`Loader`]
//! layers an optional user file, `MDCLIP_*` environment variables and
//! command-line overrides on top before deserializing into [`ClipConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use markdown_clip::{ConversionOptions, SourceDocument};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdclip.default.toml");

/// Top-level configuration consumed by the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipConfig {
    pub options: OptionsConfig,
    pub source: SourceConfig,
}

/// Mirrors [`ConversionOptions`].
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OptionsConfig {
    pub preserve_links: bool,
    pub preserve_images: bool,
    pub include_source: bool,
}

impl From<OptionsConfig> for ConversionOptions {
    fn from(config: OptionsConfig) -> Self {
        ConversionOptions {
            preserve_links: config.preserve_links,
            preserve_images: config.preserve_images,
            include_source: config.include_source,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub title: String,
    pub url: String,
}

impl SourceConfig {
    /// The source document, if a url was configured.
    ///
    /// An empty title falls back to the url.
    pub fn document(&self) -> Option<SourceDocument> {
        let url = self.url.trim();
        if url.is_empty() {
            return None;
        }
        let title = match self.title.trim() {
            "" => url,
            title => title,
        };
        Some(SourceDocument::new(title, url))
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

    /// Layer `MDCLIP_<SECTION>__<KEY>` environment variables,
    /// e.g. `MDCLIP_OPTIONS__PRESERVE_IMAGES=true`.
    pub fn with_env(mut self) -> Self {
        let source = Environment::with_prefix("MDCLIP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply an override only when a value was given.
    pub fn set_override_option<I>(mut self, key: &str, value: Option<I>) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override_option(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ClipConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
