//! Shared configuration loader for the mdpress toolchain.
//!
//! `defaults/mdpress.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user files on top of
//! those defaults via [`Loader`], and environment variables with the
//! `MDPRESS_` prefix layer on top of everything so credentials never need to
//! live in a file.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use mdpress_convert::ConvertOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdpress.default.toml");

/// Top-level configuration consumed by mdpress applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdpressConfig {
    pub site: SiteConfig,
    pub publish: PublishConfig,
    pub convert: ConvertConfig,
}

/// Where and as whom to publish.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl SiteConfig {
    /// True when every field needed to reach the site is present.
    pub fn is_complete(&self) -> bool {
        !self.base_url.is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Publishing behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishConfig {
    pub status: String,
    pub images_dir: String,
}

/// Mirrors the knobs exposed by the markdown converter.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub indent_width: usize,
}

impl From<ConvertConfig> for ConvertOptions {
    fn from(config: ConvertConfig) -> Self {
        ConvertOptions {
            indent_width: config.indent_width,
        }
    }
}

impl From<&ConvertConfig> for ConvertOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConvertOptions {
            indent_width: config.indent_width,
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

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    ///
    /// Environment variables are applied here, after every file source, so
    /// `MDPRESS_SITE__PASSWORD` always wins over file contents.
    pub fn build(self) -> Result<MdpressConfig, ConfigError> {
        let environment = Environment::with_prefix("MDPRESS")
            .prefix_separator("_")
            .separator("__");
        self.builder
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdpressConfig, ConfigError> {
    Loader::new().build()
}
