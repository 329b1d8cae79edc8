//! Shared configuration loader for the docmark toolchain.
//!
//! `defaults/docmark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`DocmarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use docmark_markup::{PathStyle, QuoteSettings, SnippetOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/docmark.default.toml");

/// Top-level configuration consumed by docmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DocmarkConfig {
    pub smart_quotes: SmartQuotesConfig,
    pub snippet: SnippetConfig,
    pub links: LinksConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmartQuotesConfig {
    pub enabled: bool,
}

impl From<&SmartQuotesConfig> for QuoteSettings {
    fn from(config: &SmartQuotesConfig) -> Self {
        QuoteSettings {
            enabled: config.enabled,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnippetConfig {
    pub quote_id_selector: bool,
    pub respect_ignore_files: bool,
}

impl From<&SnippetConfig> for SnippetOptions {
    fn from(config: &SnippetConfig) -> Self {
        SnippetOptions {
            quote_id_selector: config.quote_id_selector,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    pub path_style: PathStyleSetting,
}

/// Path separator convention for internal links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyleSetting {
    Host,
    Posix,
    Windows,
}

impl From<PathStyleSetting> for PathStyle {
    fn from(setting: PathStyleSetting) -> Self {
        match setting {
            PathStyleSetting::Host => PathStyle::host(),
            PathStyleSetting::Posix => PathStyle::Posix,
            PathStyleSetting::Windows => PathStyle::Windows,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DocmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DocmarkConfig, ConfigError> {
    Loader::new().build()
}
