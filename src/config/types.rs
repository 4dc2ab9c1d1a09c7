//! Configuration types for czy-polska-firma.

use super::defaults::{
    DEFAULT_BIND, DEFAULT_CONFIRMATION_MS, DEFAULT_CONTACT_EMAIL, DEFAULT_COPYRIGHT_YEAR,
    DEFAULT_MAX_ATTACHMENT_MB, DEFAULT_OUTPUT_DIR, DEFAULT_TITLE_SUFFIX,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a config file and overridden by
/// CLI arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Site identity shown in page shells
    pub site: SiteConfig,
    /// Data document locations
    pub data: DataConfig,
    /// Timings and limits of interactive components
    pub interaction: InteractionConfig,
    /// Build output
    pub output: OutputConfig,
    /// Preview server
    pub server: ServerConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.config.site.origin = Some(origin.into());
        self
    }

    pub fn categories_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data.categories = Some(path.into());
        self
    }

    pub fn companies_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data.companies = Some(path.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output.directory = dir.into();
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub fn bind(mut self, bind: impl Into<String>) -> Self {
        self.config.server.bind = bind.into();
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SiteConfig {
    /// Appended to page titles, e.g. "Murator - Czy Polska Firma"
    pub title_suffix: String,
    /// Public origin used for absolute share links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Address shown in the footer contact column
    pub contact_email: String,
    /// Year in the copyright line
    pub copyright_year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title_suffix: DEFAULT_TITLE_SUFFIX.to_string(),
            origin: None,
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            copyright_year: DEFAULT_COPYRIGHT_YEAR,
        }
    }
}

/// Replacement data documents; the bundled ones are used when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DataConfig {
    /// Path to a categories document (object keyed by slug)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<PathBuf>,
    /// Path to a company profiles document (list)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InteractionConfig {
    /// How long confirmations stay visible, in milliseconds
    #[schemars(range(min = 1, max = 60000))]
    pub confirmation_ms: u64,
    /// Largest accepted report attachment, in megabytes
    #[schemars(range(min = 1, max = 100))]
    pub max_attachment_mb: u64,
}

impl InteractionConfig {
    #[must_use]
    pub const fn confirmation(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            confirmation_ms: DEFAULT_CONFIRMATION_MS,
            max_attachment_mb: DEFAULT_MAX_ATTACHMENT_MB,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the static site is written to
    pub directory: PathBuf,
    /// Disable colored console output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            no_color: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address of the preview server
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}
