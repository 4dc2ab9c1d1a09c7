//! Default values and presets.

use super::types::{AppConfig, OutputConfig, SiteConfig};
use crate::interaction::DEFAULT_MAX_ATTACHMENT_MB as FORM_MAX_ATTACHMENT_MB;
use std::path::PathBuf;

pub const DEFAULT_TITLE_SUFFIX: &str = "Czy Polska Firma";
pub const DEFAULT_CONTACT_EMAIL: &str = "kontakt@czypolskafirma.pl";
pub const DEFAULT_COPYRIGHT_YEAR: u16 = 2024;
pub const DEFAULT_CONFIRMATION_MS: u64 = 2000;
pub const DEFAULT_MAX_ATTACHMENT_MB: u64 = FORM_MAX_ATTACHMENT_MB;
pub const DEFAULT_OUTPUT_DIR: &str = "public";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Public origin used by the production preset.
pub const PRODUCTION_ORIGIN: &str = "https://czypolskafirma.pl";

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Relative links, output to `public/`
    Default,
    /// Absolute links pointing at the local preview server
    Preview,
    /// Absolute links on the public domain, output to `dist/`
    Production,
}

impl ConfigPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Preview => "preview",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "preview" | "local" => Some(Self::Preview),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Relative share links, site written to public/",
            Self::Preview => "Share links pointing at the local preview server",
            Self::Production => "Share links on the public domain, site written to dist/",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Preview, Self::Production]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Preview => Self {
                site: SiteConfig {
                    origin: Some(format!("http://{DEFAULT_BIND}")),
                    ..SiteConfig::default()
                },
                ..Self::default()
            },
            ConfigPreset::Production => Self {
                site: SiteConfig {
                    origin: Some(PRODUCTION_ORIGIN.to_string()),
                    ..SiteConfig::default()
                },
                output: OutputConfig {
                    directory: PathBuf::from("dist"),
                    no_color: true,
                },
                ..Self::default()
            },
        }
    }
}
