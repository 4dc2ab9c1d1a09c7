//! Configuration module for czy-polska-firma.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use czy_polska_firma::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Production);
//!
//! let config = AppConfig::builder()
//!     .origin("https://czypolskafirma.pl")
//!     .output_dir("dist")
//!     .build();
//!
//! use czy_polska_firma::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.czy-polska-firma.yaml` file in your project root or
//! `~/.config/czy-polska-firma/`:
//!
//! ```yaml
//! site:
//!   origin: https://czypolskafirma.pl
//! interaction:
//!   confirmation_ms: 2000
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    ConfigPreset, DEFAULT_BIND, DEFAULT_CONFIRMATION_MS, DEFAULT_OUTPUT_DIR, PRODUCTION_ORIGIN,
};
pub use types::{
    AppConfig, AppConfigBuilder, DataConfig, InteractionConfig, OutputConfig, ServerConfig,
    SiteConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    ConfigFileError, discover_config_file, generate_full_example_config,
    load_config_file, load_or_default, user_config_dir,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.czy-polska-firma.yaml`.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
