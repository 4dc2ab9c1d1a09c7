//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::{DEFAULT_BIND, DEFAULT_OUTPUT_DIR};
use super::types::AppConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".czy-polska-firma.yaml",
    ".czy-polska-firma.yml",
    "czy-polska-firma.yaml",
    "czy-polska-firma.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/czy-polska-firma/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(config_dir) = user_config_dir()
        && let Some(path) = find_config_in_dir(&config_dir)
    {
        return Some(path);
    }

    if let Some(home) = dirs::home_dir()
        && let Some(path) = find_config_in_dir(&home)
    {
        return Some(path);
    }

    None
}

/// Per-user configuration directory.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("czy-polska-firma"))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence
    /// wherever it differs from the defaults.
    ///
    /// This is useful for layering CLI args over file config.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // Site config
        if other.site.origin.is_some() {
            self.site.origin.clone_from(&other.site.origin);
        }
        if other.site.title_suffix != defaults.site.title_suffix {
            self.site.title_suffix.clone_from(&other.site.title_suffix);
        }
        if other.site.contact_email != defaults.site.contact_email {
            self.site.contact_email.clone_from(&other.site.contact_email);
        }
        if other.site.copyright_year != defaults.site.copyright_year {
            self.site.copyright_year = other.site.copyright_year;
        }

        // Data config
        if other.data.categories.is_some() {
            self.data.categories.clone_from(&other.data.categories);
        }
        if other.data.companies.is_some() {
            self.data.companies.clone_from(&other.data.companies);
        }

        // Interaction config
        if other.interaction.confirmation_ms != defaults.interaction.confirmation_ms {
            self.interaction.confirmation_ms = other.interaction.confirmation_ms;
        }
        if other.interaction.max_attachment_mb != defaults.interaction.max_attachment_mb {
            self.interaction.max_attachment_mb = other.interaction.max_attachment_mb;
        }

        // Output config - only override if explicitly set
        if other.output.directory != Path::new(DEFAULT_OUTPUT_DIR) {
            self.output.directory.clone_from(&other.output.directory);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // Server config
        if other.server.bind != DEFAULT_BIND {
            self.server.bind.clone_from(&other.server.bind);
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r#"# CzyPolskaFirma configuration file
# ==================================
#
# Place it at:
#   - .czy-polska-firma.yaml in your project root
#   - ~/.config/czy-polska-firma/czy-polska-firma.yaml for global config
#
# CLI arguments always override file settings.

# Site identity
site:
  # Appended to page titles
  title_suffix: Czy Polska Firma
  # Public origin for absolute share links (omit for relative links)
  # origin: https://czypolskafirma.pl
  contact_email: kontakt@czypolskafirma.pl
  copyright_year: 2024

# Replacement data documents (bundled data is used when omitted)
# data:
#   categories: ./data/categories.json
#   companies: ./data/companies.json

# Interactive components
interaction:
  # How long "Skopiowano!" and the report thank-you stay visible
  confirmation_ms: 2000
  # Largest accepted report attachment
  max_attachment_mb: 10

# Static build output
output:
  directory: public
  no_color: false

# Preview server
server:
  bind: 127.0.0.1:8080
"#
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
