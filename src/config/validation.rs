//! Configuration validation.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, DataConfig, InteractionConfig, OutputConfig, ServerConfig, SiteConfig};
use std::net::SocketAddr;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.site.validate());
        errors.extend(self.data.validate());
        errors.extend(self.interaction.validate());
        errors.extend(self.output.validate());
        errors.extend(self.server.validate());
        errors
    }
}

impl Validatable for SiteConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref origin) = self.origin
            && !(origin.starts_with("http://") || origin.starts_with("https://"))
        {
            errors.push(ConfigError {
                field: "site.origin".to_string(),
                message: format!("Origin must start with http:// or https://, got '{origin}'"),
            });
        }

        if !self.contact_email.contains('@') {
            errors.push(ConfigError {
                field: "site.contact_email".to_string(),
                message: format!("Not an email address: '{}'", self.contact_email),
            });
        }

        errors
    }
}

impl Validatable for DataConfig {
    fn validate(&self) -> Vec<ConfigError> {
        [("data.categories", &self.categories), ("data.companies", &self.companies)]
            .into_iter()
            .filter_map(|(field, path)| {
                let path = path.as_ref()?;
                (!path.exists()).then(|| ConfigError {
                    field: field.to_string(),
                    message: format!("File does not exist: {}", path.display()),
                })
            })
            .collect()
    }
}

impl Validatable for InteractionConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(1..=60_000).contains(&self.confirmation_ms) {
            errors.push(ConfigError {
                field: "interaction.confirmation_ms".to_string(),
                message: format!(
                    "Confirmation time must be between 1 and 60000 ms, got {}",
                    self.confirmation_ms
                ),
            });
        }

        if !(1..=100).contains(&self.max_attachment_mb) {
            errors.push(ConfigError {
                field: "interaction.max_attachment_mb".to_string(),
                message: format!(
                    "Attachment limit must be between 1 and 100 MB, got {}",
                    self.max_attachment_mb
                ),
            });
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.directory.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "output.directory".to_string(),
                message: "Output directory must not be empty".to_string(),
            });
        }
        errors
    }
}

impl Validatable for ServerConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.bind.parse::<SocketAddr>().is_err() {
            errors.push(ConfigError {
                field: "server.bind".to_string(),
                message: format!("Not a socket address: '{}'", self.bind),
            });
        }
        errors
    }
}
