//! Shared orchestration for CLI command handlers.
//!
//! Handlers load configuration, turn it into a repository and a render
//! context here, and write their output through [`write_output`].

mod output;

pub use output::{OutputFormat, OutputTarget, should_use_color, write_output};

use crate::config::{AppConfig, Validatable};
use crate::error::{ErrorContext, SiteError};
use crate::render::SiteContext;
use crate::repository::StaticRepository;

/// Exit codes for scripting and CI
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Requested category or company does not exist
    pub const NOT_FOUND: i32 = 1;
    /// The data document has invariant violations
    pub const VALIDATION_ISSUES: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Rejects `config` when any field fails validation, listing every problem.
pub fn ensure_valid_config(config: &AppConfig) -> crate::Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let problems: Vec<String> = errors.iter().map(ToString::to_string).collect();
    tracing::debug!(count = errors.len(), "configuration rejected");
    Err(SiteError::validation(format!(
        "invalid configuration: {}",
        problems.join("; ")
    )))
}

/// Repository for the data files named in `config`, bundled data otherwise.
pub fn load_repository(config: &AppConfig) -> crate::Result<StaticRepository> {
    StaticRepository::load(
        config.data.categories.as_deref(),
        config.data.companies.as_deref(),
    )
    .context("loading directory data")
}

/// Render context for `config`.
#[must_use]
pub fn site_context(config: &AppConfig) -> SiteContext {
    SiteContext::from_config(config)
}
