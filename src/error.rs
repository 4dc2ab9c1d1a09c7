//! Unified error types for czy-polska-firma.
//!
//! This module provides the error hierarchy for the library,
//! with chained context for debugging and user-friendly messages.

use crate::render::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for czy-polska-firma operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SiteError {
    /// Errors while loading the data document
    #[error("Failed to load data: {context}")]
    Data {
        context: String,
        #[source]
        source: DataErrorKind,
    },

    /// Errors during page rendering
    #[error("Page rendering failed: {context}")]
    Render {
        context: String,
        #[source]
        source: RenderError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific data loading error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DataErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for czy-polska-firma operations
pub type Result<T> = std::result::Result<T, SiteError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SiteError {
    /// Create a data error with context
    pub fn data(context: impl Into<String>, source: DataErrorKind) -> Self {
        Self::Data {
            context: context.into(),
            source,
        }
    }

    /// Create a render error with context
    pub fn render(context: impl Into<String>, source: RenderError) -> Self {
        Self::Render {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for SiteError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::data(
            "JSON deserialization",
            DataErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<RenderError> for SiteError {
    fn from(err: RenderError) -> Self {
        Self::render("writing HTML", err)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
///
/// # Example
///
/// ```ignore
/// use czy_polska_firma::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path)
///     .with_context(|| format!("reading {}", path.display()))?;
/// let repo = StaticRepository::from_json_str(&content, "[]")
///     .context("loading categories")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SiteError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SiteError, new_ctx: &str) -> SiteError {
    match err {
        SiteError::Data {
            context: existing,
            source,
        } => SiteError::Data {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SiteError::Render {
            context: existing,
            source,
        } => SiteError::Render {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SiteError::Io {
            path,
            message,
            source,
        } => SiteError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SiteError::Config(msg) => SiteError::Config(chain_context(new_ctx, &msg)),
        SiteError::Validation(msg) => SiteError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::data(
            "categories.json",
            DataErrorKind::InvalidJson("expected an object".into()),
        );
        let display = err.to_string();
        assert!(
            display.contains("categories.json"),
            "Error message should mention the document: {display}"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SiteError::io("/data/companies.json", io_err);

        assert!(err.to_string().contains("/data/companies.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(SiteError::data(
                "base",
                DataErrorKind::InvalidJson("eof".into()),
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(SiteError::Data { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Data error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(SiteError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_render_error_conversion() {
        let err: SiteError = RenderError::from(std::fmt::Error).into();
        assert!(matches!(err, SiteError::Render { .. }));
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
