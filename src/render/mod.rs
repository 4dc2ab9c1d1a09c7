//! HTML and console rendering.
//!
//! Every page is a pure function of the repository and a [`SiteContext`],
//! built with `std::fmt::Write` into a `String`. All data is escaped with
//! the helpers in [`escape`].

mod category_page;
mod company_page;
pub mod console;
pub mod escape;
mod format;
mod home_page;
mod layout;
mod report_dialog;

pub use category_page::{CategoryPageMeta, KNOWN_CATEGORY_PAGES, category_page_meta, render_category_page};
pub use company_page::{render_company_not_found, render_company_page};
pub use format::{PLACEHOLDER, format_date, format_thousands};
pub use home_page::render_home_page;
pub use layout::{PageMeta, render_not_found_page};

use crate::config::AppConfig;
use thiserror::Error;

/// Errors raised while writing a page.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RenderError {
    #[error("Formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Convenient Result type for renderers.
pub type RenderResult<T> = Result<T, RenderError>;

/// Site-wide values every page shell needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    pub title_suffix: String,
    /// Public origin; share links are relative when unset
    pub origin: Option<String>,
    pub contact_email: String,
    pub copyright_year: u16,
    pub confirmation_ms: u64,
    pub max_attachment_mb: u64,
}

impl SiteContext {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            title_suffix: config.site.title_suffix.clone(),
            origin: config.site.origin.clone(),
            contact_email: config.site.contact_email.clone(),
            copyright_year: config.site.copyright_year,
            confirmation_ms: config.interaction.confirmation_ms,
            max_attachment_mb: config.interaction.max_attachment_mb,
        }
    }

    /// `"{title} - {suffix}"`
    #[must_use]
    pub fn page_title(&self, title: &str) -> String {
        format!("{title} - {}", self.title_suffix)
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
