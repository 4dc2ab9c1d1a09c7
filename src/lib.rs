//! **Static directory site computing a demonstration Polishness index.**
//!
//! `czy-polska-firma` renders the CzyPolskaFirma website: category listings
//! and company profiles with a per-criterion breakdown of the "Indeks
//! polskości", Polish alternatives within each category, a report form
//! and a share button. All data is demonstrational and bundled with the
//! crate; replacement documents can be configured.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: categories, company summaries and profiles, badges and
//!   the seven scoring criteria held by a [`Breakdown`].
//! - **[`repository`]**: the [`CompanyRepository`] trait pages depend on,
//!   the bundled [`StaticRepository`] and data validation.
//! - **[`scoring`]**: [`calculate_breakdown`] derives points from a score and
//!   badges; [`rank_alternatives`] picks well-scoring companies.
//! - **[`interaction`]**: the report form and share button as state machines
//!   driven by an injected [`Clock`] and [`Host`].
//! - **[`render`]**: HTML pages and console output.
//! - **[`site`]**: routing, static generation and the preview server.
//!
//! ## Getting Started
//!
//! ```no_run
//! use czy_polska_firma::{CompanyRepository, StaticRepository, calculate_breakdown};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = StaticRepository::bundled()?;
//!
//!     for category in repo.categories() {
//!         println!("{} ({} firm)", category.name, category.items.len());
//!     }
//!
//!     if let Some(company) = repo.get_company("murator") {
//!         let breakdown = company
//!             .breakdown
//!             .unwrap_or_else(|| calculate_breakdown(company.score(), &company.summary.badges));
//!         println!("{}: {}/100", company.brand(), breakdown.total());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Building the site
//!
//! ```no_run
//! use std::path::Path;
//! use czy_polska_firma::{StaticRepository, render::SiteContext, site::build_site};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = StaticRepository::bundled()?;
//!     let summary = build_site(&repo, &SiteContext::default(), Path::new("public"))?;
//!     println!("{} pages", summary.pages);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod interaction;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod repository;
pub mod scoring;
pub mod site;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigPreset, Validatable};
pub use error::{ErrorContext, Result, SiteError};
pub use interaction::{Clock, Host, ReportForm, ShareButton};
pub use model::{Badge, Breakdown, Category, CompanyDetail, CompanySummary, Criterion};
pub use render::{RenderError, SiteContext};
pub use repository::{CompanyRepository, DataIssue, StaticRepository, validate_repository};
pub use scoring::{ScoreBand, calculate_breakdown, effective_breakdown, rank_alternatives};
pub use site::{BuildSummary, PreviewServer, Route, build_site};
