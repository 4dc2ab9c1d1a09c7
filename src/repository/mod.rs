//! Read-only access to categories and company profiles.
//!
//! Pages and rankers depend on the [`CompanyRepository`] trait rather than
//! on a concrete data source, so tests can substitute fixtures.
//!
//! ```ignore
//! use czy_polska_firma::repository::{CompanyRepository, StaticRepository};
//!
//! let repo = StaticRepository::bundled()?;
//! let category = repo.get_category("budowlane");
//! ```

mod static_repo;
mod validation;

pub use static_repo::StaticRepository;
pub use validation::{DataIssue, DataIssueKind, validate_repository};

use crate::model::{Category, CompanyDetail};

/// Lookup and enumeration of directory data.
pub trait CompanyRepository {
    /// Category by slug.
    fn get_category(&self, slug: &str) -> Option<&Category>;

    /// Company profile by id.
    fn get_company(&self, id: &str) -> Option<&CompanyDetail>;

    /// All categories in document order.
    fn categories(&self) -> Vec<&Category>;

    /// All company profiles, explicit records first.
    fn companies(&self) -> Vec<&CompanyDetail>;

    /// Ids that appeared more than once while loading.
    fn duplicate_ids(&self) -> &[String] {
        &[]
    }

    /// Display name of a category, falling back to the slug itself.
    fn category_name<'a>(&'a self, slug: &'a str) -> &'a str {
        self.get_category(slug).map_or(slug, |c| c.name.as_str())
    }
}
