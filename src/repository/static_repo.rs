//! Repository backed by the JSON data documents.

use super::CompanyRepository;
use crate::error::{ErrorContext, Result, SiteError};
use crate::model::{Category, CompanyDetail};
use indexmap::IndexMap;
use std::path::Path;

const BUNDLED_CATEGORIES: &str = include_str!("../../data/categories.json");
const BUNDLED_COMPANIES: &str = include_str!("../../data/companies.json");

/// In-memory repository built once from the data documents.
#[derive(Debug, Clone, Default)]
pub struct StaticRepository {
    categories: IndexMap<String, Category>,
    companies: IndexMap<String, CompanyDetail>,
    duplicates: Vec<String>,
}

impl StaticRepository {
    /// Repository over the documents compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATEGORIES, BUNDLED_COMPANIES).context("bundled data")
    }

    /// Load from files on disk, using the bundled document for any path
    /// that is not given.
    pub fn load(categories: Option<&Path>, companies: Option<&Path>) -> Result<Self> {
        if categories.is_none() && companies.is_none() {
            return Self::bundled();
        }
        let categories_json = read_or_bundled(categories, BUNDLED_CATEGORIES)?;
        let companies_json = read_or_bundled(companies, BUNDLED_COMPANIES)?;
        Self::from_json_str(&categories_json, &companies_json).with_context(|| {
            let describe = |p: Option<&Path>| {
                p.map_or_else(|| "bundled".to_string(), |p| p.display().to_string())
            };
            format!("{} + {}", describe(categories), describe(companies))
        })
    }

    /// Parse both documents.
    ///
    /// `categories_json` is an object keyed by slug; `companies_json` is a
    /// list of profiles. Every id listed in a category gets a profile, a
    /// synthesized one when the list has no record for it.
    pub fn from_json_str(categories_json: &str, companies_json: &str) -> Result<Self> {
        let mut categories: IndexMap<String, Category> =
            serde_json::from_str(categories_json).context("categories.json")?;
        if categories.is_empty() {
            tracing::warn!("categories.json defines no categories");
        }
        let details: Vec<CompanyDetail> =
            serde_json::from_str(companies_json).context("companies.json")?;

        for (slug, category) in &mut categories {
            category.slug.clone_from(slug);
            for item in &mut category.items {
                if item.category_slug.is_empty() {
                    item.category_slug.clone_from(slug);
                }
            }
        }

        let mut repo = Self {
            categories,
            companies: IndexMap::with_capacity(details.len()),
            duplicates: Vec::new(),
        };

        for detail in details {
            let id = detail.id().to_string();
            if repo.companies.contains_key(&id) {
                tracing::warn!("Duplicate company record '{}', keeping the first", id);
                repo.duplicates.push(id);
                continue;
            }
            repo.companies.insert(id, detail);
        }

        repo.link_listings();

        for detail in repo.companies.values() {
            if let Some(breakdown) = &detail.breakdown {
                for violation in breakdown.violations() {
                    tracing::warn!("Company '{}': {}", detail.id(), violation);
                }
            }
        }

        tracing::debug!(
            "Loaded {} categories and {} company profiles",
            repo.categories.len(),
            repo.companies.len()
        );
        Ok(repo)
    }

    /// Fill missing category slugs on explicit records and synthesize
    /// profiles for listed companies that have none.
    fn link_listings(&mut self) {
        let mut seen_in_listings: Vec<&str> = Vec::new();
        let mut listing_duplicates = Vec::new();
        let mut synthesized = Vec::new();

        for category in self.categories.values() {
            for item in &category.items {
                if seen_in_listings.contains(&item.id.as_str()) {
                    listing_duplicates.push(item.id.clone());
                    continue;
                }
                seen_in_listings.push(&item.id);

                match self.companies.get_mut(&item.id) {
                    Some(detail) if detail.summary.category_slug.is_empty() => {
                        detail.summary.category_slug.clone_from(&category.slug);
                    }
                    Some(_) => {}
                    None => synthesized.push(CompanyDetail::from_summary(item.clone())),
                }
            }
        }

        for id in listing_duplicates {
            tracing::warn!("Company '{}' is listed in more than one place", id);
            if !self.duplicates.contains(&id) {
                self.duplicates.push(id);
            }
        }
        for detail in synthesized {
            tracing::debug!("Synthesized profile for '{}'", detail.id());
            self.companies.insert(detail.id().to_string(), detail);
        }
    }
}

fn read_or_bundled(path: Option<&Path>, bundled: &str) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e)),
        None => Ok(bundled.to_string()),
    }
}

impl CompanyRepository for StaticRepository {
    fn get_category(&self, slug: &str) -> Option<&Category> {
        self.categories.get(slug)
    }

    fn get_company(&self, id: &str) -> Option<&CompanyDetail> {
        self.companies.get(id)
    }

    fn categories(&self) -> Vec<&Category> {
        self.categories.values().collect()
    }

    fn companies(&self) -> Vec<&CompanyDetail> {
        self.companies.values().collect()
    }

    fn duplicate_ids(&self) -> &[String] {
        &self.duplicates
    }
}
