use super::company::CompanySummary;
use serde::{Deserialize, Serialize};

/// A named group of companies.
///
/// The slug is the key of the record in the data document, so it is not
/// part of the serialized body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(skip)]
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub items: Vec<CompanySummary>,
}

impl Category {
    /// Listing path relative to the site root.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/kategoria/{}", self.slug)
    }

    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<&CompanySummary> {
        self.items.iter().find(|item| item.id == id)
    }
}
