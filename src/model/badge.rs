//! Qualitative company tags.

use super::breakdown::Criterion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A short snake_case tag attached to a company, e.g. `polski_kapital`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Badge(String);

/// Badges that vouch for a criterion, in criterion order.
const CRITERION_BADGES: &[(&str, Criterion)] = &[
    ("polski_kapital", Criterion::Capital),
    ("polska_siedziba", Criterion::Hq),
    ("podatki_w_polsce", Criterion::Taxes),
    ("produkcja_w_polsce", Criterion::Production),
    ("zatrudnienie_w_polsce", Criterion::Employment),
    ("rnd_w_polsce", Criterion::Rnd),
    ("polska_marka", Criterion::BrandOrigin),
];

impl Badge {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable label: underscores become spaces.
    #[must_use]
    pub fn label(&self) -> String {
        self.0.replace('_', " ")
    }

    /// The criterion this badge backs, if any.
    #[must_use]
    pub fn criterion(&self) -> Option<Criterion> {
        CRITERION_BADGES
            .iter()
            .find(|(tag, _)| *tag == self.0)
            .map(|(_, c)| *c)
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Badge {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_replaces_every_underscore() {
        assert_eq!(Badge::from("zatrudnienie_w_polsce").label(), "zatrudnienie w polsce");
        assert_eq!(Badge::from("plain").label(), "plain");
    }

    #[test]
    fn test_criterion_mapping() {
        assert_eq!(Badge::from("polski_kapital").criterion(), Some(Criterion::Capital));
        assert_eq!(Badge::from("polska_marka").criterion(), Some(Criterion::BrandOrigin));
        assert_eq!(Badge::from("rodzinna_firma").criterion(), None);
    }

    #[test]
    fn test_serde_transparent() {
        let badges: Vec<Badge> = serde_json::from_str(r#"["polski_kapital"]"#).unwrap();
        assert_eq!(badges[0].as_str(), "polski_kapital");
    }
}
