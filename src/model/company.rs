//! Company summary and profile records.

use super::badge::Badge;
use super::breakdown::Breakdown;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing-level record of a company inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    /// Stable identifier used in profile URLs
    pub id: String,
    /// Consumer-facing brand name
    pub brand: String,
    /// Parent company name
    pub company: String,
    /// Owning category; filled from the enclosing category when omitted
    #[serde(default)]
    pub category_slug: String,
    /// Polishness index, expected in `0..=100`
    pub score: u32,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

impl CompanySummary {
    /// Profile path relative to the site root.
    #[must_use]
    pub fn profile_path(&self) -> String {
        format!("/firma/{}", self.id)
    }
}

/// Full company profile.
///
/// Every section beyond the summary is optional; renderers show a
/// placeholder for the ones that are missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub summary: CompanySummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<Headquarters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<Registry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<TaxInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<Production>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment: Option<Employment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rnd: Option<Rnd>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_origin: Option<BrandOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership: Option<Ownership>,
    /// Explicit breakdown; when absent the calculator derives one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
    /// Verification date as written in the data document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_verified: Option<String>,
}

impl CompanyDetail {
    /// Profile with every optional section absent.
    #[must_use]
    pub fn from_summary(summary: CompanySummary) -> Self {
        Self {
            summary,
            website: None,
            logo_url: None,
            headquarters: None,
            registry: None,
            tax: None,
            production: None,
            employment: None,
            rnd: None,
            brand_origin: None,
            ownership: None,
            breakdown: None,
            history: Vec::new(),
            sources: Vec::new(),
            last_verified: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.summary.brand
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.summary.score
    }

    /// Parse `lastVerified` as an ISO date.
    #[must_use]
    pub fn last_verified_date(&self) -> Option<NaiveDate> {
        self.last_verified
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headquarters {
    pub country: String,
    pub city: String,
}

/// Polish registry identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub krs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regon: Option<String>,
}

impl Registry {
    /// `(label, value)` pairs for the identifiers that are present.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [("KRS", &self.krs), ("NIP", &self.nip), ("REGON", &self.regon)]
            .into_iter()
            .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInfo {
    #[serde(rename = "paysCITinPL", default, skip_serializing_if = "Option::is_none")]
    pub pays_cit_in_pl: Option<bool>,
    #[serde(rename = "lastYear", default, skip_serializing_if = "Option::is_none")]
    pub last_year: Option<String>,
}

/// Three-valued answer for production location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionLevel {
    #[serde(rename = "tak")]
    Yes,
    #[serde(rename = "częściowo")]
    Partial,
    #[serde(rename = "nie")]
    No,
}

impl fmt::Display for ProductionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "Tak",
            Self::Partial => "Częściowo",
            Self::No => "Nie",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    #[serde(rename = "inPL", default, skip_serializing_if = "Option::is_none")]
    pub in_pl: Option<ProductionLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Three-valued answer for employment; the third value means unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentLevel {
    #[serde(rename = "tak")]
    Yes,
    #[serde(rename = "częściowo")]
    Partial,
    #[serde(rename = "brak danych")]
    NoData,
}

impl fmt::Display for EmploymentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "Tak",
            Self::Partial => "Częściowo",
            Self::NoData => "Brak danych",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employment {
    #[serde(rename = "inPL", default, skip_serializing_if = "Option::is_none")]
    pub in_pl: Option<EmploymentLevel>,
    #[serde(rename = "headcountPL", default, skip_serializing_if = "Option::is_none")]
    pub headcount_pl: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rnd {
    #[serde(rename = "inPL", default, skip_serializing_if = "Option::is_none")]
    pub in_pl: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandOrigin {
    #[serde(rename = "fromPL", default, skip_serializing_if = "Option::is_none")]
    pub from_pl: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ownership {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_tree: Option<Vec<OwnershipLevel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficial_owners: Option<Vec<BeneficialOwner>>,
}

/// One level of the ownership chain, e.g. "Spółka matka: ...".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipLevel {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficialOwner {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub date: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// External reference backing the profile data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "id": "sadownik",
        "brand": "Sadownik",
        "company": "Sadownik Sp. z o.o.",
        "categorySlug": "sklepy-spozywcze",
        "score": 88,
        "badges": ["polski_kapital", "produkcja_w_polsce"],
        "logoUrl": "/logos/sadownik.svg",
        "headquarters": {"country": "Polska", "city": "Grójec"},
        "registry": {"krs": "0000123456", "nip": "7971234567"},
        "tax": {"paysCITinPL": true, "lastYear": "2023"},
        "production": {"inPL": "częściowo"},
        "employment": {"inPL": "brak danych", "headcountPL": 1250},
        "rnd": {"inPL": false},
        "brandOrigin": {"fromPL": true},
        "breakdown": {"capital": 40, "hq": 15},
        "lastVerified": "2024-03-15"
    }"#;

    #[test]
    fn test_deserialize_full_profile() {
        let detail: CompanyDetail = serde_json::from_str(FULL).unwrap();
        assert_eq!(detail.id(), "sadownik");
        assert_eq!(detail.summary.category_slug, "sklepy-spozywcze");
        assert_eq!(detail.logo_url.as_deref(), Some("/logos/sadownik.svg"));
        assert_eq!(detail.tax.as_ref().and_then(|t| t.pays_cit_in_pl), Some(true));
        assert_eq!(
            detail.production.as_ref().and_then(|p| p.in_pl),
            Some(ProductionLevel::Partial)
        );
        assert_eq!(
            detail.employment.as_ref().and_then(|e| e.in_pl),
            Some(EmploymentLevel::NoData)
        );
        assert_eq!(detail.breakdown.map(|b| b.capital), Some(40));
        assert!(detail.history.is_empty());
        assert_eq!(
            detail.last_verified_date(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_minimal_summary_defaults() {
        let summary: CompanySummary =
            serde_json::from_str(r#"{"id": "a", "brand": "A", "company": "A SA", "score": 10}"#)
                .unwrap();
        assert!(summary.category_slug.is_empty());
        assert!(summary.badges.is_empty());
        assert_eq!(summary.profile_path(), "/firma/a");
    }

    #[test]
    fn test_registry_entries_skip_missing() {
        let registry = Registry {
            krs: Some("1".into()),
            nip: None,
            regon: Some("3".into()),
        };
        assert_eq!(registry.entries(), vec![("KRS", "1"), ("REGON", "3")]);
    }

    #[test]
    fn test_unparseable_last_verified() {
        let mut detail: CompanyDetail = serde_json::from_str(FULL).unwrap();
        detail.last_verified = Some("marzec 2024".into());
        assert_eq!(detail.last_verified_date(), None);
    }
}
