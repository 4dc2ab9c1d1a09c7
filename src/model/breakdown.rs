//! Polishness index criteria and per-criterion point breakdowns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sum of all criterion maximums.
pub const TOTAL_POINTS: u32 = 100;

/// One of the fixed criteria the index is decomposed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    /// Ownership of capital
    Capital,
    /// Registered headquarters
    Hq,
    /// Corporate income tax paid in Poland
    Taxes,
    /// Production located in Poland
    Production,
    /// Employment in Poland
    Employment,
    /// Research and development in Poland
    Rnd,
    /// Where the brand was created
    BrandOrigin,
}

impl Criterion {
    /// All criteria in display order.
    pub const ALL: [Self; 7] = [
        Self::Capital,
        Self::Hq,
        Self::Taxes,
        Self::Production,
        Self::Employment,
        Self::Rnd,
        Self::BrandOrigin,
    ];

    /// Maximum number of points this criterion can contribute.
    #[must_use]
    pub const fn max_points(self) -> u32 {
        match self {
            Self::Capital => 40,
            Self::Hq | Self::Taxes => 15,
            Self::Production | Self::Employment => 10,
            Self::Rnd | Self::BrandOrigin => 5,
        }
    }

    /// Key used in the data document.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Capital => "capital",
            Self::Hq => "hq",
            Self::Taxes => "taxes",
            Self::Production => "production",
            Self::Employment => "employment",
            Self::Rnd => "rnd",
            Self::BrandOrigin => "brandOrigin",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Capital => "Kapitał",
            Self::Hq => "Siedziba",
            Self::Taxes => "Podatki",
            Self::Production => "Produkcja",
            Self::Employment => "Zatrudnienie",
            Self::Rnd => "Badania i rozwój",
            Self::BrandOrigin => "Pochodzenie marki",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Capital => "Struktura właścicielska i pochodzenie kapitału",
            Self::Hq => "Lokalizacja siedziby głównej spółki",
            Self::Taxes => "Płacenie podatku CIT w Polsce",
            Self::Production => "Udział produkcji realizowanej w Polsce",
            Self::Employment => "Zatrudnienie pracowników w Polsce",
            Self::Rnd => "Działalność badawczo-rozwojowa w Polsce",
            Self::BrandOrigin => "Miejsce powstania marki",
        }
    }

    /// Parse a data-document key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Points awarded per criterion.
///
/// Keys missing from the data document read as zero. Values are stored as
/// loaded; use [`Breakdown::violations`] to check them against the maximums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breakdown {
    pub capital: u32,
    pub hq: u32,
    pub taxes: u32,
    pub production: u32,
    pub employment: u32,
    pub rnd: u32,
    pub brand_origin: u32,
}

impl Breakdown {
    #[must_use]
    pub const fn get(&self, criterion: Criterion) -> u32 {
        match criterion {
            Criterion::Capital => self.capital,
            Criterion::Hq => self.hq,
            Criterion::Taxes => self.taxes,
            Criterion::Production => self.production,
            Criterion::Employment => self.employment,
            Criterion::Rnd => self.rnd,
            Criterion::BrandOrigin => self.brand_origin,
        }
    }

    pub fn set(&mut self, criterion: Criterion, points: u32) {
        let slot = match criterion {
            Criterion::Capital => &mut self.capital,
            Criterion::Hq => &mut self.hq,
            Criterion::Taxes => &mut self.taxes,
            Criterion::Production => &mut self.production,
            Criterion::Employment => &mut self.employment,
            Criterion::Rnd => &mut self.rnd,
            Criterion::BrandOrigin => &mut self.brand_origin,
        };
        *slot = points;
    }

    /// Iterate `(criterion, points)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Criterion, u32)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries().map(|(_, v)| v).sum()
    }

    /// Fill ratio of one criterion as a percentage in `0.0..=100.0`.
    #[must_use]
    pub fn percentage(&self, criterion: Criterion) -> f64 {
        let value = f64::from(self.get(criterion));
        let max = f64::from(criterion.max_points());
        (value / max * 100.0).min(100.0)
    }

    /// Check the stored values against the criterion maximums and the total.
    #[must_use]
    pub fn violations(&self) -> Vec<BreakdownViolation> {
        let mut found: Vec<BreakdownViolation> = self
            .entries()
            .filter(|(c, v)| *v > c.max_points())
            .map(|(criterion, value)| BreakdownViolation::OverMaximum { criterion, value })
            .collect();

        let total = self.total();
        if total > TOTAL_POINTS {
            found.push(BreakdownViolation::TotalOverLimit { total });
        }
        found
    }
}

/// A breakdown value that breaks the criterion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownViolation {
    OverMaximum { criterion: Criterion, value: u32 },
    TotalOverLimit { total: u32 },
}

impl fmt::Display for BreakdownViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverMaximum { criterion, value } => write!(
                f,
                "{criterion} = {value} exceeds maximum {}",
                criterion.max_points()
            ),
            Self::TotalOverLimit { total } => {
                write!(f, "breakdown total {total} exceeds {TOTAL_POINTS}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximums_sum_to_total() {
        let sum: u32 = Criterion::ALL.iter().map(|c| c.max_points()).sum();
        assert_eq!(sum, TOTAL_POINTS);
    }

    #[test]
    fn test_key_roundtrip() {
        for c in Criterion::ALL {
            assert_eq!(Criterion::from_key(c.key()), Some(c));
        }
        assert_eq!(Criterion::from_key("unknown"), None);
    }

    #[test]
    fn test_deserialize_partial_breakdown() {
        let b: Breakdown = serde_json::from_str(r#"{"capital": 30, "brandOrigin": 5}"#).unwrap();
        assert_eq!(b.capital, 30);
        assert_eq!(b.brand_origin, 5);
        assert_eq!(b.hq, 0);
        assert_eq!(b.total(), 35);
    }

    #[test]
    fn test_violations() {
        let mut b = Breakdown::default();
        b.set(Criterion::Rnd, 7);
        assert_eq!(
            b.violations(),
            vec![BreakdownViolation::OverMaximum {
                criterion: Criterion::Rnd,
                value: 7
            }]
        );

        let full = Breakdown {
            capital: 40,
            hq: 15,
            taxes: 15,
            production: 10,
            employment: 10,
            rnd: 5,
            brand_origin: 5,
        };
        assert!(full.violations().is_empty());
        assert_eq!(full.total(), 100);
    }

    #[test]
    fn test_percentage_is_capped() {
        let mut b = Breakdown::default();
        b.set(Criterion::Hq, 30);
        assert!((b.percentage(Criterion::Hq) - 100.0).abs() < f64::EPSILON);
        b.set(Criterion::Capital, 10);
        assert!((b.percentage(Criterion::Capital) - 25.0).abs() < f64::EPSILON);
    }
}
