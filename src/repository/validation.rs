//! Consistency checks over loaded directory data.

use super::CompanyRepository;
use crate::model::{BreakdownViolation, TOTAL_POINTS};
use std::fmt;

/// A single problem found in the data documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataIssue {
    /// Company id or category slug the issue belongs to
    pub subject: String,
    pub kind: DataIssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataIssueKind {
    /// Explicit breakdown breaks the criterion table
    Breakdown(BreakdownViolation),
    /// Score outside `0..=100`
    ScoreOutOfRange(u32),
    /// Same id defined or listed more than once
    DuplicateId,
    /// `lastVerified` is not an ISO date
    UnparseableDate(String),
    /// Listing and profile disagree on the score
    ScoreMismatch { listed: u32, profile: u32 },
    /// Profile points at a category that does not exist
    UnknownCategory(String),
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.subject)?;
        match &self.kind {
            DataIssueKind::Breakdown(violation) => write!(f, "{violation}"),
            DataIssueKind::ScoreOutOfRange(score) => {
                write!(f, "score {score} is outside 0..={TOTAL_POINTS}")
            }
            DataIssueKind::DuplicateId => f.write_str("id is defined more than once"),
            DataIssueKind::UnparseableDate(raw) => {
                write!(f, "lastVerified '{raw}' is not a YYYY-MM-DD date")
            }
            DataIssueKind::ScoreMismatch { listed, profile } => {
                write!(f, "listed score {listed} differs from profile score {profile}")
            }
            DataIssueKind::UnknownCategory(slug) => write!(f, "unknown category '{slug}'"),
        }
    }
}

/// Check every profile and listing; an empty result means the data is clean.
pub fn validate_repository<R: CompanyRepository + ?Sized>(repo: &R) -> Vec<DataIssue> {
    let mut issues: Vec<DataIssue> = repo
        .duplicate_ids()
        .iter()
        .map(|id| DataIssue {
            subject: id.clone(),
            kind: DataIssueKind::DuplicateId,
        })
        .collect();

    for detail in repo.companies() {
        let issue = |kind| DataIssue {
            subject: detail.id().to_string(),
            kind,
        };

        if detail.score() > TOTAL_POINTS {
            issues.push(issue(DataIssueKind::ScoreOutOfRange(detail.score())));
        }
        if let Some(breakdown) = &detail.breakdown {
            issues.extend(
                breakdown
                    .violations()
                    .into_iter()
                    .map(|v| issue(DataIssueKind::Breakdown(v))),
            );
        }
        if let Some(raw) = &detail.last_verified
            && detail.last_verified_date().is_none()
        {
            issues.push(issue(DataIssueKind::UnparseableDate(raw.clone())));
        }
        let slug = &detail.summary.category_slug;
        if !slug.is_empty() && repo.get_category(slug).is_none() {
            issues.push(issue(DataIssueKind::UnknownCategory(slug.clone())));
        }
    }

    for category in repo.categories() {
        for item in &category.items {
            if item.score > TOTAL_POINTS {
                issues.push(DataIssue {
                    subject: format!("{}/{}", category.slug, item.id),
                    kind: DataIssueKind::ScoreOutOfRange(item.score),
                });
            }
            if let Some(detail) = repo.get_company(&item.id)
                && detail.score() != item.score
            {
                issues.push(DataIssue {
                    subject: item.id.clone(),
                    kind: DataIssueKind::ScoreMismatch {
                        listed: item.score,
                        profile: detail.score(),
                    },
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Criterion;
    use crate::repository::StaticRepository;

    const CATEGORIES: &str = r#"{
        "budowlane": {
            "name": "Budowlane",
            "short": "",
            "items": [
                {"id": "murator", "brand": "Murator", "company": "Murator SA", "score": 91},
                {"id": "przesada", "brand": "Przesada", "company": "Przesada SA", "score": 140}
            ]
        }
    }"#;

    fn load(companies: &str) -> StaticRepository {
        StaticRepository::from_json_str(CATEGORIES, companies).unwrap()
    }

    #[test]
    fn test_clean_profile_has_no_issues() {
        let repo = StaticRepository::from_json_str(
            r#"{"budowlane": {"name": "Budowlane", "items": [
                {"id": "murator", "brand": "Murator", "company": "Murator SA", "score": 91}
            ]}}"#,
            r#"[{"id": "murator", "brand": "Murator", "company": "Murator SA", "score": 91, "lastVerified": "2024-05-01"}]"#,
        )
        .unwrap();
        assert!(validate_repository(&repo).is_empty());
    }

    #[test]
    fn test_reports_breakdown_overrun() {
        let repo = load(
            r#"[{"id": "murator", "brand": "Murator", "company": "Murator SA", "score": 91,
                 "breakdown": {"capital": 45, "hq": 15, "taxes": 15, "production": 10, "employment": 10, "rnd": 5, "brandOrigin": 5}}]"#,
        );
        let issues = validate_repository(&repo);
        assert!(issues.contains(&DataIssue {
            subject: "murator".into(),
            kind: DataIssueKind::Breakdown(BreakdownViolation::OverMaximum {
                criterion: Criterion::Capital,
                value: 45
            }),
        }));
        assert!(issues.contains(&DataIssue {
            subject: "murator".into(),
            kind: DataIssueKind::Breakdown(BreakdownViolation::TotalOverLimit { total: 105 }),
        }));
    }

    #[test]
    fn test_reports_score_out_of_range() {
        let repo = load("[]");
        let issues = validate_repository(&repo);
        assert!(
            issues
                .iter()
                .any(|i| i.subject == "przesada" && i.kind == DataIssueKind::ScoreOutOfRange(140))
        );
        assert!(
            issues
                .iter()
                .any(|i| i.subject == "budowlane/przesada")
        );
    }

    #[test]
    fn test_reports_duplicates_and_bad_dates() {
        let repo = load(
            r#"[
                {"id": "murator", "brand": "Murator", "company": "Murator SA", "score": 91, "lastVerified": "wczoraj"},
                {"id": "murator", "brand": "Murator", "company": "Murator SA", "score": 91}
            ]"#,
        );
        let issues = validate_repository(&repo);
        assert!(issues.iter().any(|i| i.kind == DataIssueKind::DuplicateId));
        assert!(
            issues
                .iter()
                .any(|i| i.kind == DataIssueKind::UnparseableDate("wczoraj".into()))
        );
    }

    #[test]
    fn test_reports_score_mismatch_and_unknown_category() {
        let repo = load(
            r#"[
                {"id": "murator", "brand": "Murator", "company": "Murator SA", "score": 80},
                {"id": "sierota", "brand": "Sierota", "company": "Sierota SA", "categorySlug": "rtv-agd", "score": 50}
            ]"#,
        );
        let issues = validate_repository(&repo);
        assert!(issues.iter().any(|i| i.kind
            == DataIssueKind::ScoreMismatch {
                listed: 91,
                profile: 80
            }));
        assert!(
            issues
                .iter()
                .any(|i| i.kind == DataIssueKind::UnknownCategory("rtv-agd".into()))
        );
    }

    #[test]
    fn test_issue_display() {
        let issue = DataIssue {
            subject: "murator".into(),
            kind: DataIssueKind::ScoreOutOfRange(120),
        };
        assert_eq!(issue.to_string(), "murator: score 120 is outside 0..=100");
    }
}
