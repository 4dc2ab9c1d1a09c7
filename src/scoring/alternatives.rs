//! Polish alternatives within a category.

use crate::model::CompanySummary;
use crate::repository::CompanyRepository;

/// Minimum score for a company to be suggested as an alternative.
pub const ALTERNATIVES_MIN_SCORE: u32 = 70;

/// Maximum number of suggested alternatives.
pub const MAX_ALTERNATIVES: usize = 6;

/// Other companies in `category_slug` scoring at least
/// [`ALTERNATIVES_MIN_SCORE`], best first, at most [`MAX_ALTERNATIVES`].
///
/// Equal scores keep their listing order. An unknown category yields an
/// empty list.
pub fn rank_alternatives<'a, R: CompanyRepository + ?Sized>(
    repo: &'a R,
    category_slug: &str,
    current_id: &str,
) -> Vec<&'a CompanySummary> {
    let Some(category) = repo.get_category(category_slug) else {
        return Vec::new();
    };

    let mut ranked: Vec<&CompanySummary> = category
        .items
        .iter()
        .filter(|item| item.id != current_id && item.score >= ALTERNATIVES_MIN_SCORE)
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(MAX_ALTERNATIVES);
    ranked
}
