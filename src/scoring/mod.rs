//! Polishness index scoring.
//!
//! - [`calculate_breakdown`] derives per-criterion points when a profile
//!   has no explicit breakdown.
//! - [`rank_alternatives`] picks well-scoring companies from the same
//!   category.
//! - [`ScoreBand`] maps a score to its display band.

mod alternatives;
mod band;
mod calculator;

pub use alternatives::{ALTERNATIVES_MIN_SCORE, MAX_ALTERNATIVES, rank_alternatives};
pub use band::ScoreBand;
pub use calculator::calculate_breakdown;

use crate::model::{Breakdown, CompanyDetail};

/// The explicit breakdown of a profile, or one derived from its score and
/// badges.
#[must_use]
pub fn effective_breakdown(detail: &CompanyDetail) -> Breakdown {
    detail
        .breakdown
        .unwrap_or_else(|| calculate_breakdown(detail.score(), &detail.summary.badges))
}
