//! Fallback breakdown derivation from an overall score and badges.

use crate::model::{Badge, Breakdown, Criterion, TOTAL_POINTS};

/// Derive a per-criterion breakdown from an overall score.
///
/// Scores above [`TOTAL_POINTS`] are clamped. Criteria vouched for by a
/// badge are filled first, in table order, up to their maximum. The rest
/// of the score is spread over the remaining criteria in proportion to
/// their maximums using the largest-remainder method, ties going to the
/// earlier criterion. The result always sums to the clamped score and
/// never exceeds a criterion maximum.
///
/// ```
/// use czy_polska_firma::model::{Badge, Criterion};
/// use czy_polska_firma::scoring::calculate_breakdown;
///
/// let b = calculate_breakdown(85, &[Badge::from("polski_kapital")]);
/// assert_eq!(b.get(Criterion::Capital), 40);
/// assert_eq!(b.total(), 85);
/// ```
#[must_use]
pub fn calculate_breakdown(score: u32, badges: &[Badge]) -> Breakdown {
    let mut breakdown = Breakdown::default();
    let mut remaining = score.min(TOTAL_POINTS);

    let backed: Vec<Criterion> = badges.iter().filter_map(Badge::criterion).collect();

    for criterion in Criterion::ALL {
        if backed.contains(&criterion) {
            let points = criterion.max_points().min(remaining);
            breakdown.set(criterion, points);
            remaining -= points;
        }
    }

    let open: Vec<Criterion> = Criterion::ALL
        .into_iter()
        .filter(|c| !backed.contains(c))
        .collect();
    distribute_largest_remainder(&mut breakdown, &open, remaining);

    breakdown
}

/// Spread `points` over `criteria` proportionally to their maximums.
fn distribute_largest_remainder(breakdown: &mut Breakdown, criteria: &[Criterion], points: u32) {
    let capacity: u32 = criteria.iter().map(|c| c.max_points()).sum();
    if points == 0 || capacity == 0 {
        return;
    }

    // (criterion, floor share, remainder numerator)
    let mut shares: Vec<(Criterion, u32, u32)> = criteria
        .iter()
        .map(|&c| {
            let numerator = points * c.max_points();
            (c, numerator / capacity, numerator % capacity)
        })
        .collect();

    let assigned: u32 = shares.iter().map(|(_, floor, _)| floor).sum();
    let mut leftover = points - assigned;

    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| shares[b].2.cmp(&shares[a].2).then(a.cmp(&b)));
    for idx in order {
        if leftover == 0 {
            break;
        }
        if shares[idx].2 > 0 {
            shares[idx].1 += 1;
            leftover -= 1;
        }
    }

    for (criterion, value, _) in shares {
        breakdown.set(criterion, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badges(tags: &[&str]) -> Vec<Badge> {
        tags.iter().map(|t| Badge::from(*t)).collect()
    }

    #[test]
    fn test_capital_badge_example() {
        let b = calculate_breakdown(85, &badges(&["polski_kapital"]));
        assert_eq!(
            b,
            Breakdown {
                capital: 40,
                hq: 11,
                taxes: 11,
                production: 8,
                employment: 7,
                rnd: 4,
                brand_origin: 4,
            }
        );
    }

    #[test]
    fn test_no_badges_is_proportional() {
        let b = calculate_breakdown(50, &[]);
        assert_eq!(b.capital, 20);
        assert_eq!(b.hq, 8);
        assert_eq!(b.taxes, 8);
        assert_eq!(b.rnd, 2);
        assert_eq!(b.total(), 50);
    }

    #[test]
    fn test_zero_and_full_scores() {
        assert_eq!(calculate_breakdown(0, &badges(&["polska_marka"])).total(), 0);

        let full = calculate_breakdown(100, &[]);
        for (criterion, value) in full.entries() {
            assert_eq!(value, criterion.max_points());
        }
    }

    #[test]
    fn test_score_above_total_is_clamped() {
        let b = calculate_breakdown(250, &badges(&["polski_kapital", "rnd_w_polsce"]));
        assert_eq!(b.total(), TOTAL_POINTS);
        assert!(b.violations().is_empty());
    }

    #[test]
    fn test_low_score_goes_to_backed_criteria_first() {
        let b = calculate_breakdown(12, &badges(&["polska_siedziba", "polska_marka"]));
        assert_eq!(b.hq, 12);
        assert_eq!(b.brand_origin, 0);
        assert_eq!(b.total(), 12);
    }

    #[test]
    fn test_unknown_and_repeated_badges() {
        let plain = calculate_breakdown(60, &[]);
        let noisy = calculate_breakdown(60, &badges(&["rodzinna_firma", "eko"]));
        assert_eq!(plain, noisy);

        let twice = calculate_breakdown(60, &badges(&["polski_kapital", "polski_kapital"]));
        assert_eq!(twice, calculate_breakdown(60, &badges(&["polski_kapital"])));
    }

    #[test]
    fn test_every_badge_backed() {
        let all = badges(&[
            "polski_kapital",
            "polska_siedziba",
            "podatki_w_polsce",
            "produkcja_w_polsce",
            "zatrudnienie_w_polsce",
            "rnd_w_polsce",
            "polska_marka",
        ]);
        let b = calculate_breakdown(77, &all);
        assert_eq!(b.total(), 77);
        assert_eq!(b.capital, 40);
        assert_eq!(b.hq, 15);
        assert_eq!(b.taxes, 15);
        assert_eq!(b.production, 7);
        assert_eq!(b.employment, 0);
    }
}
