//! Batting formulas over raw counting stats.
//!
//! Walks are not at-bats here: a plate appearance that ends in a walk adds to
//! `walks` only. Every formula returns [`Rate::ZERO`] rather than dividing by
//! zero.

use super::rate::Rate;

/// AVG = H / AB
///
/// Zero when there are no at-bats, or when the hits cannot have come from
/// those at-bats.
///
/// ```rust
/// use softball_stats::stats::average;
/// use softball_stats::Rate;
///
/// assert_eq!(average(4, 2), Rate::new(1, 2));
/// assert_eq!(average(0, 0), Rate::ZERO);
/// assert_eq!(average(1, 2), Rate::ZERO);
/// ```
pub fn average(at_bats: u64, hits: u64) -> Rate {
    if at_bats == 0 || hits > at_bats {
        return Rate::ZERO;
    }
    Rate::new(hits, at_bats)
}

/// OBP = (H + BB) / (AB + BB)
///
/// Zero when there are no at-bats, even if the batter walked.
pub fn on_base_percentage(at_bats: u64, walks: u64, hits: u64) -> Rate {
    if at_bats == 0 {
        return Rate::ZERO;
    }
    let (walks, hits) = (u128::from(walks), u128::from(hits));
    Rate::from_wide(hits + walks, u128::from(at_bats) + walks)
}

/// TB = 1B + 2 * 2B + 3 * 3B + 4 * HR
///
/// Saturates at `u64::MAX`.
pub fn total_bases(singles: u64, doubles: u64, triples: u64, home_runs: u64) -> u64 {
    u64::try_from(wide_total_bases(singles, doubles, triples, home_runs)).unwrap_or(u64::MAX)
}

fn wide_total_bases(singles: u64, doubles: u64, triples: u64, home_runs: u64) -> u128 {
    u128::from(singles)
        + 2 * u128::from(doubles)
        + 3 * u128::from(triples)
        + 4 * u128::from(home_runs)
}

/// SLG = TB / AB
pub fn slugging_percentage(
    at_bats: u64,
    singles: u64,
    doubles: u64,
    triples: u64,
    home_runs: u64,
) -> Rate {
    if at_bats == 0 {
        return Rate::ZERO;
    }
    Rate::from_wide(
        wide_total_bases(singles, doubles, triples, home_runs),
        u128::from(at_bats),
    )
}
