//! Unit tests for player totals

use super::*;
use crate::stats::Rate;
use crate::{GameId, PlayerId};
use proptest::prelude::*;

fn line(game: i64) -> Statistic {
    Statistic::empty(PlayerId::new(1), GameId::new(game))
}

fn hit_line(game: i64, singles: u32, doubles: u32, triples: u32, home_runs: u32) -> Statistic {
    Statistic {
        singles,
        doubles,
        triples,
        home_runs,
        ..line(game)
    }
}

#[test]
fn test_empty_totals_are_zero() {
    let none: Vec<Statistic> = Vec::new();
    let totals = PlayerTotals::from_statistics(&none);

    assert_eq!(totals, PlayerTotals::default());
    assert_eq!(totals.hits(), 0);
    assert_eq!(totals.average().unwrap(), Rate::ZERO);
    assert_eq!(totals.on_base_percentage().unwrap(), Rate::ZERO);
    assert_eq!(totals.slugging_percentage().unwrap(), Rate::ZERO);
}

#[test]
fn test_hits_accumulate_across_games() {
    let mut stats = vec![hit_line(1, 1, 0, 0, 0), hit_line(2, 1, 0, 0, 0)];
    assert_eq!(PlayerTotals::from_statistics(&stats).hits(), 2);

    stats.push(hit_line(3, 0, 0, 0, 0));
    assert_eq!(PlayerTotals::from_statistics(&stats).hits(), 2);

    stats.push(hit_line(4, 1, 0, 0, 0));
    stats.push(hit_line(5, 0, 1, 0, 0));
    stats.push(hit_line(6, 0, 0, 1, 0));
    stats.push(hit_line(7, 0, 0, 0, 1));
    assert_eq!(PlayerTotals::from_statistics(&stats).hits(), 6);

    stats.push(hit_line(8, 1, 2, 3, 4));
    let totals = PlayerTotals::from_statistics(&stats);
    assert_eq!(totals.hits(), 16);
    assert_eq!(totals.games_played, 8);
}

#[test]
fn test_counting_stats_sum() {
    let stats = vec![
        Statistic {
            at_bats: 1,
            runs: 1,
            walks: 0,
            rbis: 1,
            ..line(1)
        },
        Statistic {
            at_bats: 1,
            runs: 0,
            walks: 1,
            rbis: 0,
            ..line(2)
        },
        Statistic {
            at_bats: 3,
            runs: 1,
            walks: 2,
            rbis: 1,
            ..line(3)
        },
    ];
    let totals: PlayerTotals = stats.iter().collect();

    assert_eq!(totals.at_bats, 5);
    assert_eq!(totals.runs, 2);
    assert_eq!(totals.walks, 3);
    assert_eq!(totals.rbis, 2);
}

#[test]
fn test_one_single_per_game_bats_a_thousand() {
    let stats: Vec<Statistic> = (1..=4)
        .map(|game| Statistic {
            at_bats: 1,
            singles: 1,
            ..line(game)
        })
        .collect();
    let totals: PlayerTotals = stats.iter().sum();

    assert_eq!(totals.at_bats, 4);
    assert_eq!(totals.average().unwrap(), Rate::from(1));
}

#[test]
fn test_ratios_use_summed_counts() {
    // 1-for-1 then 0-for-3 is .250, not the .500 mean of per-game averages
    let stats = vec![
        Statistic {
            at_bats: 1,
            singles: 1,
            ..line(1)
        },
        Statistic {
            at_bats: 3,
            ..line(2)
        },
    ];
    let totals = PlayerTotals::from_statistics(&stats);

    assert_eq!(totals.average().unwrap(), Rate::new(1, 4));
}

#[test]
fn test_violation_surfaces_on_read_not_on_fold() {
    let stats = vec![
        Statistic {
            at_bats: 1,
            singles: 1,
            ..line(1)
        },
        hit_line(2, 0, 1, 0, 0),
    ];
    let totals = PlayerTotals::from_statistics(&stats);

    assert_eq!(totals.hits(), 2);
    assert!(totals.average().unwrap_err().is_invariant_violation());
    assert!(totals.on_base_percentage().unwrap_err().is_invariant_violation());
    assert!(totals.slugging_percentage().unwrap_err().is_invariant_violation());
}

#[test]
fn test_hit_sum_past_u64_is_a_violation() {
    let totals = PlayerTotals {
        at_bats: u64::MAX,
        singles: u64::MAX,
        doubles: 1,
        ..PlayerTotals::default()
    };

    assert_eq!(totals.hits(), u64::MAX);
    assert!(totals.average().unwrap_err().is_invariant_violation());

    let at_limit = PlayerTotals {
        doubles: 0,
        ..totals
    };
    assert_eq!(at_limit.average().unwrap(), Rate::from(1));
}

#[test]
fn test_add_merges_totals() {
    let a = PlayerTotals::from_statistics(&[hit_line(1, 1, 0, 0, 0)]);
    let b = PlayerTotals::from_statistics(&[hit_line(2, 0, 1, 0, 0)]);
    let merged = a + b;

    assert_eq!(merged.games_played, 2);
    assert_eq!(merged.hits(), 2);
    assert_eq!(vec![a, b].into_iter().sum::<PlayerTotals>(), merged);
}

fn arb_statistic() -> impl Strategy<Value = Statistic> {
    (0u32..10, 0u32..5, 0u32..5, 0u32..4, 0u32..3, 0u32..3, 0u32..6, 0u32..4).prop_map(
        |(at_bats, runs, singles, doubles, triples, home_runs, rbis, walks)| Statistic {
            at_bats,
            runs,
            singles,
            doubles,
            triples,
            home_runs,
            rbis,
            walks,
            ..line(1)
        },
    )
}

proptest! {
    #[test]
    fn prop_fold_order_does_not_matter(
        (stats, shuffled) in prop::collection::vec(arb_statistic(), 0..20)
            .prop_flat_map(|stats| {
                let original = Just(stats.clone());
                (original, Just(stats).prop_shuffle())
            })
    ) {
        let forward = PlayerTotals::from_statistics(&stats);
        let reversed = PlayerTotals::from_statistics(stats.iter().rev());
        let permuted = PlayerTotals::from_statistics(&shuffled);

        prop_assert_eq!(forward, reversed);
        prop_assert_eq!(forward, permuted);
    }

    #[test]
    fn prop_split_and_merge_matches_single_fold(
        stats in prop::collection::vec(arb_statistic(), 0..20),
        split in 0usize..20,
    ) {
        let split = split.min(stats.len());
        let (left, right) = stats.split_at(split);

        prop_assert_eq!(
            PlayerTotals::from_statistics(left) + PlayerTotals::from_statistics(right),
            PlayerTotals::from_statistics(&stats)
        );
    }
}
