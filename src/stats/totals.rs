//! Season totals folded over many batting lines.

use super::line::BattingLine;
use crate::storage::Statistic;
use serde::Serialize;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Sum of every counting stat across a set of lines.
///
/// For a player this is one line per game played; for a game it is one line
/// per player who batted. Ratios are computed over the summed counts, never
/// averaged game by game, and an empty set reports zero everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayerTotals {
    pub games_played: u64,
    pub at_bats: u64,
    pub runs: u64,
    pub singles: u64,
    pub doubles: u64,
    pub triples: u64,
    pub home_runs: u64,
    pub rbis: u64,
    pub walks: u64,
}

impl PlayerTotals {
    pub fn from_statistics<'a, I>(statistics: I) -> Self
    where
        I: IntoIterator<Item = &'a Statistic>,
    {
        statistics
            .into_iter()
            .fold(PlayerTotals::default(), |mut totals, stat| {
                totals.add_line(stat);
                totals
            })
    }

    pub fn add_line(&mut self, stat: &Statistic) {
        self.games_played += 1;
        self.at_bats += u64::from(stat.at_bats);
        self.runs += u64::from(stat.runs);
        self.singles += u64::from(stat.singles);
        self.doubles += u64::from(stat.doubles);
        self.triples += u64::from(stat.triples);
        self.home_runs += u64::from(stat.home_runs);
        self.rbis += u64::from(stat.rbis);
        self.walks += u64::from(stat.walks);
    }
}

impl Add for PlayerTotals {
    type Output = PlayerTotals;

    fn add(mut self, rhs: PlayerTotals) -> PlayerTotals {
        self += rhs;
        self
    }
}

impl AddAssign for PlayerTotals {
    fn add_assign(&mut self, rhs: PlayerTotals) {
        self.games_played += rhs.games_played;
        self.at_bats += rhs.at_bats;
        self.runs += rhs.runs;
        self.singles += rhs.singles;
        self.doubles += rhs.doubles;
        self.triples += rhs.triples;
        self.home_runs += rhs.home_runs;
        self.rbis += rhs.rbis;
        self.walks += rhs.walks;
    }
}

impl<'a> Sum<&'a Statistic> for PlayerTotals {
    fn sum<I: Iterator<Item = &'a Statistic>>(iter: I) -> Self {
        PlayerTotals::from_statistics(iter)
    }
}

impl Sum for PlayerTotals {
    fn sum<I: Iterator<Item = PlayerTotals>>(iter: I) -> Self {
        iter.fold(PlayerTotals::default(), Add::add)
    }
}

impl<'a> FromIterator<&'a Statistic> for PlayerTotals {
    fn from_iter<I: IntoIterator<Item = &'a Statistic>>(iter: I) -> Self {
        PlayerTotals::from_statistics(iter)
    }
}

impl BattingLine for PlayerTotals {
    fn at_bats(&self) -> u64 {
        self.at_bats
    }

    fn runs(&self) -> u64 {
        self.runs
    }

    fn walks(&self) -> u64 {
        self.walks
    }

    fn rbis(&self) -> u64 {
        self.rbis
    }

    fn singles(&self) -> u64 {
        self.singles
    }

    fn doubles(&self) -> u64 {
        self.doubles
    }

    fn triples(&self) -> u64 {
        self.triples
    }

    fn home_runs(&self) -> u64 {
        self.home_runs
    }
}

#[cfg(test)]
mod tests;
