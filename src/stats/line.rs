//! Counting stats and the ratios derived from them.

use super::formulas;
use super::rate::Rate;
use crate::error::{Result, SoftballError};
use crate::storage::Statistic;
use serde::Serialize;

/// Anything that carries batting counts: one game's line or a sum of many.
///
/// The ratio accessors check that hits do not exceed at-bats before
/// computing anything. A line that breaks the rule can be built and stored in
/// memory; it only fails once a ratio is read from it.
pub trait BattingLine {
    fn at_bats(&self) -> u64;
    fn runs(&self) -> u64;
    fn walks(&self) -> u64;
    fn rbis(&self) -> u64;
    fn singles(&self) -> u64;
    fn doubles(&self) -> u64;
    fn triples(&self) -> u64;
    fn home_runs(&self) -> u64;

    /// Singles, doubles, triples and home runs together, saturating at
    /// `u64::MAX`.
    fn hits(&self) -> u64 {
        self.singles()
            .saturating_add(self.doubles())
            .saturating_add(self.triples())
            .saturating_add(self.home_runs())
    }

    fn total_bases(&self) -> u64 {
        formulas::total_bases(
            self.singles(),
            self.doubles(),
            self.triples(),
            self.home_runs(),
        )
    }

    fn check_hits(&self) -> Result<()> {
        let hits = u128::from(self.singles())
            + u128::from(self.doubles())
            + u128::from(self.triples())
            + u128::from(self.home_runs());
        if hits > u128::from(self.at_bats()) {
            return Err(SoftballError::hits_exceed_at_bats());
        }
        Ok(())
    }

    fn average(&self) -> Result<Rate> {
        self.check_hits()?;
        Ok(formulas::average(self.at_bats(), self.hits()))
    }

    fn on_base_percentage(&self) -> Result<Rate> {
        self.check_hits()?;
        Ok(formulas::on_base_percentage(
            self.at_bats(),
            self.walks(),
            self.hits(),
        ))
    }

    fn slugging_percentage(&self) -> Result<Rate> {
        self.check_hits()?;
        Ok(formulas::slugging_percentage(
            self.at_bats(),
            self.singles(),
            self.doubles(),
            self.triples(),
            self.home_runs(),
        ))
    }

    fn slash_line(&self) -> Result<SlashLine> {
        Ok(SlashLine {
            average: self.average()?,
            on_base_percentage: self.on_base_percentage()?,
            slugging_percentage: self.slugging_percentage()?,
        })
    }
}

/// AVG/OBP/SLG read together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlashLine {
    pub average: Rate,
    pub on_base_percentage: Rate,
    pub slugging_percentage: Rate,
}

impl std::fmt::Display for SlashLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.average, self.on_base_percentage, self.slugging_percentage
        )
    }
}

impl BattingLine for Statistic {
    fn at_bats(&self) -> u64 {
        u64::from(self.at_bats)
    }

    fn runs(&self) -> u64 {
        u64::from(self.runs)
    }

    fn walks(&self) -> u64 {
        u64::from(self.walks)
    }

    fn rbis(&self) -> u64 {
        u64::from(self.rbis)
    }

    fn singles(&self) -> u64 {
        u64::from(self.singles)
    }

    fn doubles(&self) -> u64 {
        u64::from(self.doubles)
    }

    fn triples(&self) -> u64 {
        u64::from(self.triples)
    }

    fn home_runs(&self) -> u64 {
        u64::from(self.home_runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameId, PlayerId};

    fn line() -> Statistic {
        Statistic::empty(PlayerId::new(1), GameId::new(1))
    }

    #[test]
    fn test_hits_sums_every_hit_type() {
        let stat = Statistic {
            singles: 1,
            doubles: 2,
            triples: 3,
            home_runs: 4,
            ..line()
        };
        assert_eq!(stat.hits(), 10);

        assert_eq!(line().hits(), 0);
        assert_eq!(Statistic { doubles: 1, ..line() }.hits(), 1);
        assert_eq!(Statistic { home_runs: 1, ..line() }.hits(), 1);
    }

    #[test]
    fn test_average() {
        assert_eq!(line().average().unwrap(), Rate::ZERO);

        let stat = Statistic {
            at_bats: 4,
            singles: 1,
            doubles: 1,
            ..line()
        };
        assert_eq!(stat.average().unwrap(), Rate::new(1, 2));

        let perfect = Statistic {
            at_bats: 1,
            home_runs: 1,
            ..line()
        };
        assert_eq!(perfect.average().unwrap(), Rate::from(1));
    }

    #[test]
    fn test_hits_without_at_bats_is_violation() {
        let stat = Statistic { singles: 1, ..line() };

        assert!(stat.average().unwrap_err().is_invariant_violation());
        assert!(stat.on_base_percentage().unwrap_err().is_invariant_violation());
        assert!(stat.slugging_percentage().unwrap_err().is_invariant_violation());
    }

    #[test]
    fn test_hits_over_at_bats_is_violation() {
        let stat = Statistic {
            at_bats: 2,
            singles: 1,
            doubles: 1,
            triples: 1,
            ..line()
        };

        let err = stat.average().unwrap_err();
        assert_eq!(err.to_string(), "Invariant violated: hits must be <= at_bats");
        assert!(stat.validate().is_err());
    }

    #[test]
    fn test_on_base_percentage() {
        let stat = Statistic {
            at_bats: 2,
            walks: 1,
            singles: 1,
            ..line()
        };
        assert_eq!(stat.on_base_percentage().unwrap(), Rate::new(2, 3));

        let walked_only = Statistic { walks: 2, ..line() };
        assert_eq!(walked_only.on_base_percentage().unwrap(), Rate::ZERO);
    }

    #[test]
    fn test_slugging_percentage() {
        let stat = Statistic {
            at_bats: 4,
            singles: 1,
            doubles: 1,
            triples: 1,
            home_runs: 1,
            ..line()
        };
        assert_eq!(stat.total_bases(), 10);
        assert_eq!(stat.slugging_percentage().unwrap(), Rate::new(5, 2));
    }

    #[test]
    fn test_slash_line_display() {
        let stat = Statistic {
            at_bats: 3,
            walks: 1,
            singles: 1,
            ..line()
        };
        let slash = stat.slash_line().unwrap();

        assert_eq!(slash.to_string(), ".333/.500/.333");
    }

    #[test]
    fn test_walks_do_not_affect_hit_invariant() {
        let stat = Statistic {
            at_bats: 1,
            walks: 5,
            singles: 1,
            ..line()
        };
        assert!(stat.validate().is_ok());
        assert_eq!(stat.on_base_percentage().unwrap(), Rate::from(1));
    }
}
