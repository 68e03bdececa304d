//! Win/loss/tie from final scores.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub fn from_scores(score: u32, opponent_score: u32) -> Self {
        match score.cmp(&opponent_score) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "W"),
            Outcome::Loss => write!(f, "L"),
            Outcome::Tie => write!(f, "T"),
        }
    }
}

/// Season record tallied from game outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl GameRecord {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

impl FromIterator<Outcome> for GameRecord {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut record = GameRecord::default();
        for outcome in iter {
            record.record(outcome);
        }
        record
    }
}

/// `W-L-T`
impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scores() {
        assert_eq!(Outcome::from_scores(5, 1), Outcome::Win);
        assert_eq!(Outcome::from_scores(2, 3), Outcome::Loss);
        assert_eq!(Outcome::from_scores(4, 4), Outcome::Tie);
        assert_eq!(Outcome::from_scores(0, 0), Outcome::Tie);
    }

    #[test]
    fn test_empty_record() {
        let record: GameRecord = std::iter::empty::<Outcome>().collect();
        assert_eq!(record, GameRecord::default());
        assert_eq!(record.games(), 0);
    }

    #[test]
    fn test_record_counts_each_outcome() {
        let record: GameRecord = [(1, 0), (0, 1), (1, 1), (0, 0)]
            .into_iter()
            .map(|(score, opponent_score)| Outcome::from_scores(score, opponent_score))
            .collect();

        assert_eq!(
            record,
            GameRecord {
                wins: 1,
                losses: 1,
                ties: 2
            }
        );
        assert_eq!(record.games(), 4);
        assert_eq!(record.to_string(), "1-1-2");
    }

    #[test]
    fn test_record_serializes_field_names() {
        let record = GameRecord {
            wins: 2,
            losses: 2,
            ties: 2,
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json, serde_json::json!({ "wins": 2, "losses": 2, "ties": 2 }));
    }
}
