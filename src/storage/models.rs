//! Data models for the storage layer

use crate::cli::types::{GameId, PlayerId};
use crate::error::{Result, SoftballError};
use crate::stats::{BattingLine, Outcome};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAME_MAX_LEN: usize = 100;
pub const NUMBER_MAX_LEN: usize = 10;
pub const OPPONENT_MAX_LEN: usize = 150;
pub const DEFAULT_OPPONENT: &str = "Unknown";

/// A rostered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub number: Option<String>,
    pub created_on: u64,
    pub updated_on: u64,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number.as_deref() {
            Some(number) if !number.is_empty() => {
                write!(f, "{} {} (#{})", self.first_name, self.last_name, number)
            }
            _ => write!(f, "{} {}", self.first_name, self.last_name),
        }
    }
}

/// Player fields as submitted for create or update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub number: Option<String>,
}

impl NewPlayer {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            number: None,
        }
    }

    pub fn with_number(mut self, number: &str) -> Self {
        self.number = Some(number.to_string());
        self
    }

    /// Trim whitespace, drop a blank number, and check field lengths.
    pub fn validate(&self) -> Result<NewPlayer> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let number = self
            .number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());

        check_required("first_name", first_name, NAME_MAX_LEN)?;
        check_required("last_name", last_name, NAME_MAX_LEN)?;
        if let Some(number) = number {
            check_length("number", number, NUMBER_MAX_LEN)?;
        }

        Ok(NewPlayer {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            number: number.map(str::to_string),
        })
    }
}

/// A played game and its final score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub game_date: NaiveDate,
    pub opponent: String,
    pub score: u32,
    pub opponent_score: u32,
    pub notes: Option<String>,
    pub created_on: u64,
    pub updated_on: u64,
}

impl Game {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_scores(self.score, self.opponent_score)
    }

    pub fn is_win(&self) -> bool {
        self.score > self.opponent_score
    }

    pub fn is_loss(&self) -> bool {
        self.score < self.opponent_score
    }

    pub fn is_tie(&self) -> bool {
        self.score == self.opponent_score
    }

    /// "Tie", the opponent's name after a loss, or `team_name` after a win.
    pub fn winner<'a>(&'a self, team_name: &'a str) -> &'a str {
        match self.outcome() {
            Outcome::Tie => "Tie",
            Outcome::Loss => &self.opponent,
            Outcome::Win => team_name,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v. {} on {} ({} to {})",
            self.opponent,
            self.game_date.format("%b %d"),
            self.score,
            self.opponent_score
        )
    }
}

/// Game fields as submitted for create or update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub game_date: NaiveDate,
    pub opponent: Option<String>,
    pub score: u32,
    pub opponent_score: u32,
    pub notes: Option<String>,
}

impl NewGame {
    pub fn new(game_date: NaiveDate, score: u32, opponent_score: u32) -> Self {
        Self {
            game_date,
            opponent: None,
            score,
            opponent_score,
            notes: None,
        }
    }

    pub fn against(mut self, opponent: &str) -> Self {
        self.opponent = Some(opponent.to_string());
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    /// Fill in the default opponent and check field lengths.
    pub fn validate(&self) -> Result<NewGame> {
        let opponent = self
            .opponent
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .unwrap_or(DEFAULT_OPPONENT);
        check_length("opponent", opponent, OPPONENT_MAX_LEN)?;

        let notes = self
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(NewGame {
            game_date: self.game_date,
            opponent: Some(opponent.to_string()),
            score: self.score,
            opponent_score: self.opponent_score,
            notes,
        })
    }
}

/// One player's batting line for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub at_bats: u32,
    pub runs: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub rbis: u32,
    pub walks: u32,
    pub created_on: u64,
    pub updated_on: u64,
}

impl Statistic {
    /// A line with every count at zero.
    pub fn empty(player_id: PlayerId, game_id: GameId) -> Self {
        Self {
            player_id,
            game_id,
            at_bats: 0,
            runs: 0,
            singles: 0,
            doubles: 0,
            triples: 0,
            home_runs: 0,
            rbis: 0,
            walks: 0,
            created_on: 0,
            updated_on: 0,
        }
    }

    /// Reject a line whose hits could not have come from its at-bats.
    pub fn validate(&self) -> Result<()> {
        self.check_hits()
    }

    /// Box-score description naming the player and game.
    pub fn describe(&self, player: &Player, game: &Game) -> String {
        format!("{} {} {}", player, game, self.counts())
    }

    fn counts(&self) -> String {
        format!(
            "(AB={}, R={}, H={}, 2B={}, 3B={}, HR={}, RBI={}, BB={})",
            self.at_bats,
            self.runs,
            self.hits(),
            self.doubles,
            self.triples,
            self.home_runs,
            self.rbis,
            self.walks
        )
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player {} game {} {}",
            self.player_id,
            self.game_id,
            self.counts()
        )
    }
}

fn check_required(field: &str, value: &str, max_len: usize) -> Result<()> {
    if value.is_empty() {
        return Err(SoftballError::validation(field, "must not be empty"));
    }
    check_length(field, value, max_len)
}

fn check_length(field: &str, value: &str, max_len: usize) -> Result<()> {
    if value.chars().count() > max_len {
        return Err(SoftballError::validation(
            field,
            format!("must be at most {} characters", max_len),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(score: u32, opponent_score: u32) -> Game {
        Game {
            id: GameId::new(1),
            game_date: NaiveDate::from_ymd_opt(2009, 1, 1).unwrap(),
            opponent: "Test Opponent".to_string(),
            score,
            opponent_score,
            notes: None,
            created_on: 0,
            updated_on: 0,
        }
    }

    #[test]
    fn test_player_display() {
        let mut player = Player {
            id: PlayerId::new(1),
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
            number: None,
            created_on: 0,
            updated_on: 0,
        };
        assert_eq!(player.to_string(), "First Last");

        player.number = Some("123".to_string());
        assert_eq!(player.to_string(), "First Last (#123)");
    }

    #[test]
    fn test_game_display() {
        assert_eq!(game(5, 1).to_string(), "v. Test Opponent on Jan 01 (5 to 1)");
    }

    #[test]
    fn test_game_outcome_flags() {
        for (score, opponent_score) in [(0, 0), (1, 1), (0, 1), (2, 3), (1, 0), (5, 1)] {
            let g = game(score, opponent_score);
            let flags = [g.is_win(), g.is_loss(), g.is_tie()];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            assert_eq!(g.is_win(), g.outcome() == Outcome::Win);
            assert_eq!(g.is_loss(), g.outcome() == Outcome::Loss);
            assert_eq!(g.is_tie(), g.outcome() == Outcome::Tie);
        }
    }

    #[test]
    fn test_game_winner() {
        assert_eq!(game(0, 0).winner("Special Interests"), "Tie");
        assert_eq!(game(1, 1).winner("Special Interests"), "Tie");
        assert_eq!(game(0, 1).winner("Special Interests"), "Test Opponent");
        assert_eq!(game(1, 0).winner("Special Interests"), "Special Interests");
    }

    #[test]
    fn test_new_player_validate_trims_and_drops_blank_number() {
        let player = NewPlayer::new("  First ", " Last")
            .with_number("  ")
            .validate()
            .unwrap();

        assert_eq!(player.first_name, "First");
        assert_eq!(player.last_name, "Last");
        assert_eq!(player.number, None);
    }

    #[test]
    fn test_new_player_validate_lengths() {
        let long_name = "x".repeat(NAME_MAX_LEN + 1);
        assert!(NewPlayer::new(&long_name, "Last").validate().is_err());
        assert!(NewPlayer::new("First", "").validate().is_err());
        assert!(NewPlayer::new("First", "Last")
            .with_number("12345678901")
            .validate()
            .is_err());
        assert!(NewPlayer::new("First", "Last")
            .with_number("1234567890")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_new_game_validate_defaults_opponent() {
        let date = NaiveDate::from_ymd_opt(2009, 1, 1).unwrap();

        let unnamed = NewGame::new(date, 1, 0).validate().unwrap();
        assert_eq!(unnamed.opponent.as_deref(), Some(DEFAULT_OPPONENT));

        let blank = NewGame::new(date, 1, 0).against("  ").validate().unwrap();
        assert_eq!(blank.opponent.as_deref(), Some("Unknown"));

        let too_long = NewGame::new(date, 1, 0).against(&"o".repeat(OPPONENT_MAX_LEN + 1));
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_statistic_describe() {
        let player = Player {
            id: PlayerId::new(1),
            first_name: "Test".to_string(),
            last_name: "Player".to_string(),
            number: None,
            created_on: 0,
            updated_on: 0,
        };
        let stat = Statistic {
            at_bats: 4,
            runs: 1,
            singles: 1,
            doubles: 1,
            rbis: 2,
            walks: 1,
            ..Statistic::empty(player.id, GameId::new(1))
        };

        assert_eq!(
            stat.describe(&player, &game(5, 1)),
            "Test Player v. Test Opponent on Jan 01 (5 to 1) (AB=4, R=1, H=2, 2B=1, 3B=0, HR=0, RBI=2, BB=1)"
        );
        assert_eq!(
            stat.to_string(),
            "player 1 game 1 (AB=4, R=1, H=2, 2B=1, 3B=0, HR=0, RBI=2, BB=1)"
        );
    }
}
