//! Error types for the softball statistics library

use crate::cli::types::{GameId, PlayerId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SoftballError>;

#[derive(Error, Debug)]
pub enum SoftballError {
    #[error("Invariant violated: {message}")]
    InvariantViolation { message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Invalid id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: PlayerId },

    #[error("Game not found: {id}")]
    GameNotFound { id: GameId },

    #[error("No statistic line for player {player_id} in game {game_id}")]
    StatisticNotFound { player_id: PlayerId, game_id: GameId },

    #[error("Player {first_name} {last_name} already exists")]
    DuplicatePlayer {
        first_name: String,
        last_name: String,
    },

    #[error("Could not determine data directory; set {env_var} or pass --db")]
    MissingDataDir { env_var: String },
}

impl SoftballError {
    /// The one invariant every batting line must satisfy.
    pub fn hits_exceed_at_bats() -> Self {
        SoftballError::InvariantViolation {
            message: "hits must be <= at_bats".to_string(),
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        SoftballError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, SoftballError::InvariantViolation { .. })
    }
}

#[cfg(test)]
mod tests;
