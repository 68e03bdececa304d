//! Type-safe wrappers and enums for softball records.

use crate::error::{Result, SoftballError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Player IDs.
///
/// Database row ids are plain integers; wrapping them keeps a player id from
/// being passed where a game id is expected.
///
/// # Examples
///
/// ```rust
/// use softball_stats::PlayerId;
///
/// let player_id: PlayerId = "42".parse().unwrap();
/// assert_eq!(player_id.as_i64(), 42);
/// assert_eq!(player_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = SoftballError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for Game IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub i64);

impl GameId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = SoftballError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Batting ratio used to rank the player list.
///
/// # Examples
///
/// ```rust
/// use softball_stats::cli::types::RateStat;
///
/// assert_eq!(RateStat::Obp.to_string(), "OBP");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RateStat {
    /// Batting average (H / AB)
    Avg,
    /// On-base percentage ((H + BB) / (AB + BB))
    Obp,
    /// Slugging percentage (TB / AB)
    Slg,
}

impl fmt::Display for RateStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateStat::Avg => write!(f, "AVG"),
            RateStat::Obp => write!(f, "OBP"),
            RateStat::Slg => write!(f, "SLG"),
        }
    }
}
