//! Softball Team Statistics Library
//!
//! Tracks a recreational softball team's games, players and per-game batting
//! lines, and derives the usual batting ratios from the raw counting stats.
//!
//! ## Features
//!
//! - **Exact Ratios**: Batting average, on-base and slugging percentage as exact rationals
//! - **Invariant Checks**: Lines where hits exceed at-bats are rejected, never clamped
//! - **Player Totals**: Season aggregates folded over every game a player appeared in
//! - **Team Record**: Win/loss/tie tallies from final scores
//! - **Database Storage**: SQLite persistence with cascading deletes
//!
//! ## Quick Start
//!
//! ```rust
//! use softball_stats::stats::{BattingLine, PlayerTotals};
//! use softball_stats::storage::Statistic;
//! use softball_stats::{GameId, PlayerId};
//!
//! let line = Statistic {
//!     at_bats: 4,
//!     singles: 1,
//!     doubles: 1,
//!     ..Statistic::empty(PlayerId::new(1), GameId::new(1))
//! };
//! let totals = PlayerTotals::from_statistics([&line]);
//!
//! assert_eq!(totals.hits(), 2);
//! assert_eq!(totals.average()?.to_string(), ".500");
//! # Ok::<(), softball_stats::SoftballError>(())
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SOFTBALL_DB_PATH=~/softball.db
//! export SOFTBALL_TEAM_NAME="Special Interests"
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameId, PlayerId};
pub use error::{Result, SoftballError};
pub use stats::{BattingLine, GameRecord, Outcome, PlayerTotals, Rate};

pub const DB_PATH_ENV_VAR: &str = "SOFTBALL_DB_PATH";
pub const TEAM_NAME_ENV_VAR: &str = "SOFTBALL_TEAM_NAME";

/// Our side of every scoreline, unless overridden by `SOFTBALL_TEAM_NAME`.
pub const DEFAULT_TEAM_NAME: &str = "Special Interests";
