//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{GameId, PlayerId, RateStat};

/// Counting stats for one player in one game. Omitted values keep what is
/// already stored, or start at zero for a new line.
#[derive(Debug, Default, Args)]
pub struct StatCounts {
    /// At-bats (walks are not at-bats).
    #[clap(long = "at-bats", alias = "ab")]
    pub at_bats: Option<u32>,

    /// Runs scored.
    #[clap(long = "runs", alias = "r")]
    pub runs: Option<u32>,

    /// Singles.
    #[clap(long = "singles", alias = "1b")]
    pub singles: Option<u32>,

    /// Doubles.
    #[clap(long = "doubles", alias = "2b")]
    pub doubles: Option<u32>,

    /// Triples.
    #[clap(long = "triples", alias = "3b")]
    pub triples: Option<u32>,

    /// Home runs.
    #[clap(long = "home-runs", alias = "hr")]
    pub home_runs: Option<u32>,

    /// Runs batted in.
    #[clap(long = "rbis", alias = "rbi")]
    pub rbis: Option<u32>,

    /// Walks (bases on balls).
    #[clap(long = "walks", alias = "bb")]
    pub walks: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Add a player to the roster
    Add {
        /// First name.
        #[clap(long, short)]
        first: String,

        /// Last name.
        #[clap(long, short)]
        last: String,

        /// Jersey number.
        #[clap(long, short)]
        number: Option<String>,
    },

    /// Change a player's name or number
    Edit {
        id: PlayerId,

        /// New first name.
        #[clap(long, short)]
        first: Option<String>,

        /// New last name.
        #[clap(long, short)]
        last: Option<String>,

        /// New jersey number.
        #[clap(long, short, conflicts_with = "clear_number")]
        number: Option<String>,

        /// Remove the jersey number.
        #[clap(long)]
        clear_number: bool,
    },

    /// List the roster with season totals
    List {
        /// Rank by a batting ratio instead of by name.
        #[clap(long, value_enum)]
        sort: Option<RateStat>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a player's game-by-game lines and totals
    Show {
        id: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Delete a player and all of their statistic lines
    Delete { id: PlayerId },
}

#[derive(Debug, Subcommand)]
pub enum GameCmd {
    /// Record a game
    Add {
        /// Game date (YYYY-MM-DD).
        #[clap(long, short)]
        date: NaiveDate,

        /// Opponent name (defaults to "Unknown").
        #[clap(long, short)]
        opponent: Option<String>,

        /// Our final score.
        #[clap(long, short)]
        score: u32,

        /// Opponent's final score.
        #[clap(long = "opponent-score", short = 'x')]
        opponent_score: u32,

        /// Free-text notes.
        #[clap(long)]
        notes: Option<String>,
    },

    /// Change a recorded game
    Edit {
        id: GameId,

        /// Game date (YYYY-MM-DD).
        #[clap(long, short)]
        date: Option<NaiveDate>,

        /// Opponent name.
        #[clap(long, short)]
        opponent: Option<String>,

        /// Our final score.
        #[clap(long, short)]
        score: Option<u32>,

        /// Opponent's final score.
        #[clap(long = "opponent-score", short = 'x')]
        opponent_score: Option<u32>,

        /// Free-text notes.
        #[clap(long)]
        notes: Option<String>,
    },

    /// List games in date order
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a game's box score
    Show {
        id: GameId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Delete a game and all statistic lines recorded in it
    Delete { id: GameId },
}

#[derive(Debug, Subcommand)]
pub enum StatCmd {
    /// Create or update a player's line for a game
    Set {
        /// Player ID.
        #[clap(long, short)]
        player: PlayerId,

        /// Game ID.
        #[clap(long, short)]
        game: GameId,

        #[clap(flatten)]
        counts: StatCounts,
    },

    /// Remove a player's line for a game
    Delete {
        /// Player ID.
        #[clap(long, short)]
        player: PlayerId,

        /// Game ID.
        #[clap(long, short)]
        game: GameId,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "softball", about = "Softball team statistics")]
pub struct Softball {
    /// Database file (or set `SOFTBALL_DB_PATH` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Our team's name (or set `SOFTBALL_TEAM_NAME` env var).
    #[clap(long, global = true)]
    pub team: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the roster
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Manage games
    Game {
        #[clap(subcommand)]
        cmd: GameCmd,
    },

    /// Manage per-game statistic lines
    Stat {
        #[clap(subcommand)]
        cmd: StatCmd,
    },

    /// Show the team's win/loss/tie record
    Record {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
