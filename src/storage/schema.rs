//! Database schema and connection management

use crate::error::{Result, SoftballError};
use crate::DB_PATH_ENV_VAR;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Database connection manager for players, games and statistic lines
pub struct SoftballDatabase {
    pub(crate) conn: Connection,
}

impl SoftballDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening database");
        Self::from_connection(Connection::open(path)?)
    }

    /// Open the database named by `SOFTBALL_DB_PATH`, or the per-user default
    pub fn open_default() -> Result<Self> {
        Self::new(&Self::database_path()?)
    }

    /// Throwaway database, used by tests
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Resolve the database file: `SOFTBALL_DB_PATH`, else `<data dir>/softball/softball.db`
    pub fn database_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(DB_PATH_ENV_VAR).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let data_dir = data_dir().ok_or_else(|| SoftballError::MissingDataDir {
            env_var: DB_PATH_ENV_VAR.to_string(),
        })?;
        Ok(data_dir.join("softball").join("softball.db"))
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Cascading deletes depend on this; SQLite leaves it off per connection
        conn.execute("PRAGMA foreign_keys = ON", [])?;

        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                number TEXT,
                created_on INTEGER NOT NULL,
                updated_on INTEGER NOT NULL,
                UNIQUE (first_name, last_name)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS games (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                game_date TEXT NOT NULL,
                opponent TEXT NOT NULL DEFAULT 'Unknown',
                score INTEGER NOT NULL CHECK (score >= 0),
                opponent_score INTEGER NOT NULL CHECK (opponent_score >= 0),
                notes TEXT,
                created_on INTEGER NOT NULL,
                updated_on INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS statistics (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_id INTEGER NOT NULL REFERENCES players(id) ON DELETE CASCADE,
                game_id INTEGER NOT NULL REFERENCES games(id) ON DELETE CASCADE,
                at_bats INTEGER NOT NULL DEFAULT 0 CHECK (at_bats >= 0),
                runs INTEGER NOT NULL DEFAULT 0 CHECK (runs >= 0),
                singles INTEGER NOT NULL DEFAULT 0 CHECK (singles >= 0),
                doubles INTEGER NOT NULL DEFAULT 0 CHECK (doubles >= 0),
                triples INTEGER NOT NULL DEFAULT 0 CHECK (triples >= 0),
                home_runs INTEGER NOT NULL DEFAULT 0 CHECK (home_runs >= 0),
                rbis INTEGER NOT NULL DEFAULT 0 CHECK (rbis >= 0),
                walks INTEGER NOT NULL DEFAULT 0 CHECK (walks >= 0),
                created_on INTEGER NOT NULL,
                updated_on INTEGER NOT NULL,
                UNIQUE (player_id, game_id)
            )",
            [],
        )?;

        // Create indexes for the per-game lookups
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_statistics_game
             ON statistics(game_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_games_date
             ON games(game_date)",
            [],
        )?;

        Ok(())
    }
}
