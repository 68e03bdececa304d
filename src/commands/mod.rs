//! Command implementations for the softball CLI

pub mod common;
pub mod games;
pub mod players;
pub mod record;
pub mod statistics;

use crate::{storage::SoftballDatabase, DEFAULT_TEAM_NAME, TEAM_NAME_ENV_VAR};
use anyhow::{Context, Result};
use std::path::Path;


/// Open the database from `--db`, else `SOFTBALL_DB_PATH`, else the per-user default
pub fn open_database(db_path: Option<&Path>) -> Result<SoftballDatabase> {
    let path = match db_path {
        Some(path) => path.to_path_buf(),
        None => SoftballDatabase::database_path()?,
    };
    SoftballDatabase::new(&path)
        .with_context(|| format!("Failed to open database at {}", path.display()))
}

/// Resolve our team's name from option or environment variable
pub fn resolve_team_name(team: Option<String>) -> String {
    team.or_else(|| {
        std::env::var(TEAM_NAME_ENV_VAR)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    })
    .unwrap_or_else(|| DEFAULT_TEAM_NAME.to_string())
}
