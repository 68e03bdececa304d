//! Database query operations

use super::{models::*, schema::SoftballDatabase};
use crate::error::{Result, SoftballError};
use crate::stats::{GameRecord, PlayerTotals};
use crate::{GameId, PlayerId};
use rusqlite::{params, OptionalExtension, Row};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

const PLAYER_COLUMNS: &str = "id, first_name, last_name, number, created_on, updated_on";

const GAME_COLUMNS: &str =
    "id, game_date, opponent, score, opponent_score, notes, created_on, updated_on";

const STATISTIC_COLUMNS: &str = "s.player_id, s.game_id, s.at_bats, s.runs, s.singles,
     s.doubles, s.triples, s.home_runs, s.rbis, s.walks, s.created_on, s.updated_on";

/// Number of columns in `STATISTIC_COLUMNS`; joined columns follow them
const STATISTIC_WIDTH: usize = 12;

const JOINED_PLAYER_COLUMNS: &str =
    "p.id, p.first_name, p.last_name, p.number, p.created_on, p.updated_on";

const JOINED_GAME_COLUMNS: &str = "g.id, g.game_date, g.opponent, g.score, g.opponent_score,
     g.notes, g.created_on, g.updated_on";

impl SoftballDatabase {
    /// Add a player; the (first name, last name) pair must be new
    pub fn insert_player(&mut self, player: &NewPlayer) -> Result<Player> {
        let player = player.validate()?;
        let now = now_secs();

        self.conn
            .execute(
                "INSERT INTO players (first_name, last_name, number, created_on, updated_on)
                 VALUES (?, ?, ?, ?, ?)",
                params![player.first_name, player.last_name, player.number, now, now],
            )
            .map_err(|e| duplicate_player_or(e, &player))?;

        let id = PlayerId::new(self.conn.last_insert_rowid());
        debug!(%id, last_name = %player.last_name, "inserted player");
        self.get_player(id)
    }

    /// Replace a player's name and number
    pub fn update_player(&mut self, id: PlayerId, player: &NewPlayer) -> Result<Player> {
        let player = player.validate()?;

        let rows_affected = self
            .conn
            .execute(
                "UPDATE players SET first_name = ?, last_name = ?, number = ?, updated_on = ?
                 WHERE id = ?",
                params![
                    player.first_name,
                    player.last_name,
                    player.number,
                    now_secs(),
                    id.as_i64()
                ],
            )
            .map_err(|e| duplicate_player_or(e, &player))?;

        if rows_affected == 0 {
            return Err(SoftballError::PlayerNotFound { id });
        }
        debug!(%id, "updated player");
        self.get_player(id)
    }

    pub fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let sql = format!("SELECT {} FROM players WHERE id = ?", PLAYER_COLUMNS);
        let player = self
            .conn
            .query_row(&sql, params![id.as_i64()], row_to_player)
            .optional()?;
        Ok(player)
    }

    pub fn get_player(&self, id: PlayerId) -> Result<Player> {
        self.find_player(id)?
            .ok_or(SoftballError::PlayerNotFound { id })
    }

    /// All players, ordered by last name then first name
    pub fn list_players(&self) -> Result<Vec<Player>> {
        let sql = format!(
            "SELECT {} FROM players ORDER BY last_name, first_name",
            PLAYER_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Remove a player together with every statistic line they own
    pub fn delete_player(&mut self, id: PlayerId) -> Result<Player> {
        let player = self.get_player(id)?;
        self.conn
            .execute("DELETE FROM players WHERE id = ?", params![id.as_i64()])?;
        debug!(%id, "deleted player");
        Ok(player)
    }

    pub fn insert_game(&mut self, game: &NewGame) -> Result<Game> {
        let game = game.validate()?;
        let now = now_secs();

        self.conn.execute(
            "INSERT INTO games
             (game_date, opponent, score, opponent_score, notes, created_on, updated_on)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                game.game_date,
                game.opponent,
                game.score,
                game.opponent_score,
                game.notes,
                now,
                now
            ],
        )?;

        let id = GameId::new(self.conn.last_insert_rowid());
        debug!(%id, date = %game.game_date, "inserted game");
        self.get_game(id)
    }

    pub fn update_game(&mut self, id: GameId, game: &NewGame) -> Result<Game> {
        let game = game.validate()?;

        let rows_affected = self.conn.execute(
            "UPDATE games SET game_date = ?, opponent = ?, score = ?, opponent_score = ?,
                              notes = ?, updated_on = ?
             WHERE id = ?",
            params![
                game.game_date,
                game.opponent,
                game.score,
                game.opponent_score,
                game.notes,
                now_secs(),
                id.as_i64()
            ],
        )?;

        if rows_affected == 0 {
            return Err(SoftballError::GameNotFound { id });
        }
        debug!(%id, "updated game");
        self.get_game(id)
    }

    pub fn find_game(&self, id: GameId) -> Result<Option<Game>> {
        let sql = format!("SELECT {} FROM games WHERE id = ?", GAME_COLUMNS);
        let game = self
            .conn
            .query_row(&sql, params![id.as_i64()], row_to_game)
            .optional()?;
        Ok(game)
    }

    pub fn get_game(&self, id: GameId) -> Result<Game> {
        self.find_game(id)?.ok_or(SoftballError::GameNotFound { id })
    }

    /// All games, oldest first
    pub fn list_games(&self) -> Result<Vec<Game>> {
        let sql = format!("SELECT {} FROM games ORDER BY game_date, id", GAME_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], row_to_game)?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    /// Remove a game together with every statistic line recorded in it
    pub fn delete_game(&mut self, id: GameId) -> Result<Game> {
        let game = self.get_game(id)?;
        self.conn
            .execute("DELETE FROM games WHERE id = ?", params![id.as_i64()])?;
        debug!(%id, "deleted game");
        Ok(game)
    }

    /// Create or replace the line for (player, game).
    ///
    /// The line is validated first, so a line with more hits than at-bats is
    /// never written. The original `created_on` survives a replace.
    pub fn upsert_statistic(&mut self, stat: &Statistic) -> Result<Statistic> {
        stat.validate()?;
        self.get_player(stat.player_id)?;
        self.get_game(stat.game_id)?;

        let now = now_secs();
        self.conn.execute(
            "INSERT INTO statistics
             (player_id, game_id, at_bats, runs, singles, doubles, triples, home_runs,
              rbis, walks, created_on, updated_on)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (player_id, game_id) DO UPDATE SET
                at_bats = excluded.at_bats,
                runs = excluded.runs,
                singles = excluded.singles,
                doubles = excluded.doubles,
                triples = excluded.triples,
                home_runs = excluded.home_runs,
                rbis = excluded.rbis,
                walks = excluded.walks,
                updated_on = excluded.updated_on",
            params![
                stat.player_id.as_i64(),
                stat.game_id.as_i64(),
                stat.at_bats,
                stat.runs,
                stat.singles,
                stat.doubles,
                stat.triples,
                stat.home_runs,
                stat.rbis,
                stat.walks,
                now,
                now
            ],
        )?;

        debug!(player_id = %stat.player_id, game_id = %stat.game_id, "saved statistic line");
        self.get_statistic(stat.player_id, stat.game_id)
    }

    pub fn find_statistic(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Option<Statistic>> {
        let sql = format!(
            "SELECT {} FROM statistics s WHERE s.player_id = ? AND s.game_id = ?",
            STATISTIC_COLUMNS
        );
        let stat = self
            .conn
            .query_row(
                &sql,
                params![player_id.as_i64(), game_id.as_i64()],
                row_to_statistic,
            )
            .optional()?;
        Ok(stat)
    }

    pub fn get_statistic(&self, player_id: PlayerId, game_id: GameId) -> Result<Statistic> {
        self.find_statistic(player_id, game_id)?
            .ok_or(SoftballError::StatisticNotFound { player_id, game_id })
    }

    pub fn delete_statistic(&mut self, player_id: PlayerId, game_id: GameId) -> Result<()> {
        let rows_affected = self.conn.execute(
            "DELETE FROM statistics WHERE player_id = ? AND game_id = ?",
            params![player_id.as_i64(), game_id.as_i64()],
        )?;

        if rows_affected == 0 {
            return Err(SoftballError::StatisticNotFound { player_id, game_id });
        }
        debug!(%player_id, %game_id, "deleted statistic line");
        Ok(())
    }

    /// Every line a player has, in game date order
    pub fn statistics_for_player(&self, player_id: PlayerId) -> Result<Vec<Statistic>> {
        let sql = format!(
            "SELECT {} FROM statistics s
             JOIN games g ON g.id = s.game_id
             WHERE s.player_id = ?
             ORDER BY g.game_date, g.id",
            STATISTIC_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![player_id.as_i64()], row_to_statistic)?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        debug!(%player_id, lines = stats.len(), "loaded player statistics");
        Ok(stats)
    }

    /// Every line recorded in a game, in roster order
    pub fn statistics_for_game(&self, game_id: GameId) -> Result<Vec<Statistic>> {
        let sql = format!(
            "SELECT {} FROM statistics s
             JOIN players p ON p.id = s.player_id
             WHERE s.game_id = ?
             ORDER BY p.last_name, p.first_name",
            STATISTIC_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![game_id.as_i64()], row_to_statistic)?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        debug!(%game_id, lines = stats.len(), "loaded game statistics");
        Ok(stats)
    }

    /// A player's lines paired with the game each came from, in date order
    pub fn game_lines_for_player(&self, player_id: PlayerId) -> Result<Vec<(Game, Statistic)>> {
        let sql = format!(
            "SELECT {}, {} FROM statistics s
             JOIN games g ON g.id = s.game_id
             WHERE s.player_id = ?
             ORDER BY g.game_date, g.id",
            STATISTIC_COLUMNS, JOINED_GAME_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![player_id.as_i64()], |row| {
            Ok((game_at(row, STATISTIC_WIDTH)?, row_to_statistic(row)?))
        })?;

        let mut lines = Vec::new();
        for row in rows {
            lines.push(row?);
        }
        debug!(%player_id, lines = lines.len(), "loaded player game lines");
        Ok(lines)
    }

    /// A game's lines paired with the player who batted, in roster order
    pub fn batting_lines_for_game(&self, game_id: GameId) -> Result<Vec<(Player, Statistic)>> {
        let sql = format!(
            "SELECT {}, {} FROM statistics s
             JOIN players p ON p.id = s.player_id
             WHERE s.game_id = ?
             ORDER BY p.last_name, p.first_name",
            STATISTIC_COLUMNS, JOINED_PLAYER_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![game_id.as_i64()], |row| {
            Ok((player_at(row, STATISTIC_WIDTH)?, row_to_statistic(row)?))
        })?;

        let mut lines = Vec::new();
        for row in rows {
            lines.push(row?);
        }
        debug!(%game_id, lines = lines.len(), "loaded game batting lines");
        Ok(lines)
    }

    /// Career totals for one player
    pub fn player_totals(&self, player_id: PlayerId) -> Result<PlayerTotals> {
        self.get_player(player_id)?;
        Ok(PlayerTotals::from_statistics(
            &self.statistics_for_player(player_id)?,
        ))
    }

    /// Team totals for one game
    pub fn game_totals(&self, game_id: GameId) -> Result<PlayerTotals> {
        self.get_game(game_id)?;
        Ok(PlayerTotals::from_statistics(
            &self.statistics_for_game(game_id)?,
        ))
    }

    /// Wins, losses and ties over every recorded game
    pub fn game_record(&self) -> Result<GameRecord> {
        Ok(self.list_games()?.iter().map(Game::outcome).collect())
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn duplicate_player_or(err: rusqlite::Error, player: &NewPlayer) -> SoftballError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            SoftballError::DuplicatePlayer {
                first_name: player.first_name.clone(),
                last_name: player.last_name.clone(),
            }
        }
        _ => SoftballError::Database(err),
    }
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    player_at(row, 0)
}

/// Read a player whose columns start at `at`
fn player_at(row: &Row, at: usize) -> rusqlite::Result<Player> {
    Ok(Player {
        id: PlayerId::new(row.get(at)?),
        first_name: row.get(at + 1)?,
        last_name: row.get(at + 2)?,
        number: row.get(at + 3)?,
        created_on: row.get(at + 4)?,
        updated_on: row.get(at + 5)?,
    })
}

fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
    game_at(row, 0)
}

fn game_at(row: &Row, at: usize) -> rusqlite::Result<Game> {
    Ok(Game {
        id: GameId::new(row.get(at)?),
        game_date: row.get(at + 1)?,
        opponent: row.get(at + 2)?,
        score: row.get(at + 3)?,
        opponent_score: row.get(at + 4)?,
        notes: row.get(at + 5)?,
        created_on: row.get(at + 6)?,
        updated_on: row.get(at + 7)?,
    })
}

fn row_to_statistic(row: &Row) -> rusqlite::Result<Statistic> {
    Ok(Statistic {
        player_id: PlayerId::new(row.get(0)?),
        game_id: GameId::new(row.get(1)?),
        at_bats: row.get(2)?,
        runs: row.get(3)?,
        singles: row.get(4)?,
        doubles: row.get(5)?,
        triples: row.get(6)?,
        home_runs: row.get(7)?,
        rbis: row.get(8)?,
        walks: row.get(9)?,
        created_on: row.get(10)?,
        updated_on: row.get(11)?,
    })
}
