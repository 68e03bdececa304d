//! Game command implementations

use super::common::{header_row, line_row};
use crate::{
    stats::{BattingLine, Outcome, PlayerTotals},
    storage::{Game, NewGame, SoftballDatabase, Statistic},
    GameId,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use tracing::info;

const NAME_WIDTH: usize = 28;

/// Parameters for the game edit command
#[derive(Debug, Default)]
pub struct GameEditParams {
    pub game_date: Option<NaiveDate>,
    pub opponent: Option<String>,
    pub score: Option<u32>,
    pub opponent_score: Option<u32>,
    pub notes: Option<String>,
}

/// A game with its result resolved against our team name
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    #[serde(flatten)]
    pub game: Game,
    pub outcome: Outcome,
    pub winner: String,
}

impl GameSummary {
    pub fn new(game: Game, team_name: &str) -> Self {
        let winner = game.winner(team_name).to_string();
        Self {
            outcome: game.outcome(),
            winner,
            game,
        }
    }
}

/// One batter's line in a box score
#[derive(Debug, Clone, Serialize)]
pub struct BoxScoreLine {
    pub player: String,
    pub line: Statistic,
    pub hits: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameDetail {
    #[serde(flatten)]
    pub summary: GameSummary,
    pub batters: Vec<BoxScoreLine>,
    #[serde(serialize_with = "serialize_team_totals")]
    pub totals: PlayerTotals,
}

/// Team totals for one game count batters rather than games
#[derive(Serialize)]
struct TeamTotals {
    batters: u64,
    at_bats: u64,
    runs: u64,
    hits: u64,
    singles: u64,
    doubles: u64,
    triples: u64,
    home_runs: u64,
    rbis: u64,
    walks: u64,
}

fn serialize_team_totals<S: Serializer>(
    totals: &PlayerTotals,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    TeamTotals {
        batters: totals.games_played,
        at_bats: totals.at_bats,
        runs: totals.runs,
        hits: totals.hits(),
        singles: totals.singles,
        doubles: totals.doubles,
        triples: totals.triples,
        home_runs: totals.home_runs,
        rbis: totals.rbis,
        walks: totals.walks,
    }
    .serialize(serializer)
}

pub fn handle_game_add(db: &mut SoftballDatabase, game: NewGame) -> Result<()> {
    let game = db.insert_game(&game).context("Failed to add game")?;
    info!(id = %game.id, "game created");
    println!("Game {} created (id {})", game, game.id);
    Ok(())
}

pub fn handle_game_edit(
    db: &mut SoftballDatabase,
    id: GameId,
    params: GameEditParams,
) -> Result<()> {
    let current = db.get_game(id)?;
    let update = merge_game_edit(&current, params);

    let game = db
        .update_game(id, &update)
        .with_context(|| format!("Failed to update game {}", id))?;
    info!(%id, "game updated");
    println!("Game {} updated", game);
    Ok(())
}

/// Apply only the fields that were given on the command line
pub fn merge_game_edit(current: &Game, params: GameEditParams) -> NewGame {
    NewGame {
        game_date: params.game_date.unwrap_or(current.game_date),
        opponent: params.opponent.or_else(|| Some(current.opponent.clone())),
        score: params.score.unwrap_or(current.score),
        opponent_score: params.opponent_score.unwrap_or(current.opponent_score),
        notes: params.notes.or_else(|| current.notes.clone()),
    }
}

pub fn handle_game_list(db: &SoftballDatabase, team_name: &str, as_json: bool) -> Result<()> {
    let summaries: Vec<GameSummary> = db
        .list_games()?
        .into_iter()
        .map(|game| GameSummary::new(game, team_name))
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summaries)?); // tarpaulin::skip
    } else {
        println!("{}", render_game_list(&summaries)); // tarpaulin::skip
    }
    Ok(())
}

pub fn render_game_list(summaries: &[GameSummary]) -> String {
    if summaries.is_empty() {
        return "No games yet".to_string();
    }

    summaries
        .iter()
        .map(|s| format!("{:>4} {} {} {}", s.game.id.as_i64(), s.outcome, s.game, s.winner))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn handle_game_show(
    db: &SoftballDatabase,
    id: GameId,
    team_name: &str,
    as_json: bool,
) -> Result<()> {
    let detail = game_detail(db, id, team_name)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&detail)?); // tarpaulin::skip
    } else {
        println!("{}", render_game_detail(&detail)); // tarpaulin::skip
    }
    Ok(())
}

pub fn game_detail(db: &SoftballDatabase, id: GameId, team_name: &str) -> Result<GameDetail> {
    let game = db.get_game(id)?;
    let batters: Vec<BoxScoreLine> = db
        .batting_lines_for_game(id)?
        .into_iter()
        .map(|(player, line)| BoxScoreLine {
            player: player.to_string(),
            hits: line.hits(),
            line,
        })
        .collect();

    Ok(GameDetail {
        summary: GameSummary::new(game, team_name),
        totals: PlayerTotals::from_statistics(batters.iter().map(|batter| &batter.line)),
        batters,
    })
}

pub fn render_game_detail(detail: &GameDetail) -> String {
    let game = &detail.summary.game;
    let mut lines = vec![
        game.to_string(),
        format!("Winner: {}", detail.summary.winner),
    ];
    if let Some(notes) = &game.notes {
        lines.push(format!("Notes: {}", notes));
    }

    lines.push(header_row("Batter", NAME_WIDTH));
    for batter in &detail.batters {
        lines.push(line_row(&batter.player, NAME_WIDTH, &batter.line));
    }
    lines.push(line_row("Team", NAME_WIDTH, &detail.totals));
    lines.join("\n")
}

pub fn handle_game_delete(db: &mut SoftballDatabase, id: GameId) -> Result<()> {
    let game = db
        .delete_game(id)
        .with_context(|| format!("Failed to delete game {}", id))?;
    info!(%id, "game deleted");
    println!("Game {} deleted", game);
    Ok(())
}
