//! Player command implementations

use super::common::{header_row, line_row, slash_line_or_warn};
use crate::{
    cli::types::RateStat,
    stats::{BattingLine, PlayerTotals, Rate, SlashLine},
    storage::{Game, NewPlayer, Player, SoftballDatabase, Statistic},
    PlayerId,
};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

const NAME_WIDTH: usize = 28;

/// Parameters for the player edit command
#[derive(Debug, Default)]
pub struct PlayerEditParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub number: Option<String>,
    pub clear_number: bool,
}

/// A player with season totals, as listed or shown
#[derive(Debug, Clone, Serialize)]
pub struct PlayerReport {
    #[serde(flatten)]
    pub player: Player,
    pub totals: PlayerTotals,
    pub hits: u64,
    pub ratios: Option<SlashLine>,
}

impl PlayerReport {
    pub fn new(player: Player, statistics: &[Statistic]) -> Self {
        Self::from_totals(player, PlayerTotals::from_statistics(statistics))
    }

    pub fn from_totals(player: Player, totals: PlayerTotals) -> Self {
        let ratios = slash_line_or_warn(&player.to_string(), &totals);
        Self {
            hits: totals.hits(),
            player,
            totals,
            ratios,
        }
    }
}

/// One game in a player's log
#[derive(Debug, Clone, Serialize)]
pub struct PlayerGameLine {
    pub game: Game,
    pub line: Statistic,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerDetail {
    #[serde(flatten)]
    pub report: PlayerReport,
    pub games: Vec<PlayerGameLine>,
}

pub fn handle_player_add(db: &mut SoftballDatabase, player: NewPlayer) -> Result<()> {
    let player = db.insert_player(&player).context("Failed to add player")?;
    info!(id = %player.id, "player created");
    println!("Player {} created (id {})", player, player.id);
    Ok(())
}

pub fn handle_player_edit(
    db: &mut SoftballDatabase,
    id: PlayerId,
    params: PlayerEditParams,
) -> Result<()> {
    let current = db.get_player(id)?;
    let update = merge_player_edit(&current, params);

    let player = db
        .update_player(id, &update)
        .with_context(|| format!("Failed to update player {}", id))?;
    info!(%id, "player updated");
    println!("Player {} updated", player);
    Ok(())
}

/// Apply only the fields that were given on the command line
pub fn merge_player_edit(current: &Player, params: PlayerEditParams) -> NewPlayer {
    let number = if params.clear_number {
        None
    } else {
        params.number.or_else(|| current.number.clone())
    };

    NewPlayer {
        first_name: params
            .first_name
            .unwrap_or_else(|| current.first_name.clone()),
        last_name: params.last_name.unwrap_or_else(|| current.last_name.clone()),
        number,
    }
}

pub fn handle_player_list(
    db: &SoftballDatabase,
    sort: Option<RateStat>,
    as_json: bool,
) -> Result<()> {
    let reports = player_reports(db, sort)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&reports)?); // tarpaulin::skip
    } else {
        println!("{}", render_player_list(&reports)); // tarpaulin::skip
    }
    Ok(())
}

/// Every player with totals, by name or ranked by a ratio (highest first)
pub fn player_reports(db: &SoftballDatabase, sort: Option<RateStat>) -> Result<Vec<PlayerReport>> {
    let mut reports = Vec::new();
    for player in db.list_players()? {
        let statistics = db.statistics_for_player(player.id)?;
        reports.push(PlayerReport::new(player, &statistics));
    }

    if let Some(stat) = sort {
        // Stable sort keeps name order among equal ratios; players without ratios go last
        reports.sort_by(|a, b| rate_of(b, stat).cmp(&rate_of(a, stat)));
    }
    Ok(reports)
}

fn rate_of(report: &PlayerReport, stat: RateStat) -> Option<Rate> {
    report.ratios.map(|slash| match stat {
        RateStat::Avg => slash.average,
        RateStat::Obp => slash.on_base_percentage,
        RateStat::Slg => slash.slugging_percentage,
    })
}

pub fn render_player_list(reports: &[PlayerReport]) -> String {
    if reports.is_empty() {
        return "No players yet".to_string();
    }

    let mut lines = vec![format!("{:>4} {}", "ID", header_row("Player", NAME_WIDTH))];
    for report in reports {
        lines.push(format!(
            "{:>4} {}",
            report.player.id.as_i64(),
            line_row(&report.player.to_string(), NAME_WIDTH, &report.totals)
        ));
    }
    lines.join("\n")
}

pub fn handle_player_show(db: &SoftballDatabase, id: PlayerId, as_json: bool) -> Result<()> {
    let detail = player_detail(db, id)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&detail)?); // tarpaulin::skip
    } else {
        println!("{}", render_player_detail(&detail)); // tarpaulin::skip
    }
    Ok(())
}

pub fn player_detail(db: &SoftballDatabase, id: PlayerId) -> Result<PlayerDetail> {
    let player = db.get_player(id)?;
    let games: Vec<PlayerGameLine> = db
        .game_lines_for_player(id)?
        .into_iter()
        .map(|(game, line)| PlayerGameLine { game, line })
        .collect();
    let totals = PlayerTotals::from_statistics(games.iter().map(|entry| &entry.line));

    Ok(PlayerDetail {
        report: PlayerReport::from_totals(player, totals),
        games,
    })
}

pub fn render_player_detail(detail: &PlayerDetail) -> String {
    let mut lines = vec![
        detail.report.player.to_string(),
        header_row("Game", NAME_WIDTH),
    ];
    for entry in &detail.games {
        let label = format!(
            "{} v. {}",
            entry.game.game_date.format("%Y-%m-%d"),
            entry.game.opponent
        );
        lines.push(line_row(&label, NAME_WIDTH, &entry.line));
    }
    lines.push(line_row(
        &format!("Totals ({} G)", detail.report.totals.games_played),
        NAME_WIDTH,
        &detail.report.totals,
    ));
    lines.join("\n")
}

pub fn handle_player_delete(db: &mut SoftballDatabase, id: PlayerId) -> Result<()> {
    let player = db
        .delete_player(id)
        .with_context(|| format!("Failed to delete player {}", id))?;
    info!(%id, "player deleted");
    println!("Player {} deleted", player);
    Ok(())
}
