//! Statistic line command implementations

use crate::{
    cli::StatCounts,
    storage::{SoftballDatabase, Statistic},
    GameId, PlayerId,
};
use anyhow::{Context, Result};
use tracing::info;

/// Create or update the line for (player, game).
///
/// Counts that were not given keep their stored value, or zero for a new line.
pub fn handle_stat_set(
    db: &mut SoftballDatabase,
    player_id: PlayerId,
    game_id: GameId,
    counts: StatCounts,
) -> Result<()> {
    let current = db
        .find_statistic(player_id, game_id)?
        .unwrap_or_else(|| Statistic::empty(player_id, game_id));
    let line = apply_counts(current, &counts);

    let saved = db.upsert_statistic(&line).with_context(|| {
        format!(
            "Failed to save line for player {} in game {}",
            player_id, game_id
        )
    })?;

    let player = db.get_player(player_id)?;
    let game = db.get_game(game_id)?;
    info!(%player_id, %game_id, "statistic line saved");
    println!("Saved {}", saved.describe(&player, &game));
    Ok(())
}

pub fn apply_counts(mut line: Statistic, counts: &StatCounts) -> Statistic {
    let fields = [
        (&mut line.at_bats, counts.at_bats),
        (&mut line.runs, counts.runs),
        (&mut line.singles, counts.singles),
        (&mut line.doubles, counts.doubles),
        (&mut line.triples, counts.triples),
        (&mut line.home_runs, counts.home_runs),
        (&mut line.rbis, counts.rbis),
        (&mut line.walks, counts.walks),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            *field = value;
        }
    }
    line
}

pub fn handle_stat_delete(
    db: &mut SoftballDatabase,
    player_id: PlayerId,
    game_id: GameId,
) -> Result<()> {
    db.delete_statistic(player_id, game_id)?;
    info!(%player_id, %game_id, "statistic line deleted");
    println!(
        "Deleted line for player {} in game {}",
        player_id, game_id
    );
    Ok(())
}
