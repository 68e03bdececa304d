//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use softball_stats::{
    cli::{Commands, GameCmd, PlayerCmd, Softball, StatCmd},
    commands::{
        games::{
            handle_game_add, handle_game_delete, handle_game_edit, handle_game_list,
            handle_game_show, GameEditParams,
        },
        open_database,
        players::{
            handle_player_add, handle_player_delete, handle_player_edit, handle_player_list,
            handle_player_show, PlayerEditParams,
        },
        record::handle_record,
        resolve_team_name,
        statistics::{handle_stat_delete, handle_stat_set},
    },
    storage::{NewGame, NewPlayer},
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("softball_stats=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = Softball::parse();
    let team_name = resolve_team_name(app.team);
    let mut db = open_database(app.db.as_deref())?;

    match app.command {
        Commands::Player { cmd } => match cmd {
            PlayerCmd::Add {
                first,
                last,
                number,
            } => handle_player_add(
                &mut db,
                NewPlayer {
                    first_name: first,
                    last_name: last,
                    number,
                },
            )?,

            PlayerCmd::Edit {
                id,
                first,
                last,
                number,
                clear_number,
            } => handle_player_edit(
                &mut db,
                id,
                PlayerEditParams {
                    first_name: first,
                    last_name: last,
                    number,
                    clear_number,
                },
            )?,

            PlayerCmd::List { sort, json } => handle_player_list(&db, sort, json)?,

            PlayerCmd::Show { id, json } => handle_player_show(&db, id, json)?,

            PlayerCmd::Delete { id } => handle_player_delete(&mut db, id)?,
        },

        Commands::Game { cmd } => match cmd {
            GameCmd::Add {
                date,
                opponent,
                score,
                opponent_score,
                notes,
            } => handle_game_add(
                &mut db,
                NewGame {
                    game_date: date,
                    opponent,
                    score,
                    opponent_score,
                    notes,
                },
            )?,

            GameCmd::Edit {
                id,
                date,
                opponent,
                score,
                opponent_score,
                notes,
            } => handle_game_edit(
                &mut db,
                id,
                GameEditParams {
                    game_date: date,
                    opponent,
                    score,
                    opponent_score,
                    notes,
                },
            )?,

            GameCmd::List { json } => handle_game_list(&db, &team_name, json)?,

            GameCmd::Show { id, json } => handle_game_show(&db, id, &team_name, json)?,

            GameCmd::Delete { id } => handle_game_delete(&mut db, id)?,
        },

        Commands::Stat { cmd } => match cmd {
            StatCmd::Set {
                player,
                game,
                counts,
            } => handle_stat_set(&mut db, player, game, counts)?,

            StatCmd::Delete { player, game } => handle_stat_delete(&mut db, player, game)?,
        },

        Commands::Record { json } => handle_record(&db, &team_name, json)?,
    }

    Ok(())
}
