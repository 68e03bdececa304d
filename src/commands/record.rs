//! Team record command implementation

use crate::{stats::GameRecord, storage::SoftballDatabase};
use anyhow::Result;

pub fn handle_record(db: &SoftballDatabase, team_name: &str, as_json: bool) -> Result<()> {
    let record = db.game_record()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&record)?); // tarpaulin::skip
    } else {
        println!("{}", render_record(team_name, &record)); // tarpaulin::skip
    }
    Ok(())
}

pub fn render_record(team_name: &str, record: &GameRecord) -> String {
    format!(
        "{}: {} ({} wins, {} losses, {} ties)",
        team_name, record, record.wins, record.losses, record.ties
    )
}
