//! Batting statistics and game outcomes
//!
//! Everything here is a pure function of counting stats that have already
//! been loaded from storage:
//! - `rate`: Exact ratio type returned by every formula
//! - `formulas`: Average, on-base and slugging percentage
//! - `line`: The `BattingLine` trait and its single-game implementation
//! - `totals`: Player (or team) totals folded over many lines
//! - `outcome`: Win/loss/tie determination and the team record

pub mod formulas;
pub mod line;
pub mod outcome;
pub mod rate;
pub mod totals;

pub use formulas::{average, on_base_percentage, slugging_percentage, total_bases};
pub use line::{BattingLine, SlashLine};
pub use outcome::{GameRecord, Outcome};
pub use rate::Rate;
pub use totals::PlayerTotals;
