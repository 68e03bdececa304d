//! Box-score formatting shared by the player and game views.

use crate::stats::{BattingLine, SlashLine};
use tracing::warn;

pub const LINE_HEADER_COUNTS: &str = " AB   R   H  2B  3B  HR RBI  BB    AVG   OBP   SLG";

/// Ratios for display; a line that breaks the hits invariant is logged and
/// shown without ratios instead of failing the whole listing.
pub fn slash_line_or_warn(label: &str, line: &impl BattingLine) -> Option<SlashLine> {
    match line.slash_line() {
        Ok(slash) => Some(slash),
        Err(e) => {
            warn!(line = label, error = %e, "cannot compute ratios");
            None
        }
    }
}

/// Header row for a table whose first column is `width` wide.
pub fn header_row(label: &str, width: usize) -> String {
    format!("{:<width$} {}", label, LINE_HEADER_COUNTS, width = width)
}

/// One aligned box-score row.
pub fn line_row(label: &str, width: usize, line: &impl BattingLine) -> String {
    let ratios = match slash_line_or_warn(label, line) {
        Some(slash) => format!(
            "{:>6} {:>5} {:>5}",
            slash.average.to_string(),
            slash.on_base_percentage.to_string(),
            slash.slugging_percentage.to_string()
        ),
        None => format!("{:>6} {:>5} {:>5}", "n/a", "n/a", "n/a"),
    };

    format!(
        "{:<width$} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {}",
        truncate(label, width),
        line.at_bats(),
        line.runs(),
        line.hits(),
        line.doubles(),
        line.triples(),
        line.home_runs(),
        line.rbis(),
        line.walks(),
        ratios,
        width = width
    )
}

fn truncate(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    let mut cut: String = label.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::PlayerTotals;

    #[test]
    fn test_line_row_columns() {
        let totals = PlayerTotals {
            games_played: 2,
            at_bats: 4,
            runs: 1,
            singles: 1,
            doubles: 1,
            rbis: 2,
            walks: 1,
            ..PlayerTotals::default()
        };

        let row = line_row("Test Player", 12, &totals);

        assert_eq!(
            row,
            "Test Player    4   1   2   1   0   0   2   1   .500  .600  .750"
        );
    }

    #[test]
    fn test_line_row_without_ratios() {
        let totals = PlayerTotals {
            at_bats: 1,
            singles: 2,
            ..PlayerTotals::default()
        };

        let row = line_row("Broken", 6, &totals);
        assert!(row.ends_with("n/a   n/a   n/a"));
    }

    #[test]
    fn test_header_aligns_with_rows() {
        let header = header_row("Player", 12);
        let row = line_row("Test Player", 12, &PlayerTotals::default());
        assert_eq!(header.len(), row.len());
    }

    #[test]
    fn test_truncate_long_label() {
        assert_eq!(truncate("Abcdefghij", 5), "Abcd~");
        assert_eq!(truncate("Abc", 5), "Abc");
    }
}
