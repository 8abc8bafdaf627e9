//! Output formatting and progress bars for CLI

use crate::{pipeline::SessionSummary, tictactoe::GameState};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

fn percent(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", 100.0 * count as f64 / total as f64)
}

/// Print the tally of a run of games
pub fn print_summary(summary: &SessionSummary) {
    print_kv("Games", &format_number(summary.games));
    print_kv(
        "X wins",
        &format!("{} ({})", format_number(summary.x_wins), percent(summary.x_wins, summary.games)),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", format_number(summary.o_wins), percent(summary.o_wins, summary.games)),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", format_number(summary.draws), percent(summary.draws, summary.games)),
    );
    if summary.aborted > 0 {
        print_kv("Aborted", &format_number(summary.aborted));
    }
}

/// Print the board followed by its table value
pub fn print_board_value(state: &GameState, value: Option<f64>) {
    println!("{state}");
    match value {
        Some(value) => println!("value of board: {value:.6}"),
        None => println!("value of board: unknown"),
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(6046), "6,046");
        assert_eq!(format_number(986_410), "986,410");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), "25.0%");
        assert_eq!(percent(0, 0), "0.0%");
    }
}
