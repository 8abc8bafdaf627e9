//! Winning line analysis for Tic-Tac-Toe

use super::board::{Grid, Mark};

/// Winning lines as (row, column) triples: rows, then columns, then diagonals
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Mark owning a line, if all three cells hold the same non-empty mark
    pub fn line_owner(grid: &Grid, line: &[(usize, usize); 3]) -> Option<Mark> {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let first = grid[r0][c0];
        (!first.is_empty() && grid[r1][c1] == first && grid[r2][c2] == first).then_some(first)
    }

    /// Scan every line and return the owner of the first completed one.
    ///
    /// All eight lines are always evaluated; later matches never replace an
    /// earlier one.
    pub fn completed_line(grid: &Grid) -> Option<Mark> {
        WINNING_LINES
            .iter()
            .map(|line| Self::line_owner(grid, line))
            .fold(None, |found, owner| found.or(owner))
    }

    /// Number of completed lines on the grid
    pub fn completed_count(grid: &Grid) -> usize {
        WINNING_LINES
            .iter()
            .filter(|line| Self::line_owner(grid, line).is_some())
            .count()
    }
}
