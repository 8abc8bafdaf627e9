//! Console rendering of the board and of a game's history

use std::fmt;

use super::{
    board::{BOARD_SIDE, Grid},
    game::GameState,
};

const ROW_SEPARATOR: &str = "-----------";

fn write_grid(f: &mut fmt::Formatter<'_>, grid: &Grid) -> fmt::Result {
    for (r, row) in grid.iter().enumerate() {
        for (c, mark) in row.iter().enumerate() {
            let symbol = if mark.is_empty() { ' ' } else { mark.symbol() };
            write!(f, " {symbol} ")?;
            if c + 1 < BOARD_SIDE {
                write!(f, "|")?;
            }
        }
        writeln!(f)?;
        if r + 1 < BOARD_SIDE {
            writeln!(f, "{ROW_SEPARATOR}")?;
        }
    }
    Ok(())
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.grid())
    }
}

/// Every position of a game, one grid per applied move
pub struct HistoryView<'a> {
    state: &'a GameState,
}

impl<'a> HistoryView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }
}

impl fmt::Display for HistoryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.state.history() {
            let played = entry.played();
            writeln!(
                f,
                "{} plays ({}, {})",
                played.mark(),
                played.row(),
                played.column()
            )?;
            write_grid(f, entry.grid())?;
            writeln!(f)?;
        }
        Ok(())
    }
}
