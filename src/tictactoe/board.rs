//! Marks and the raw 3x3 grid

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the board
pub const BOARD_SIDE: usize = 3;

/// Number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Row-major 3x3 grid of marks
pub type Grid = [[Mark; BOARD_SIDE]; BOARD_SIDE];

/// The empty grid
pub const EMPTY_GRID: Grid = [[Mark::Empty; BOARD_SIDE]; BOARD_SIDE];

/// Content of a cell, and the side a player or move belongs to.
///
/// `X` always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
    Empty,
}

impl Mark {
    /// Swap `X` and `O`; `Empty` stays `Empty`
    pub fn flip(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Symbol used in board keys
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '-',
        }
    }

    pub fn from_symbol(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '-' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Count the empty cells of a grid
pub fn empty_cells(grid: &Grid) -> usize {
    grid.iter().flatten().filter(|cell| cell.is_empty()).count()
}
