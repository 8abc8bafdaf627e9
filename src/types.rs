//! Newtype wrappers for improved type safety and domain modeling.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

use crate::tictactoe::board::{BOARD_CELLS, BOARD_SIDE, EMPTY_GRID, Grid, Mark};

/// Row-major serialization of a board, one symbol per cell.
///
/// This is the value table index. Empty cells are rendered as `-`, so the
/// empty board is `"---------"`.
///
/// # Examples
///
/// ```
/// use td_tictactoe::types::BoardKey;
///
/// let key = BoardKey::parse("X---O----").unwrap();
/// assert_eq!(key.as_str(), "X---O----");
/// assert!(BoardKey::parse("X---O---").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardKey(String);

impl BoardKey {
    /// Serialize a grid
    pub fn from_grid(grid: &Grid) -> Self {
        BoardKey(grid.iter().flatten().map(|mark| mark.symbol()).collect())
    }

    /// Parse and validate a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not have exactly nine cells or holds a
    /// symbol other than `X`, `O` or `-`.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let count = s.chars().count();
        if count != BOARD_CELLS {
            return Err(crate::Error::InvalidKeyLength {
                expected: BOARD_CELLS,
                got: count,
                key: s.to_string(),
            });
        }
        let mut normalized = String::with_capacity(BOARD_CELLS);
        for (position, c) in s.chars().enumerate() {
            let mark = Mark::from_symbol(c).ok_or_else(|| crate::Error::InvalidKeyCharacter {
                character: c,
                position,
                key: s.to_string(),
            })?;
            normalized.push(mark.symbol());
        }
        Ok(BoardKey(normalized))
    }

    /// Rebuild the grid this key was serialized from
    pub fn to_grid(&self) -> Grid {
        let mut grid = EMPTY_GRID;
        for (i, c) in self.0.chars().enumerate() {
            // Keys are validated on construction.
            grid[i / BOARD_SIDE][i % BOARD_SIDE] = Mark::from_symbol(c).unwrap_or(Mark::Empty);
        }
        grid
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for BoardKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BoardKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&Grid> for BoardKey {
    fn from(grid: &Grid) -> Self {
        Self::from_grid(grid)
    }
}

/// Value of a position from the first player's point of view, in [0, 1].
pub mod value {
    /// Position won by `X`
    pub const WIN: f64 = 1.0;

    /// Drawn or not yet decided position
    pub const NEUTRAL: f64 = 0.5;

    /// Position won by `O`
    pub const LOSS: f64 = 0.0;
}
