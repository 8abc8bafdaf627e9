//! Game state machine: move application, reversal and outcome detection

use std::ops::{Deref, DerefMut};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use super::{
    board::{BOARD_SIDE, EMPTY_GRID, Grid, Mark, empty_cells},
    lines::LineAnalyzer,
};
use crate::types::BoardKey;

/// An intended placement of a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    column: usize,
    mark: Mark,
}

impl Move {
    /// Create a move, validating the coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinates`] if row or column is not in 0-2.
    pub fn new(row: usize, column: usize, mark: Mark) -> crate::Result<Self> {
        if row < BOARD_SIDE && column < BOARD_SIDE {
            Ok(Move { row, column, mark })
        } else {
            Err(crate::Error::InvalidCoordinates { row, column })
        }
    }

    /// Move at (0, 0) returned when an agent cannot pick a real move.
    ///
    /// The cell may be occupied, so callers must check it with
    /// [`GameState::is_legal`] before applying.
    pub const fn sentinel(mark: Mark) -> Self {
        Move {
            row: 0,
            column: 0,
            mark,
        }
    }

    pub(crate) const fn at(row: usize, column: usize, mark: Mark) -> Self {
        Move { row, column, mark }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Decisive { winner: Mark, loser: Mark },
    Draw,
}

impl GameResult {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Decisive { winner, .. } => Some(*winner),
            GameResult::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

/// One applied move together with the grid it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    played: Move,
    grid: Grid,
    prior_winner: Mark,
}

impl HistoryEntry {
    pub fn played(&self) -> Move {
        self.played
    }

    /// Grid right after the move
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

/// Mutable board with turn tracking and an undo history.
///
/// All changes go through [`GameState::apply`] and
/// [`GameState::revert_last_move`]; the history always replays to the current
/// grid. Legal moves come back shuffled, so the state carries its own random
/// source; seed it with [`GameState::with_seed`] for reproducible runs.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    turn: Mark,
    winner: Mark,
    history: Vec<HistoryEntry>,
    rng: StdRng,
}

impl GameState {
    /// Create an empty board with `X` to move
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Create an empty board whose legal-move shuffling is reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        GameState {
            grid: EMPTY_GRID,
            turn: Mark::X,
            winner: Mark::Empty,
            history: Vec::new(),
            rng,
        }
    }

    /// Clear the board for a new game
    pub fn reset(&mut self) {
        self.grid = EMPTY_GRID;
        self.turn = Mark::X;
        self.winner = Mark::Empty;
        self.history.clear();
    }

    /// Mark that moves next
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Winner cached by the last [`GameState::is_decisive`] call
    pub fn winner(&self) -> Mark {
        self.winner
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the mark at (row, column)
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside 0-2.
    pub fn cell(&self, row: usize, column: usize) -> Mark {
        self.grid[row][column]
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// One move per empty cell for the side to move, in random order
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mut moves = self.ordered_legal_moves();
        moves.shuffle(&mut self.rng);
        moves
    }

    /// Legal moves in row-major order
    pub fn ordered_legal_moves(&self) -> Vec<Move> {
        let turn = self.turn;
        (0..BOARD_SIDE)
            .flat_map(|row| (0..BOARD_SIDE).map(move |column| (row, column)))
            .filter(|&(row, column)| self.grid[row][column].is_empty())
            .map(|(row, column)| Move::at(row, column, turn))
            .collect()
    }

    /// True iff the move carries the side to move and targets an empty cell
    pub fn is_legal(&self, mv: &Move) -> bool {
        mv.row < BOARD_SIDE
            && mv.column < BOARD_SIDE
            && mv.mark == self.turn
            && self.grid[mv.row][mv.column].is_empty()
    }

    /// Place a mark and pass the turn.
    ///
    /// Illegal moves are ignored and leave the state untouched; the return
    /// value tells whether the move was applied.
    pub fn apply(&mut self, mv: Move) -> bool {
        if !self.is_legal(&mv) {
            return false;
        }
        self.grid[mv.row][mv.column] = mv.mark;
        self.turn = self.turn.flip();
        self.history.push(HistoryEntry {
            played: mv,
            grid: self.grid,
            prior_winner: self.winner,
        });
        true
    }

    /// Undo the most recent move, if any, and return it
    pub fn revert_last_move(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        let played = entry.played;
        self.grid[played.row][played.column] = Mark::Empty;
        self.turn = self.turn.flip();
        self.winner = entry.prior_winner;
        Some(played)
    }

    /// Apply a legal move for the lifetime of the returned guard.
    ///
    /// The move is reverted when the guard drops, whichever way the scope is
    /// left. Returns `None` (and changes nothing) for an illegal move.
    pub fn probe(&mut self, mv: Move) -> Option<Probe<'_>> {
        if self.apply(mv) {
            Some(Probe { state: self })
        } else {
            None
        }
    }

    /// Whether any line is complete; caches its owner as the winner
    pub fn is_decisive(&mut self) -> bool {
        match LineAnalyzer::completed_line(&self.grid) {
            Some(owner) => {
                self.winner = owner;
                true
            }
            None => false,
        }
    }

    /// Whether every cell is filled, regardless of lines
    pub fn is_over(&self) -> bool {
        empty_cells(&self.grid) == 0
    }

    /// Outcome of the position, or `None` while undecided.
    ///
    /// `apply` passes the turn immediately, so in a decisive position the side
    /// to move is the side that lost.
    pub fn result(&self) -> Option<GameResult> {
        if LineAnalyzer::completed_line(&self.grid).is_some() {
            Some(GameResult::Decisive {
                winner: self.turn.flip(),
                loser: self.turn,
            })
        } else if self.is_over() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    /// Value table key of the current grid
    pub fn canonical_key(&self) -> BoardKey {
        BoardKey::from_grid(&self.grid)
    }

    /// Number of marks on the board
    pub fn filled_cells(&self) -> usize {
        self.history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A probing move that is undone on drop
#[derive(Debug)]
pub struct Probe<'a> {
    state: &'a mut GameState,
}

impl Deref for Probe<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.state.revert_last_move();
    }
}
