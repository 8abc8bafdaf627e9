//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod render;

pub use board::{BOARD_CELLS, BOARD_SIDE, EMPTY_GRID, Grid, Mark};
pub use game::{GameResult, GameState, HistoryEntry, Move, Probe};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use render::HistoryView;
