//! Move source port - anything that can decide the next move for one side
//!
//! Agents and the human prompt both sit behind this trait, so the game loop
//! drives any pairing of them the same way.

use crate::{
    Result,
    tictactoe::{GameResult, GameState, Move},
};

/// Supplier of moves for one side of a game
///
/// # Examples
///
/// ```no_run
/// use td_tictactoe::{
///     ports::MoveSource,
///     tictactoe::{GameState, Move},
/// };
///
/// struct FirstEmptyCell;
///
/// impl MoveSource for FirstEmptyCell {
///     fn next_move(&mut self, state: &mut GameState) -> td_tictactoe::Result<Move> {
///         state
///             .ordered_legal_moves()
///             .first()
///             .copied()
///             .ok_or(td_tictactoe::Error::NoLegalMoves { mark: state.turn() })
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
/// ```
pub trait MoveSource {
    /// Decide the next move for the side to move.
    ///
    /// Implementations may probe the state but must leave it as they found
    /// it. The returned move is checked with [`GameState::is_legal`] by the
    /// caller before it is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a move at all (for
    /// example, its input was closed).
    fn next_move(&mut self, state: &mut GameState) -> Result<Move>;

    /// Name used in logs
    fn name(&self) -> &str;

    /// Called once a game this source took part in has finished.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn observe_result(&mut self, _result: &GameResult) {}
}
