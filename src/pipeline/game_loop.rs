//! Drive one game between two move sources

use crate::{
    Result,
    ports::MoveSource,
    tictactoe::{GameResult, GameState, Mark},
};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The game reached a decisive or full board
    Finished(GameResult),
    /// A side produced a move the board rejected
    Aborted { offender: Mark },
}

impl GameEnd {
    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameEnd::Finished(result) => Some(*result),
            GameEnd::Aborted { .. } => None,
        }
    }
}

/// Reset the board and alternate moves until the game is decided.
///
/// `x` moves first. `on_move` sees the state after every applied move. An
/// illegal move from either side ends the game as [`GameEnd::Aborted`]; the
/// board is left as it was before that move.
///
/// # Errors
///
/// Propagates errors from the move sources and from `on_move`.
pub fn play_game(
    state: &mut GameState,
    x: &mut dyn MoveSource,
    o: &mut dyn MoveSource,
    mut on_move: impl FnMut(&GameState) -> Result<()>,
) -> Result<GameEnd> {
    state.reset();

    loop {
        if let Some(result) = state.result() {
            x.observe_result(&result);
            o.observe_result(&result);
            return Ok(GameEnd::Finished(result));
        }

        let turn = state.turn();
        let source: &mut dyn MoveSource = if turn == Mark::X { &mut *x } else { &mut *o };
        let mv = source.next_move(state)?;

        if !state.is_legal(&mv) {
            log::warn!(
                "{} gave an illegal move ({}, {})",
                source.name(),
                mv.row(),
                mv.column()
            );
            return Ok(GameEnd::Aborted { offender: turn });
        }

        state.apply(mv);
        on_move(state)?;
    }
}
