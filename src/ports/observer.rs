//! Observer port - abstraction for training observation
//!
//! Lets the training session report progress and game records without
//! knowing where they go.

use crate::{Result, pipeline::GameEnd, tictactoe::GameState};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - once at the beginning
/// 2. For each game:
///    - `on_move(game_num, state)` - after every applied move
///    - `on_game_end(game_num, end, state)`
/// 3. `on_training_end()` - once at the end
pub trait Observer {
    /// Called when training starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each applied move with the resulting state.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_move(&mut self, _game_num: usize, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// Called when a game ends, with the final state (history included).
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_game_end(&mut self, _game_num: usize, _end: &GameEnd, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
