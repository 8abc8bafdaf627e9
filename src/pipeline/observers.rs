//! Observer implementations for training sessions
//!
//! - [`ProgressObserver`]: progress bar with the running tally
//! - [`HistoryLogObserver`]: logs the full move history of every n-th game

use indicatif::{ProgressBar, ProgressStyle};

use super::{game_loop::GameEnd, training::SessionSummary};
use crate::{
    Result,
    ports::Observer,
    tictactoe::{GameState, HistoryView},
};

/// Progress observer - shows a progress bar during training
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    summary: SessionSummary,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            summary: SessionSummary::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "X:{} O:{} D:{}",
            self.summary.x_wins, self.summary.o_wins, self.summary.draws
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        self.summary = SessionSummary::default();
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, end: &GameEnd, _state: &GameState) -> Result<()> {
        self.summary.record(end);

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Logs the move-by-move history of sampled games at debug level
pub struct HistoryLogObserver {
    every: usize,
    total_games: usize,
}

impl HistoryLogObserver {
    /// Log every `every`-th game and the last one; `0` disables logging
    pub fn new(every: usize) -> Self {
        Self {
            every,
            total_games: 0,
        }
    }

    fn should_log(&self, game_num: usize) -> bool {
        self.every > 0 && (game_num % self.every == 0 || game_num + 1 == self.total_games)
    }
}

impl Observer for HistoryLogObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        self.total_games = total_games;
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, end: &GameEnd, state: &GameState) -> Result<()> {
        if self.should_log(game_num) {
            log::debug!("game {game_num} ended {end:?}\n{}", HistoryView::new(state));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_log_sampling() {
        let mut observer = HistoryLogObserver::new(100);
        observer.on_training_start(250).unwrap();
        assert!(observer.should_log(0));
        assert!(!observer.should_log(1));
        assert!(observer.should_log(200));
        assert!(observer.should_log(249));
    }

    #[test]
    fn test_history_log_disabled() {
        let mut observer = HistoryLogObserver::new(0);
        observer.on_training_start(10).unwrap();
        assert!(!observer.should_log(0));
        assert!(!observer.should_log(9));
    }

    #[test]
    fn test_progress_observer_without_start_is_quiet() {
        let mut observer = ProgressObserver::new();
        let state = GameState::with_seed(1);
        observer
            .on_game_end(0, &GameEnd::Aborted { offender: crate::tictactoe::Mark::X }, &state)
            .unwrap();
        assert_eq!(observer.summary.aborted, 1);
        observer.on_training_end().unwrap();
    }
}
