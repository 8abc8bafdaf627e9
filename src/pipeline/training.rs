//! Self-play training session

use serde::{Deserialize, Serialize};

use super::game_loop::{GameEnd, play_game};
use crate::{
    Error, Result,
    app::SessionConfig,
    ports::{MoveSource, Observer},
    td_learning::{Agent, AgentMode, EnumerationStats, Enumerator, SharedValueTable},
    tictactoe::{GameState, Mark},
};

/// Tally of a run of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Games started
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// Games stopped by an illegal move
    pub aborted: usize,
}

impl SessionSummary {
    pub fn record(&mut self, end: &GameEnd) {
        self.games += 1;
        match end.result() {
            Some(result) => match result.winner() {
                Some(Mark::X) => self.x_wins += 1,
                Some(_) => self.o_wins += 1,
                None => self.draws += 1,
            },
            None => self.aborted += 1,
        }
    }

    /// Share of started games that ended in a draw
    pub fn draw_rate(&self) -> f64 {
        if self.games > 0 {
            self.draws as f64 / self.games as f64
        } else {
            0.0
        }
    }
}

/// Two agents sharing one value table, and the board they play on.
///
/// Creating a session enumerates the game tree once; the table then lives as
/// long as the session.
pub struct TrainingSession {
    config: SessionConfig,
    state: GameState,
    table: SharedValueTable,
    x: Agent,
    o: Agent,
    enumeration: EnumerationStats,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingSession {
    /// Build the value table and both agents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if either agent's parameters
    /// are out of range.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;

        let mut state = match config.seed {
            Some(seed) => GameState::with_seed(seed),
            None => GameState::new(),
        };
        let (table, enumeration) = Enumerator::new().run(&mut state);
        let table = table.into_shared();

        let mut x = Agent::new(table.clone(), config.x_agent, Mark::X)?;
        let mut o = Agent::new(table.clone(), config.o_agent, Mark::O)?;
        if let Some(seed) = config.seed {
            x = x.with_seed(seed.wrapping_add(1));
            o = o.with_seed(seed.wrapping_add(2));
        }

        Ok(Self {
            config,
            state,
            table,
            x,
            o,
            enumeration,
            observers: Vec::new(),
        })
    }

    /// Add an observer to the session
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn table(&self) -> &SharedValueTable {
        &self.table
    }

    pub fn enumeration_stats(&self) -> &EnumerationStats {
        &self.enumeration
    }

    /// Board of the last game played
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The agent playing `mark`; `None` for `Mark::Empty`
    pub fn agent(&self, mark: Mark) -> Option<&Agent> {
        match mark {
            Mark::X => Some(&self.x),
            Mark::O => Some(&self.o),
            Mark::Empty => None,
        }
    }

    /// Play the configured number of self-play games
    pub fn run(&mut self) -> Result<SessionSummary> {
        self.run_games(self.config.training_games)
    }

    /// Play `games` self-play games, one after another
    pub fn run_games(&mut self, games: usize) -> Result<SessionSummary> {
        for observer in &mut self.observers {
            observer.on_training_start(games)?;
        }

        let mut summary = SessionSummary::default();
        for game_num in 0..games {
            let observers = &mut self.observers;
            let end = play_game(&mut self.state, &mut self.x, &mut self.o, |state| {
                for observer in observers.iter_mut() {
                    observer.on_move(game_num, state)?;
                }
                Ok(())
            })?;
            summary.record(&end);

            for observer in &mut self.observers {
                observer.on_game_end(game_num, &end, &self.state)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        log::info!(
            "played {} games: X won {}, O won {}, {} drawn, {} aborted",
            summary.games,
            summary.x_wins,
            summary.o_wins,
            summary.draws,
            summary.aborted
        );
        Ok(summary)
    }

    /// Stop exploring and learning; both agents play greedily from now on
    pub fn freeze(&mut self) {
        self.x.set_mode(AgentMode::Play);
        self.o.set_mode(AgentMode::Play);
    }

    /// Play one game between an outside move source and the agent on the
    /// other side
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `opponent_mark` is
    /// `Mark::Empty`, and propagates move source errors.
    pub fn play_against(
        &mut self,
        opponent: &mut dyn MoveSource,
        opponent_mark: Mark,
        on_move: impl FnMut(&GameState) -> Result<()>,
    ) -> Result<GameEnd> {
        match opponent_mark {
            Mark::X => play_game(&mut self.state, opponent, &mut self.o, on_move),
            Mark::O => play_game(&mut self.state, &mut self.x, opponent, on_move),
            Mark::Empty => Err(Error::InvalidConfiguration {
                message: "the opponent must play X or O".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::GameResult;

    #[test]
    fn test_summary_record() {
        let mut summary = SessionSummary::default();
        summary.record(&GameEnd::Finished(GameResult::Draw));
        summary.record(&GameEnd::Finished(GameResult::Decisive {
            winner: Mark::O,
            loser: Mark::X,
        }));
        summary.record(&GameEnd::Aborted { offender: Mark::X });

        assert_eq!(
            summary,
            SessionSummary {
                games: 3,
                x_wins: 0,
                o_wins: 1,
                draws: 1,
                aborted: 1,
            }
        );
        assert!((summary.draw_rate() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_summary_rate() {
        assert_eq!(SessionSummary::default().draw_rate(), 0.0);
    }
}
