//! Value-table agent
//!
//! Picks moves by probing every legal move on the shared board and looking
//! the resulting position up in the shared value table. In learn mode the
//! greedy branch also backs the pre-move value up toward the chosen
//! successor.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::value_table::SharedValueTable;
use crate::{
    error::{Error, Result},
    ports::MoveSource,
    tictactoe::{GameResult, GameState, Mark, Move},
};

/// Whether the agent only plays or also explores and learns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    Play,
    Learn,
}

/// Behaviour parameters of an [`Agent`]
///
/// # Examples
///
/// ```
/// use td_tictactoe::td_learning::{AgentMode, AgentParameters};
///
/// let params = AgentParameters::learn(0.1, 0.01).with_mode(AgentMode::Play);
/// assert!(params.validate().is_ok());
/// assert!(AgentParameters::learn(1.5, 0.1).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentParameters {
    pub mode: AgentMode,
    /// Chance of a uniformly random move (learn mode only)
    pub exploration_probability: f64,
    /// Step size α of the value backup (learn mode only)
    pub learning_rate: f64,
}

impl AgentParameters {
    /// Greedy play without exploration or learning
    pub fn play() -> Self {
        Self {
            mode: AgentMode::Play,
            exploration_probability: 0.0,
            learning_rate: 0.01,
        }
    }

    pub fn learn(exploration_probability: f64, learning_rate: f64) -> Self {
        Self {
            mode: AgentMode::Learn,
            exploration_probability,
            learning_rate,
        }
    }

    pub fn with_mode(mut self, mode: AgentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_exploration_probability(mut self, probability: f64) -> Self {
        self.exploration_probability = probability;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] unless the exploration
    /// probability is in [0, 1] and the learning rate is in (0, 1].
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.exploration_probability) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "exploration probability {} must be within [0, 1]",
                    self.exploration_probability
                ),
            });
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "learning rate {} must be within (0, 1]",
                    self.learning_rate
                ),
            });
        }
        Ok(())
    }
}

impl Default for AgentParameters {
    fn default() -> Self {
        Self::learn(0.1, 0.1)
    }
}

/// Running game counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AgentStats {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Agent bound to one mark and reading a shared value table
#[derive(Debug)]
pub struct Agent {
    table: SharedValueTable,
    mark: Mark,
    params: AgentParameters,
    stats: AgentStats,
    rng: StdRng,
    log_target: String,
}

impl Agent {
    /// Create an agent playing `mark`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `mark` is `Empty` or the
    /// parameters are out of range.
    pub fn new(table: SharedValueTable, params: AgentParameters, mark: Mark) -> Result<Self> {
        if mark.is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "an agent must play X or O".to_string(),
            });
        }
        params.validate()?;
        Ok(Self {
            table,
            mark,
            params,
            stats: AgentStats::default(),
            rng: build_rng(None),
            log_target: format!("agent::{mark}"),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = build_rng(Some(seed));
        self
    }

    /// Route this agent's diagnostics to another log target
    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn parameters(&self) -> &AgentParameters {
        &self.params
    }

    /// Replace the behaviour parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the parameters are out of
    /// range; the old parameters stay in effect.
    pub fn set_parameters(&mut self, params: AgentParameters) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: AgentMode) {
        self.params.mode = mode;
    }

    pub fn stats(&self) -> &AgentStats {
        &self.stats
    }

    pub fn table(&self) -> &SharedValueTable {
        &self.table
    }

    /// Update the counters with the outcome of a finished game
    pub fn record_result(&mut self, result: &GameResult) {
        self.stats.total_games += 1;
        match result.winner() {
            Some(winner) if winner == self.mark => self.stats.wins += 1,
            Some(_) => self.stats.losses += 1,
            None => self.stats.draws += 1,
        }
    }

    /// Choose a move, falling back to the (0, 0) sentinel on failure.
    ///
    /// The board is probed but left as it was. The sentinel may point at an
    /// occupied cell; check it with [`GameState::is_legal`].
    pub fn select_move(&mut self, state: &mut GameState) -> Move {
        match self.try_select_move(state) {
            Ok(mv) => mv,
            Err(err @ Error::NoLegalMoves { .. }) => {
                log::warn!(target: self.log_target.as_str(), "{err}");
                Move::sentinel(self.mark)
            }
            Err(err) => {
                log::error!(target: self.log_target.as_str(), "{err}");
                Move::sentinel(self.mark)
            }
        }
    }

    /// Choose a move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] on a full board and
    /// [`Error::MissingValue`] if a probed position is not in the table. The
    /// table is never modified when an error is returned.
    pub fn try_select_move(&mut self, state: &mut GameState) -> Result<Move> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMoves { mark: self.mark });
        }

        match self.params.mode {
            AgentMode::Play => self.greedy_move(state, &moves),
            AgentMode::Learn => {
                if self.rng.random::<f64>() < self.params.exploration_probability {
                    log::debug!(target: self.log_target.as_str(), "exploring possibilities");
                    moves
                        .choose(&mut self.rng)
                        .copied()
                        .ok_or(Error::NoLegalMoves { mark: self.mark })
                } else {
                    log::debug!(target: self.log_target.as_str(), "playing greedily");
                    let chosen = self.greedy_move(state, &moves)?;
                    self.back_up(state, chosen)?;
                    Ok(chosen)
                }
            }
        }
    }

    /// Best move for this side; the first best one wins ties
    fn greedy_move(&self, state: &mut GameState, moves: &[Move]) -> Result<Move> {
        let table = self.table.borrow();
        let mut best: Option<(Move, f64)> = None;

        for &mv in moves {
            let Some(probe) = state.probe(mv) else {
                continue;
            };
            let value = table.value(&probe.canonical_key())?;
            drop(probe);

            let improves = match best {
                None => true,
                Some((_, best_value)) => self.prefers(value, best_value),
            };
            if improves {
                best = Some((mv, value));
            }
        }

        best.map(|(mv, _)| mv)
            .ok_or(Error::NoLegalMoves { mark: self.mark })
    }

    /// `X` maximizes the table value, `O` minimizes it
    fn prefers(&self, candidate: f64, incumbent: f64) -> bool {
        match self.mark {
            Mark::O => candidate < incumbent,
            _ => candidate > incumbent,
        }
    }

    fn back_up(&mut self, state: &mut GameState, chosen: Move) -> Result<()> {
        let before = state.canonical_key();
        let after = state
            .probe(chosen)
            .map(|probe| probe.canonical_key())
            .ok_or(Error::NoLegalMoves { mark: self.mark })?;

        let updated = self
            .table
            .borrow_mut()
            .backup(&before, &after, self.params.learning_rate)?;
        log::trace!(target: self.log_target.as_str(), "V({before}) <- {updated:.6} toward {after}");
        Ok(())
    }
}

impl MoveSource for Agent {
    fn next_move(&mut self, state: &mut GameState) -> Result<Move> {
        Ok(self.select_move(state))
    }

    fn name(&self) -> &str {
        &self.log_target
    }

    fn observe_result(&mut self, result: &GameResult) {
        self.record_result(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{td_learning::ValueTable, types::BoardKey};

    fn key(s: &str) -> BoardKey {
        BoardKey::parse(s).unwrap()
    }

    /// Table covering the empty board and each first move
    fn opening_table(favourite: usize, favourite_value: f64) -> SharedValueTable {
        let mut table = ValueTable::new();
        table.insert(key("---------"), 0.5);
        for cell in 0..9 {
            let mut s: Vec<char> = "---------".chars().collect();
            s[cell] = 'X';
            let v = if cell == favourite { favourite_value } else { 0.5 };
            table.insert(key(&s.iter().collect::<String>()), v);
        }
        table.into_shared()
    }

    #[test]
    fn test_rejects_empty_mark() {
        let table = ValueTable::new().into_shared();
        assert!(Agent::new(table, AgentParameters::play(), Mark::Empty).is_err());
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let table = ValueTable::new().into_shared();
        assert!(Agent::new(table.clone(), AgentParameters::learn(-0.1, 0.1), Mark::X).is_err());
        assert!(Agent::new(table, AgentParameters::learn(0.1, 0.0), Mark::X).is_err());
    }

    #[test]
    fn test_play_mode_picks_highest_value_for_x() {
        let table = opening_table(4, 0.9);
        let mut agent = Agent::new(table, AgentParameters::play(), Mark::X).unwrap();
        let mut state = GameState::with_seed(5);

        let mv = agent.select_move(&mut state);

        assert_eq!((mv.row(), mv.column()), (1, 1));
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_play_mode_picks_lowest_value_for_o() {
        let mut table = ValueTable::new();
        table.insert(key("X--------"), 0.5);
        for (cell, v) in [(1, 0.6), (2, 0.4), (3, 0.2), (4, 0.5), (5, 0.5), (6, 0.5), (7, 0.5), (8, 0.3)] {
            let mut s: Vec<char> = "X--------".chars().collect();
            s[cell] = 'O';
            table.insert(key(&s.iter().collect::<String>()), v);
        }
        let mut agent = Agent::new(table.into_shared(), AgentParameters::play(), Mark::O).unwrap();
        let mut state = GameState::with_seed(5);
        state.apply(Move::new(0, 0, Mark::X).unwrap());

        let mv = agent.select_move(&mut state);

        assert_eq!((mv.row(), mv.column()), (1, 0));
    }

    #[test]
    fn test_missing_value_yields_sentinel_without_inserting() {
        let mut table = ValueTable::new();
        table.insert(key("---------"), 0.5);
        let table = table.into_shared();
        let mut agent = Agent::new(table.clone(), AgentParameters::play(), Mark::X).unwrap();
        let mut state = GameState::with_seed(5);

        assert!(matches!(
            agent.try_select_move(&mut state),
            Err(Error::MissingValue { .. })
        ));
        assert_eq!(agent.select_move(&mut state), Move::sentinel(Mark::X));
        assert_eq!(table.borrow().len(), 1);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_full_board_yields_sentinel() {
        let table = ValueTable::new().into_shared();
        let mut agent = Agent::new(table, AgentParameters::play(), Mark::X).unwrap();
        let mut state = GameState::with_seed(5);
        // X O X / X O O / O X X
        for (row, column) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
            let mv = Move::new(row, column, state.turn()).unwrap();
            assert!(state.apply(mv));
        }

        assert!(matches!(
            agent.try_select_move(&mut state),
            Err(Error::NoLegalMoves { mark: Mark::X })
        ));
        assert_eq!(agent.select_move(&mut state), Move::sentinel(Mark::X));
    }

    #[test]
    fn test_greedy_learning_backs_up_value() {
        let table = opening_table(0, 1.0);
        let mut agent = Agent::new(table.clone(), AgentParameters::learn(0.0, 0.1), Mark::X)
            .unwrap()
            .with_seed(9);
        let mut state = GameState::with_seed(9);

        let mv = agent.select_move(&mut state);

        assert_eq!((mv.row(), mv.column()), (0, 0));
        let updated = table.borrow().get(&key("---------")).unwrap();
        assert!((updated - 0.55).abs() < 1e-12);
        assert_eq!(table.borrow().get(&key("X--------")), Some(1.0));
    }

    #[test]
    fn test_exploration_never_updates() {
        let table = opening_table(0, 1.0);
        let mut agent = Agent::new(table.clone(), AgentParameters::learn(1.0, 0.5), Mark::X)
            .unwrap()
            .with_seed(9);
        let mut state = GameState::with_seed(9);

        for _ in 0..25 {
            let mv = agent.select_move(&mut state);
            assert!(state.is_legal(&mv));
        }

        assert_eq!(table.borrow().get(&key("---------")), Some(0.5));
    }

    #[test]
    fn test_record_result() {
        let table = ValueTable::new().into_shared();
        let mut agent = Agent::new(table, AgentParameters::play(), Mark::O).unwrap();

        agent.record_result(&GameResult::Decisive {
            winner: Mark::O,
            loser: Mark::X,
        });
        agent.record_result(&GameResult::Decisive {
            winner: Mark::X,
            loser: Mark::O,
        });
        agent.record_result(&GameResult::Draw);

        assert_eq!(
            *agent.stats(),
            AgentStats {
                total_games: 3,
                wins: 1,
                losses: 1,
                draws: 1,
            }
        );
    }
}
