//! Exhaustive precomputation of position values
//!
//! Walks the whole game tree depth-first from the empty board and seeds the
//! value table: decided positions get their true outcome, everything else the
//! neutral prior that learning later refines.

use super::value_table::ValueTable;
use crate::{
    tictactoe::{GameState, Mark},
    types::value,
};

/// Counters gathered during one enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Positions visited, counting every path separately
    pub positions_visited: usize,
    /// Visits to decisive positions
    pub decisive_visits: usize,
    /// Visits to full boards without a line
    pub draw_visits: usize,
    /// Distinct positions in the finished table
    pub distinct_positions: usize,
}

impl EnumerationStats {
    pub fn terminal_visits(&self) -> usize {
        self.decisive_visits + self.draw_visits
    }
}

/// Depth-first walker that fills a [`ValueTable`]
#[derive(Debug, Default)]
pub struct Enumerator {
    table: ValueTable,
    stats: EnumerationStats,
}

impl Enumerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enumerate every position reachable from the empty board.
    ///
    /// The state is reset first and is back to the empty board on return.
    /// Positions reached through different move orders are revisited; their
    /// value depends only on the grid, so rewriting is harmless.
    pub fn run(mut self, state: &mut GameState) -> (ValueTable, EnumerationStats) {
        state.reset();
        self.visit(state);
        debug_assert!(state.history().is_empty());
        self.stats.distinct_positions = self.table.len();

        log::info!(
            "enumerated {} positions ({} visits, {} terminal)",
            self.table.len(),
            self.stats.positions_visited,
            self.stats.terminal_visits()
        );
        (self.table, self.stats)
    }

    fn visit(&mut self, state: &mut GameState) {
        self.stats.positions_visited += 1;

        let over = state.is_over();
        let decisive = state.is_decisive();
        let key = state.canonical_key();

        self.table.insert(key.clone(), value::NEUTRAL);

        if over && !decisive {
            self.stats.draw_visits += 1;
            self.table.insert(key.clone(), value::NEUTRAL);
        }

        if decisive {
            self.stats.decisive_visits += 1;
            let outcome = match state.result().and_then(|result| result.winner()) {
                Some(Mark::X) => value::WIN,
                _ => value::LOSS,
            };
            self.table.insert(key, outcome);
        }

        // Legality only depends on empty cells, so the walk continues past
        // decided positions.
        for mv in state.legal_moves() {
            if let Some(mut next) = state.probe(mv) {
                self.visit(&mut next);
            }
        }
    }
}

/// Build the initial value table for a fresh board
pub fn compute_terminal_values() -> ValueTable {
    let mut state = GameState::new();
    Enumerator::new().run(&mut state).0
}
