//! Tabular state-value learning
//!
//! The value of every position, from `X`'s point of view, lives in one
//! [`ValueTable`] shared by both agents:
//!
//! - The [`Enumerator`] walks the full game tree once and seeds the table with
//!   1.0 / 0.0 for decided positions and 0.5 for everything else.
//! - An [`Agent`] in play mode moves greedily: `X` toward the highest value,
//!   `O` toward the lowest.
//! - In learn mode the agent explores with a fixed probability and, on greedy
//!   moves, applies the one-step backup
//!   `V(s) ← V(s) + α (V(s') − V(s))` toward the chosen successor `s'`.
//!
//! ## Usage Example
//!
//! ```no_run
//! use td_tictactoe::{
//!     td_learning::{Agent, AgentParameters, compute_terminal_values},
//!     tictactoe::{GameState, Mark},
//! };
//!
//! let table = compute_terminal_values().into_shared();
//! let mut x = Agent::new(table.clone(), AgentParameters::learn(0.1, 0.01), Mark::X).unwrap();
//! let mut state = GameState::new();
//! let mv = x.select_move(&mut state);
//! state.apply(mv);
//! ```

pub mod agent;
pub mod enumerator;
pub mod value_table;

// Public re-exports
pub use agent::{Agent, AgentMode, AgentParameters, AgentStats};
pub use enumerator::{EnumerationStats, Enumerator, compute_terminal_values};
pub use value_table::{SharedValueTable, ValueTable};
