//! Temporal-difference learning for tic-tac-toe
//!
//! This crate provides:
//! - A tic-tac-toe board with move history, undo and scoped probing
//! - A value table seeded by exhaustive enumeration of reachable positions
//! - Learning agents that back values up along the moves they play
//! - A self-play training session and a game loop shared with human play

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod td_learning;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use td_learning::{Agent, AgentMode, AgentParameters, ValueTable};
pub use tictactoe::{GameResult, GameState, Mark, Move};
pub use types::BoardKey;
