//! CLI infrastructure for td-tictactoe
//!
//! This module provides the command-line interface for self-play training and
//! for playing the trained agent.

pub mod commands;
pub mod output;
