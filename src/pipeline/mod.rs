//! Game and training drivers
//!
//! This module provides:
//! - The game loop shared by self-play and human play
//! - The self-play training session
//! - Observers recording progress during training

pub mod game_loop;
pub mod observers;
pub mod training;

pub use game_loop::{GameEnd, play_game};
pub use observers::{HistoryLogObserver, ProgressObserver};
pub use training::{SessionSummary, TrainingSession};

pub use crate::ports::{MoveSource, Observer};
