//! Ports (trait boundaries) between the game core and its drivers.

pub mod move_source;
pub mod observer;

pub use move_source::MoveSource;
pub use observer::Observer;
