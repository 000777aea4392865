//! Game engine
//!
//! The state machine driving one game: start, letter input, guess submission,
//! win/loss detection, and snapshot/restore for persistence.

mod game;
mod state;

pub use game::{GameEngine, GameError};
pub use state::{MAX_ATTEMPTS, Status};
