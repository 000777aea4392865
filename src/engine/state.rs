//! Game state data

use crate::core::Word;

/// Maximum number of submitted guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// Lifecycle state of the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game's progress
///
/// `attempts` holds every submitted guess in order, the winning one included.
/// `attempt_count` counts only non-winning submissions, so it equals
/// `attempts.len()` while the game is in progress and lags it by one after a
/// win. `active_row == attempt_count` while no guess is mid-entry.
#[derive(Debug, Clone)]
pub(crate) struct GameState {
    pub(crate) target: Word,
    pub(crate) attempts: Vec<Word>,
    pub(crate) attempt_count: usize,
    pub(crate) active_row: usize,
    pub(crate) current_input: String,
}

impl GameState {
    pub(crate) fn new(target: Word) -> Self {
        Self {
            target,
            attempts: Vec::new(),
            attempt_count: 0,
            active_row: 0,
            current_input: String::new(),
        }
    }
}
