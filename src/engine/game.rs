//! Game state machine
//!
//! The engine owns the word pool and the current game, and mutates state in
//! response to UI events. Every user-input operation is a precondition-gated
//! no-op rather than an error, mirroring a permissive interactive surface:
//! a tap that would violate the rules simply does nothing. Only resource
//! problems (an empty word pool) are reportable.
//!
//! The engine never touches storage or rendering. The UI collaborator reads
//! state through the query accessors after each call and drives persistence
//! through `snapshot`/`restore`.

use super::state::{GameState, MAX_ATTEMPTS, Status};
use crate::core::{Feedback, Verdict, WORD_LEN, Word, letter_states};
use crate::persistence::SavedGame;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::fmt;

/// Error starting a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word pool is empty, no target can be drawn
    NoWordsAvailable,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsAvailable => write!(f, "No words available to start a game"),
        }
    }
}

impl std::error::Error for GameError {}

/// The game engine
///
/// Generic over the random source so tests can inject a seeded rng.
#[derive(Debug)]
pub struct GameEngine<R: Rng> {
    words: Vec<Word>,
    rng: R,
    status: Status,
    game: Option<GameState>,
}

impl GameEngine<StdRng> {
    /// Create an engine over a word pool with an OS-seeded rng
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine with an injected random source
    pub fn with_rng(words: Vec<Word>, rng: R) -> Self {
        Self {
            words,
            rng,
            status: Status::default(),
            game: None,
        }
    }

    /// Start a fresh game with a uniformly random target
    ///
    /// Valid from any state; a running game is discarded.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoWordsAvailable` if the word pool is empty.
    pub fn start_new_game(&mut self) -> Result<(), GameError> {
        let target = self
            .words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::NoWordsAvailable)?;

        self.game = Some(GameState::new(target));
        self.status = Status::InProgress;
        Ok(())
    }

    /// Append a letter to the guess under construction
    ///
    /// No-op unless a game is in progress, the input has room, and the letter
    /// is alphabetic. Uppercase input is normalized.
    pub fn input_letter(&mut self, letter: char) {
        if !self.status.is_in_progress() || !letter.is_ascii_alphabetic() {
            return;
        }
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.current_input.len() < WORD_LEN {
            game.current_input.push(letter.to_ascii_lowercase());
        }
    }

    /// Remove the last letter of the guess under construction
    ///
    /// No-op unless a game is in progress and the input is non-empty.
    pub fn delete_letter(&mut self) {
        if !self.status.is_in_progress() {
            return;
        }
        if let Some(game) = self.game.as_mut() {
            game.current_input.pop();
        }
    }

    /// Submit the guess under construction
    ///
    /// No-op unless a game is in progress and exactly 5 letters are entered
    /// (the disabled-submit-button case). A winning guess moves to `Won`
    /// without counting as an attempt; the sixth non-winning submission moves
    /// to `Lost` and makes the answer revealable.
    pub fn submit_guess(&mut self) {
        if !self.status.is_in_progress() {
            return;
        }
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.current_input.len() != WORD_LEN {
            return;
        }
        // current_input only ever holds lowercase ASCII letters
        let Ok(guess) = Word::new(game.current_input.as_str()) else {
            return;
        };

        game.current_input.clear();
        let won = guess == game.target;
        game.attempts.push(guess);

        if won {
            self.status = Status::Won;
        } else {
            game.attempt_count += 1;
            if game.attempt_count == MAX_ATTEMPTS {
                self.status = Status::Lost;
            } else {
                game.active_row += 1;
            }
        }
    }

    /// Drop the current game and return to `NotStarted`
    ///
    /// The caller is responsible for clearing any persisted save.
    pub fn abandon(&mut self) {
        self.game = None;
        self.status = Status::NotStarted;
    }

    /// Current lifecycle state
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The guess currently being typed
    #[must_use]
    pub fn current_input(&self) -> &str {
        self.game
            .as_ref()
            .map_or("", |game| game.current_input.as_str())
    }

    /// All submitted guesses in submission order
    #[must_use]
    pub fn attempts(&self) -> &[Word] {
        self.game.as_ref().map_or(&[], |game| &game.attempts)
    }

    /// Number of non-winning submissions so far
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.game.as_ref().map_or(0, |game| game.attempt_count)
    }

    /// Index of the row currently being edited
    #[must_use]
    pub fn active_row(&self) -> usize {
        self.game.as_ref().map_or(0, |game| game.active_row)
    }

    /// Whether the typed guess is ready to submit
    #[must_use]
    pub fn is_input_complete(&self) -> bool {
        self.current_input().len() == WORD_LEN
    }

    /// Feedback for a submitted row, if that row exists
    #[must_use]
    pub fn row_feedback(&self, row: usize) -> Option<Feedback> {
        let game = self.game.as_ref()?;
        let guess = game.attempts.get(row)?;
        Some(Feedback::of(guess, &game.target))
    }

    /// Best verdict seen per letter across all submitted guesses
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<u8, Verdict> {
        self.game
            .as_ref()
            .map_or_else(FxHashMap::default, |game| {
                letter_states(&game.attempts, &game.target)
            })
    }

    /// The target word, revealed only after a loss
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&str> {
        match (self.status, self.game.as_ref()) {
            (Status::Lost, Some(game)) => Some(game.target.text()),
            _ => None,
        }
    }

    /// Serialize the running game for persistence
    ///
    /// `Some` only while a game is in progress. A partially-typed row is
    /// appended to the persisted attempts, matching how `restore` re-derives
    /// it.
    #[must_use]
    pub fn snapshot(&self) -> Option<SavedGame> {
        if !self.status.is_in_progress() {
            return None;
        }
        let game = self.game.as_ref()?;

        let mut attempts: Vec<String> = game
            .attempts
            .iter()
            .map(|word| word.text().to_string())
            .collect();
        if !game.current_input.is_empty() {
            attempts.push(game.current_input.clone());
        }

        Some(SavedGame {
            target_word: game.target.text().to_string(),
            attempts,
            attempt_count: game.attempt_count,
            active_row: game.active_row,
        })
    }

    /// Rebuild a game from a save
    ///
    /// A trailing entry shorter than 5 letters becomes the in-progress input.
    /// Returns `false` without touching current state if the save is
    /// inconsistent; the caller should start fresh instead.
    pub fn restore(&mut self, saved: &SavedGame) -> bool {
        let Ok(target) = Word::new(saved.target_word.as_str()) else {
            return false;
        };
        if saved.attempt_count >= MAX_ATTEMPTS || saved.active_row != saved.attempt_count {
            return false;
        }

        let mut attempts = Vec::new();
        let mut current_input = String::new();

        for (i, entry) in saved.attempts.iter().enumerate() {
            if let Ok(word) = Word::new(entry.as_str()) {
                attempts.push(word);
                continue;
            }
            // Only the last entry may be a partial row
            let is_last = i + 1 == saved.attempts.len();
            let partial = entry.to_lowercase();
            if is_last
                && partial.len() < WORD_LEN
                && partial.chars().all(|c| c.is_ascii_lowercase())
            {
                current_input = partial;
            } else {
                return false;
            }
        }

        // Saves exist only for running games, so the completed rows must
        // match the counter and cannot already contain the answer
        if attempts.len() != saved.attempt_count || attempts.contains(&target) {
            return false;
        }

        self.game = Some(GameState {
            target,
            attempts,
            attempt_count: saved.attempt_count,
            active_row: saved.active_row,
            current_input,
        });
        self.status = Status::InProgress;
        true
    }
}
