//! Wordle Game
//!
//! A Wordle-style word guessing game: six attempts at a hidden five-letter
//! word, with per-letter feedback, keyboard state tracking, and an
//! in-progress game persisted across sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let feedback = Feedback::of(&guess, &target);
//! assert!(!feedback.is_win());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Saved-game storage
pub mod persistence;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
