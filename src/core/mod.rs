//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero I/O. All types
//! here are pure, testable, and have clear rules.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict, letter_states};
pub use word::{WORD_LEN, Word, WordError};
