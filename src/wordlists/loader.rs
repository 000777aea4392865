//! Word list loading
//!
//! Loads candidate target words from a file or converts the embedded list.
//! A file that cannot be read, or that yields no usable words at all, is a
//! reportable error; individual bad lines are skipped.

use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error loading a word list
#[derive(Debug)]
pub enum LoadError {
    /// The backing resource is missing or unreadable
    Io(io::Error),
    /// The resource was read but contained no valid 5-letter words
    Malformed,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
            Self::Malformed => write!(f, "Word list contains no valid 5-letter words"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Load words from a file, one word per line
///
/// Blank lines are ignored and invalid entries are skipped with a warning.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::Malformed` if it yields no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    log::warn!("Skipping word list entry {trimmed:?}: {err}");
                    None
                }
            }
        })
        .collect();

    if words.is_empty() {
        return Err(LoadError::Malformed);
    }

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
