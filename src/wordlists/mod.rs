//! Word lists for target selection
//!
//! Provides the embedded word list compiled into the binary plus a file loader
//! for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::LoadError;
