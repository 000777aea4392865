//! Interactive TUI game
//!
//! The terminal front end that drives the engine and owns persistence timing.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
