//! Terminal output formatting
//!
//! Display utilities for one-shot CLI results.

pub mod display;

pub use display::{feedback_emoji, print_check_result};
