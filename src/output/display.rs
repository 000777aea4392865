//! Display functions for command results

use crate::core::{Feedback, Verdict, Word};
use colored::Colorize;

/// Render feedback as an emoji row like "🟩🟨⬜🟩🟨"
#[must_use]
pub fn feedback_emoji(feedback: Feedback) -> String {
    feedback
        .verdicts()
        .iter()
        .map(|verdict| match verdict {
            Verdict::Correct => '🟩',
            Verdict::Present => '🟨',
            Verdict::Absent => '⬜',
        })
        .collect()
}

/// Print the feedback a guess would receive against a target
pub fn print_check_result(guess: &Word, target: &Word) {
    let feedback = Feedback::of(guess, target);

    let letters: Vec<String> = guess
        .text()
        .to_uppercase()
        .chars()
        .zip(feedback.verdicts())
        .map(|(letter, verdict)| match verdict {
            Verdict::Correct => letter.to_string().green().bold().to_string(),
            Verdict::Present => letter.to_string().yellow().bold().to_string(),
            Verdict::Absent => letter.to_string().dimmed().to_string(),
        })
        .collect();

    println!(
        "{} {}  {}",
        letters.join(" "),
        feedback_emoji(feedback),
        if feedback.is_win() {
            "correct!".green().bold().to_string()
        } else {
            String::new()
        }
    );
}
