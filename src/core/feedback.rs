//! Guess feedback computation
//!
//! Feedback classifies every letter of a guess against the target:
//! - `Correct` - right letter, right position (green)
//! - `Present` - letter in the word, wrong position (yellow)
//! - `Absent`  - letter not in the word, accounting for consumed duplicates (gray)

use super::{WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Per-letter feedback classification
///
/// The derived ordering (`Absent < Present < Correct`) is the precedence used
/// when aggregating keyboard state across guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

/// Feedback for one submitted guess, one verdict per position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([Verdict; WORD_LEN]);

impl Feedback {
    /// Compute the feedback when `guess` is guessed and `target` is the answer
    ///
    /// Implements standard Wordle duplicate-letter rules:
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove those letters
    ///    from the target's available pool
    /// 2. Second pass, left to right: mark `Present` only while the letter has
    ///    occurrences left in the pool, consuming one per mark; otherwise `Absent`
    ///
    /// The left-to-right consumption order means a letter guessed twice but
    /// present once marks only its first unmatched occurrence `Present`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::of(&guess, &target);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(feedback.verdicts()[2], Verdict::Correct);
    /// assert_eq!(feedback.verdicts()[4], Verdict::Correct);
    /// ```
    #[must_use]
    pub fn of(guess: &Word, target: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LEN];
        let mut available = target.char_counts();

        // First pass: exact position matches consume the target letter
        // Allow: index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == target.chars()[i] {
                result[i] = Verdict::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: left-to-right, mark Present from the remaining pool
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == Verdict::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = Verdict::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Get the per-position verdicts
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LEN] {
        &self.0
    }

    /// Check if every position is `Correct` (winning guess)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }
}

/// Aggregate the best verdict seen per letter across all submitted guesses
///
/// Drives keyboard recoloring: a letter ever marked `Correct` stays `Correct`
/// even if a later guess marks it `Absent` at another position. Letters never
/// guessed are absent from the map.
#[must_use]
pub fn letter_states(attempts: &[Word], target: &Word) -> FxHashMap<u8, Verdict> {
    let mut states: FxHashMap<u8, Verdict> = FxHashMap::default();

    for guess in attempts {
        let feedback = Feedback::of(guess, target);
        for (&letter, &verdict) in guess.chars().iter().zip(feedback.verdicts()) {
            states
                .entry(letter)
                .and_modify(|best| *best = (*best).max(verdict))
                .or_insert(verdict);
        }
    }

    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = Feedback::of(&word("abcde"), &word("fghij"));
        assert_eq!(feedback.verdicts(), &[Absent; 5]);
        assert!(!feedback.is_win());
    }

    #[test]
    fn feedback_all_correct_is_win() {
        let feedback = Feedback::of(&word("crane"), &word("crane"));
        assert_eq!(feedback.verdicts(), &[Correct; 5]);
        assert!(feedback.is_win());
    }

    #[test]
    fn feedback_correct_iff_position_matches() {
        // Every position agrees with direct comparison, whatever the rest does
        let guess = word("stare");
        let target = word("slate");
        let feedback = Feedback::of(&guess, &target);

        for i in 0..5 {
            assert_eq!(
                feedback.verdicts()[i] == Correct,
                guess.chars()[i] == target.chars()[i]
            );
        }
    }

    #[test]
    fn feedback_classic_example() {
        // CRANE vs SLATE: C(gray) R(gray) A(green) N(gray) E(green)
        let feedback = Feedback::of(&word("crane"), &word("slate"));
        assert_eq!(feedback.verdicts(), &[Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn feedback_duplicate_guess_letters_consume_pool() {
        // MOTTO vs ROBOT
        // M(gray), O(green, position matches), T(yellow, consumes the only
        // unmatched T), T(gray, pool exhausted), O(yellow, second target O)
        let feedback = Feedback::of(&word("motto"), &word("robot"));
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Correct, Present, Absent, Present]
        );
    }

    #[test]
    fn feedback_duplicate_letters_yellow() {
        // SPEED vs ERASE: S(yellow) P(gray) E(yellow) E(yellow) D(gray)
        // ERASE has two E's, so both guessed E's go yellow
        let feedback = Feedback::of(&word("speed"), &word("erase"));
        assert_eq!(
            feedback.verdicts(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_green_takes_priority_over_yellow() {
        // ROBOT vs FLOOR: R(yellow) O(yellow) B(gray) O(green) T(gray)
        // The positionally-correct O claims its letter before the first O scans
        let feedback = Feedback::of(&word("robot"), &word("floor"));
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn feedback_single_target_letter_marks_first_occurrence_only() {
        // EERIE vs OLDEN: one E in the target, three in the guess.
        // Only the leftmost unmatched E goes yellow.
        let feedback = Feedback::of(&word("eerie"), &word("olden"));
        assert_eq!(
            feedback.verdicts(),
            &[Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn verdict_ordering_matches_precedence() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Present.max(Correct), Correct);
    }

    #[test]
    fn letter_states_tracks_best_verdict() {
        let target = word("apple");
        let attempts = vec![word("arise"), word("pleat")];
        let states = letter_states(&attempts, &target);

        assert_eq!(states.get(&b'a'), Some(&Correct)); // green in "arise"
        assert_eq!(states.get(&b'p'), Some(&Present)); // yellow in "pleat"
        assert_eq!(states.get(&b'r'), Some(&Absent));
        assert_eq!(states.get(&b'z'), None); // never guessed
    }

    #[test]
    fn letter_states_never_downgrades() {
        // L goes green via "ample"; a later guess with L in the wrong
        // spot must not pull it back to yellow.
        let target = word("apple");
        let attempts = vec![word("ample"), word("lurid")];
        let states = letter_states(&attempts, &target);

        assert_eq!(states.get(&b'l'), Some(&Correct));
    }

    #[test]
    fn letter_states_empty_without_attempts() {
        let states = letter_states(&[], &word("apple"));
        assert!(states.is_empty());
    }
}
