//! Candidate filtering: the inverse of [`Feedback::calculate`].
//!
//! Given a guess and the feedback it received, a [`Constraint`] decides
//! whether a candidate word could still be the hidden word. The general
//! check handles repeated letters by comparing mark counts; the restricted
//! check is only sound when neither guess nor candidate repeats a letter.

use crate::feedback::{Feedback, LetterStatus};
use crate::word::{letter_index, Word, ALPHABET_SIZE};
use crate::WORD_LENGTH;

/// Which filter variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Repeated-letter aware count check.
    #[default]
    General,
    /// Presence/absence only. Guess and candidates must have no repeated letters.
    NoRepeatedLetters,
}

/// A guess together with its feedback, with per-letter mark counts precomputed.
#[derive(Debug, Clone)]
pub struct Constraint {
    guess: Word,
    feedback: Feedback,
    /// Correct + elsewhere marks per letter across the whole guess.
    marked: [u8; ALPHABET_SIZE],
}

impl Constraint {
    pub fn new(guess: Word, feedback: Feedback) -> Self {
        let mut marked = [0u8; ALPHABET_SIZE];
        for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
            if status != LetterStatus::Reject {
                marked[letter_index(letter)] += 1;
            }
        }
        Self {
            guess,
            feedback,
            marked,
        }
    }

    pub fn guess(&self) -> &Word {
        &self.guess
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Number of non-reject marks for `letter` in the guess.
    pub fn marked(&self, letter: u8) -> u8 {
        self.marked[letter_index(letter)]
    }

    #[inline]
    pub fn matches_with(&self, word: &Word, mode: FilterMode) -> bool {
        match mode {
            FilterMode::General => self.matches(word),
            FilterMode::NoRepeatedLetters => self.matches_nrl(word),
        }
    }

    /// General check, valid for any guess and candidate.
    pub fn matches(&self, word: &Word) -> bool {
        let guess = self.guess.letters();
        let statuses = self.feedback.statuses();
        let letters = word.letters();

        // A non-correct position can never hold the guess letter.
        for k in 0..WORD_LENGTH {
            let same = letters[k] == guess[k];
            if same != (statuses[k] == LetterStatus::Correct) {
                return false;
            }
        }

        let present = word.letter_counts();
        for k in 0..WORD_LENGTH {
            let idx = letter_index(guess[k]);
            let (marked, present) = (self.marked[idx], present[idx]);
            match statuses[k] {
                LetterStatus::Correct => {}
                LetterStatus::Elsewhere if marked > present => return false,
                LetterStatus::Reject if marked < present => return false,
                _ => {}
            }
        }

        true
    }

    /// Restricted single-pass check for words without repeated letters.
    pub fn matches_nrl(&self, word: &Word) -> bool {
        debug_assert!(self.guess.is_nrl(), "restricted filter on {}", self.guess);
        debug_assert!(word.is_nrl(), "restricted filter on {}", word);

        let guess = self.guess.letters();
        let letters = word.letters();

        for (k, status) in self.feedback.statuses().iter().enumerate() {
            match status {
                LetterStatus::Correct => {
                    if letters[k] != guess[k] {
                        return false;
                    }
                }
                LetterStatus::Elsewhere => {
                    if letters[k] == guess[k] || !word.contains(guess[k]) {
                        return false;
                    }
                }
                LetterStatus::Reject => {
                    if word.contains(guess[k]) {
                        return false;
                    }
                }
            }
        }

        true
    }

    pub fn count_in(&self, words: &[Word], mode: FilterMode) -> usize {
        words.iter().filter(|w| self.matches_with(w, mode)).count()
    }

    pub fn filter(&self, words: &[Word], mode: FilterMode) -> Vec<Word> {
        words
            .iter()
            .filter(|w| self.matches_with(w, mode))
            .copied()
            .collect()
    }
}

/// Whether `word` is still possible after `guess` received `feedback`.
pub fn filter_guess(word: &Word, guess: &Word, feedback: &Feedback) -> bool {
    Constraint::new(*guess, *feedback).matches(word)
}

/// Restricted variant of [`filter_guess`]; both words must be NRL.
pub fn filter_guess_nrl(word: &Word, guess: &Word, feedback: &Feedback) -> bool {
    Constraint::new(*guess, *feedback).matches_nrl(word)
}

/// The ordered sub-list of `words` consistent with `guess` / `feedback`.
pub fn filter_word_list(words: &[Word], guess: &Word, feedback: &Feedback) -> Vec<Word> {
    Constraint::new(*guess, *feedback).filter(words, FilterMode::General)
}

/// How many words of `words` survive if `guess` is played against `hidden`.
pub fn count_remaining(hidden: &Word, guess: &Word, words: &[Word], mode: FilterMode) -> usize {
    let feedback = Feedback::calculate(guess, hidden);
    Constraint::new(*guess, feedback).count_in(words, mode)
}
