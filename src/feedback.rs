//! Feedback calculation for Wordle guesses.
//!
//! This module paints a guess against a hidden word, producing the per-letter
//! status vector (correct / elsewhere / reject) the game would show.

use crate::word::{letter_index, Word, ALPHABET_SIZE};
use crate::WORD_LENGTH;

/// Result for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter, at this occurrence, is not in the hidden word (gray)
    Reject,
    /// Letter in the exact position (green)
    Correct,
    /// Letter present but belongs elsewhere (gold)
    Elsewhere,
}

impl LetterStatus {
    pub fn to_char(self) -> char {
        match self {
            LetterStatus::Correct => 'C',
            LetterStatus::Elsewhere => 'E',
            LetterStatus::Reject => 'R',
        }
    }

    pub fn to_emoji(self) -> char {
        match self {
            LetterStatus::Correct => '🟩',
            LetterStatus::Elsewhere => '🟨',
            LetterStatus::Reject => '⬛',
        }
    }

    /// Parse from a character: C/G/2 correct, E/Y/1 elsewhere, R/X/B/0 reject.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' | 'G' | '2' => Some(LetterStatus::Correct),
            'E' | 'Y' | '1' => Some(LetterStatus::Elsewhere),
            'R' | 'X' | 'B' | '0' => Some(LetterStatus::Reject),
            _ => None,
        }
    }

    fn digit(self) -> u8 {
        match self {
            LetterStatus::Reject => 0,
            LetterStatus::Elsewhere => 1,
            LetterStatus::Correct => 2,
        }
    }
}

/// Status vector aligned index-for-index with the guess that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(pub [LetterStatus; WORD_LENGTH]);

impl Feedback {
    pub const ALL_CORRECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Total number of distinct feedback vectors (3^5)
    pub const NUM_PATTERNS: usize = 243;

    pub fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Paint `guess` against `hidden`.
    ///
    /// Positional hits are marked first. Remaining guess letters are then
    /// scanned left to right and marked elsewhere while the hidden word still
    /// has unclaimed copies of that letter; once every copy is claimed by a
    /// correct or earlier elsewhere mark, further copies are rejected.
    pub fn calculate(guess: &Word, hidden: &Word) -> Self {
        let guess = guess.letters();
        let hidden = hidden.letters();

        let mut statuses = [LetterStatus::Reject; WORD_LENGTH];
        let mut unclaimed = [0u8; ALPHABET_SIZE];

        for i in 0..WORD_LENGTH {
            if guess[i] == hidden[i] {
                statuses[i] = LetterStatus::Correct;
            } else {
                unclaimed[letter_index(hidden[i])] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if statuses[i] != LetterStatus::Correct {
                let idx = letter_index(guess[i]);
                if unclaimed[idx] > 0 {
                    statuses[i] = LetterStatus::Elsewhere;
                    unclaimed[idx] -= 1;
                }
            }
        }

        Self(statuses)
    }

    pub fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Base-3 encoding in `0..NUM_PATTERNS`, first position least significant.
    pub fn index(&self) -> usize {
        self.0
            .iter()
            .rev()
            .fold(0usize, |acc, s| acc * 3 + s.digit() as usize)
    }

    pub fn is_win(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Parse a vector like "CERRR", "gybbb" or "21000".
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != WORD_LENGTH {
            return None;
        }
        let statuses: Option<Vec<_>> = s.chars().map(LetterStatus::from_char).collect();
        let arr: [LetterStatus; WORD_LENGTH] = statuses?.try_into().ok()?;
        Some(Self(arr))
    }

    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for s in &self.0 {
            write!(f, "{}", s.to_char())?;
        }
        Ok(())
    }
}
