//! Five-letter words over the uppercase A-Z alphabet.
//!
//! Every word entering the engine goes through [`Word::parse`], so the
//! feedback and filter code can index letters without re-checking them.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::WORD_LENGTH;

/// Size of the alphabet words are drawn from.
pub const ALPHABET_SIZE: usize = 26;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("expected a word of length {}, found \"{word}\" of length {length}", WORD_LENGTH)]
    InvalidLength { word: String, length: usize },
    #[error("word \"{word}\" contains '{letter}', which is not a letter A-Z")]
    InvalidLetter { word: String, letter: char },
}

/// An immutable, validated five-letter word stored as uppercase ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse and validate a word. Lowercase input is uppercased.
    pub fn parse(s: &str) -> Result<Self, WordError> {
        let trimmed = s.trim();
        let length = trimmed.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength {
                word: trimmed.to_string(),
                length,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(trimmed.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::InvalidLetter {
                    word: trimmed.to_string(),
                    letter: c,
                });
            }
            *slot = c.to_ascii_uppercase() as u8;
        }

        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    pub fn letter(&self, k: usize) -> u8 {
        self.0[k]
    }

    /// Number of occurrences of `letter` in this word.
    #[inline]
    pub fn count(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&l| l == letter).count()
    }

    #[inline]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Occurrence count of every letter, indexed by `letter - b'A'`.
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &l in &self.0 {
            counts[letter_index(l)] += 1;
        }
        counts
    }

    pub fn has_repeated_letters(&self) -> bool {
        self.letter_counts().iter().any(|&c| c > 1)
    }

    /// True when no letter occurs more than once.
    pub fn is_nrl(&self) -> bool {
        !self.has_repeated_letters()
    }
}

/// Alphabet index of an uppercase ASCII letter.
#[inline]
pub fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|&l| l as char).collect();
        f.pad(&s)
    }
}

/// Keep only the words without repeated letters, preserving order.
pub fn remove_non_nrl(words: &[Word]) -> Vec<Word> {
    words.iter().copied().filter(Word::is_nrl).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uppercases() {
        let word = Word::parse("crane").unwrap();
        assert_eq!(word.to_string(), "CRANE");
        assert_eq!(word, "CRANE".parse::<Word>().unwrap());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            Word::parse("CRANES"),
            Err(WordError::InvalidLength {
                word: "CRANES".to_string(),
                length: 6
            })
        );
        assert!(matches!(
            Word::parse("CR4NE"),
            Err(WordError::InvalidLetter { letter: '4', .. })
        ));
        assert!(matches!(
            Word::parse("CRÄNE"),
            Err(WordError::InvalidLetter { letter: 'Ä', .. })
        ));
    }

    #[test]
    fn repeated_letters() {
        assert!(Word::parse("CRANE").unwrap().is_nrl());
        assert!(Word::parse("SPEED").unwrap().has_repeated_letters());
        assert_eq!(Word::parse("SPEED").unwrap().count(b'E'), 2);
    }

    #[test]
    fn nrl_subset_keeps_order() {
        let words: Vec<Word> = ["SPEED", "CRANE", "LLAMA", "SLATE"]
            .iter()
            .map(|w| w.parse().unwrap())
            .collect();
        let nrl = remove_non_nrl(&words);
        assert_eq!(nrl, vec![words[1], words[3]]);
    }
}
