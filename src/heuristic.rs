//! Letter-frequency scoring.
//!
//! A cheap approximate ordering: words made of letters that are common across
//! the list score higher. Each letter counts once per word, however often it
//! repeats. This does not measure reducing power; use [`crate::search`] for that.

use crate::word::{letter_index, Word, ALPHABET_SIZE};

/// Number of words each letter appears in.
pub fn letter_frequencies(words: &[Word]) -> [u32; ALPHABET_SIZE] {
    let mut freq = [0u32; ALPHABET_SIZE];
    for word in words {
        for (idx, &count) in word.letter_counts().iter().enumerate() {
            if count > 0 {
                freq[idx] += 1;
            }
        }
    }
    freq
}

/// Sum of the frequencies of the word's distinct letters.
pub fn heuristic_score(word: &Word, freq: &[u32; ALPHABET_SIZE]) -> u32 {
    let mut seen = [false; ALPHABET_SIZE];
    let mut score = 0;
    for &letter in word.letters() {
        let idx = letter_index(letter);
        if !seen[idx] {
            seen[idx] = true;
            score += freq[idx];
        }
    }
    score
}

/// Words with their scores, highest first, ties in alphabetical order.
pub fn rank_by_letter_frequency(words: &[Word]) -> Vec<(Word, u32)> {
    let freq = letter_frequencies(words);
    let mut scored: Vec<(Word, u32)> = words
        .iter()
        .map(|w| (*w, heuristic_score(w, &freq)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    scored
}
