//! Reading word lists from newline-delimited text.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::word::{Word, WordError};

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("unable to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: WordError,
    },
}

/// Parse one word per line. Blank lines and lines starting with `#` are
/// skipped, words are uppercased and duplicates dropped (first one wins).
pub fn parse_word_list(text: &str) -> Result<Vec<Word>, WordListError> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let word = Word::parse(line).map_err(|source| WordListError::InvalidWord {
            line: i + 1,
            source,
        })?;
        if seen.insert(word) {
            words.push(word);
        }
    }

    Ok(words)
}

pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let text = fs::read_to_string(&path)?;
    let words = parse_word_list(&text)?;
    debug!("loaded {} words from {}", words.len(), path.as_ref().display());
    Ok(words)
}

/// Drop the common words that are not legal guesses.
pub fn retain_legal(common: &[Word], legal: &[Word]) -> Vec<Word> {
    let legal: HashSet<&Word> = legal.iter().collect();
    common.iter().filter(|w| legal.contains(w)).copied().collect()
}

/// Order `words` by their position in the usage-ordered list `usage`.
/// Words missing from `usage` go last, alphabetically.
pub fn sort_by_usage(words: &[Word], usage: &[Word]) -> Vec<Word> {
    let rank: HashMap<&Word, usize> = usage.iter().enumerate().map(|(i, w)| (w, i)).collect();
    let mut sorted = words.to_vec();
    sorted.sort_by_key(|w| (rank.get(w).copied().unwrap_or(usize::MAX), *w));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_duplicates() {
        let words = parse_word_list("# legal words\ncrane\n\nSLATE\nCrane\n").unwrap();
        let expected: Vec<Word> = vec!["CRANE".parse().unwrap(), "SLATE".parse().unwrap()];
        assert_eq!(words, expected);
    }

    #[test]
    fn parse_reports_line_of_bad_word() {
        let err = parse_word_list("CRANE\nSLATES\n").unwrap_err();
        assert!(matches!(err, WordListError::InvalidWord { line: 2, .. }));
    }

    #[test]
    fn usage_order() {
        let words = parse_word_list("TRACE\nCRANE\nZESTY\nSLATE").unwrap();
        let usage = parse_word_list("SLATE\nCRANE\nTRACE").unwrap();
        let sorted: Vec<String> = sort_by_usage(&words, &usage)
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(sorted, ["SLATE", "CRANE", "TRACE", "ZESTY"]);
    }
}
