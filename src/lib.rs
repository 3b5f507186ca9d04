//! # Wordle Ranker
//!
//! Ranks candidate Wordle guesses by their reducing power: the average number
//! of candidate words left after the guess is played, taken over a sample of
//! possible hidden words. Lower is better.
//!
//! Scoring is parallel across guesses; the word lists are shared read-only.

pub mod config;
pub mod feedback;
pub mod filter;
pub mod heuristic;
pub mod search;
pub mod word;
pub mod wordlist;

pub use config::{GuessPool, Metric, ReferenceList, SampleStrategy, SearchConfig};
pub use feedback::{Feedback, LetterStatus};
pub use filter::{filter_guess, filter_guess_nrl, filter_word_list, Constraint, FilterMode};
pub use search::{GuessScore, Ranking, SearchEngine, SearchError, WordPools};
pub use word::{Word, WordError};
pub use wordlist::{load_word_list, parse_word_list, WordListError};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;
