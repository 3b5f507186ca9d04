//! Guess ranking by reducing power.
//!
//! For every candidate guess the engine plays it against each sampled hidden
//! word, filters the reference list with the resulting feedback, and averages
//! how many words survive. A good guess leaves few words behind.
//!
//! Feedback depends only on the (guess, hidden) pair and the surviving count
//! depends only on the (guess, feedback) pair, so each guess needs at most
//! one pass over the reference list per distinct feedback vector.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use log::{debug, info, warn};
use rayon::prelude::*;
use thiserror::Error;

use crate::config::{Metric, SearchConfig};
use crate::feedback::Feedback;
use crate::filter::{Constraint, FilterMode};
use crate::word::Word;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("the hidden-word sample is empty")]
    EmptySample,
    #[error("no remaining candidates")]
    NoRemainingCandidates,
    #[error("restricted filter requires words without repeated letters, found {word}")]
    RepeatedLetters { word: Word },
}

/// The loaded word lists, read-only for the lifetime of a run.
///
/// `legal` is never narrowed by moves, so guesses that cannot
/// be the answer stay playable. `candidates` and `common` shrink with each
/// move to the words still consistent with the board.
#[derive(Debug, Clone)]
pub struct WordPools {
    legal: Vec<Word>,
    candidates: Vec<Word>,
    common: Vec<Word>,
}

impl WordPools {
    pub fn new(legal: Vec<Word>, common: Vec<Word>) -> Self {
        Self {
            candidates: legal.clone(),
            legal,
            common,
        }
    }

    /// Every word that may be played as a guess.
    pub fn legal(&self) -> &[Word] {
        &self.legal
    }

    /// Legal words consistent with every move played so far.
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Words the hidden word is plausibly drawn from.
    pub fn common(&self) -> &[Word] {
        &self.common
    }

    /// Pools after a move: candidates and common words are reduced to those
    /// consistent with it, the legal guess list is kept whole.
    pub fn after_move(&self, guess: &Word, feedback: &Feedback) -> Result<Self, SearchError> {
        let constraint = Constraint::new(*guess, *feedback);
        let candidates = constraint.filter(&self.candidates, FilterMode::General);
        let common = constraint.filter(&self.common, FilterMode::General);

        debug!(
            "after {guess} {feedback}: {} candidates, {} common",
            candidates.len(),
            common.len()
        );

        if common.is_empty() {
            return Err(SearchError::NoRemainingCandidates);
        }

        Ok(Self {
            legal: self.legal.clone(),
            candidates,
            common,
        })
    }
}

/// Reducing power of one guess over the hidden-word sample.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessScore {
    pub guess: Word,
    /// Mean remaining-list size. `f64::INFINITY` when every sample was anomalous.
    pub average: f64,
    /// Largest remaining-list size seen.
    pub worst: usize,
    /// Number of hidden words that contributed to `average`.
    pub samples: usize,
    /// Hidden words whose own feedback emptied the reference list.
    pub anomalies: Vec<Word>,
}

impl GuessScore {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Mean => self.average,
            Metric::WorstCase if self.samples == 0 => f64::INFINITY,
            Metric::WorstCase => self.worst as f64,
        }
    }

    pub fn is_tainted(&self) -> bool {
        !self.anomalies.is_empty()
    }
}

/// Scored guesses in ascending order of the ranking metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub metric: Metric,
    pub scores: Vec<GuessScore>,
}

impl Ranking {
    pub fn best(&self) -> Option<&GuessScore> {
        self.scores.first()
    }

    pub fn top(&self, n: usize) -> &[GuessScore] {
        &self.scores[..n.min(self.scores.len())]
    }

    /// Total flagged (guess, hidden word) pairs across the ranking.
    pub fn anomaly_count(&self) -> usize {
        self.scores.iter().map(|s| s.anomalies.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Stateless evaluation over an immutable snapshot of word lists.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    hidden: Vec<Word>,
    guesses: Vec<Word>,
    reference: Vec<Word>,
    mode: FilterMode,
}

impl SearchEngine {
    pub fn new(
        hidden: Vec<Word>,
        guesses: Vec<Word>,
        reference: Vec<Word>,
        mode: FilterMode,
    ) -> Result<Self, SearchError> {
        if hidden.is_empty() {
            return Err(SearchError::EmptySample);
        }
        if reference.is_empty() {
            return Err(SearchError::NoRemainingCandidates);
        }
        if mode == FilterMode::NoRepeatedLetters {
            if let Some(word) = guesses.iter().chain(&reference).find(|w| !w.is_nrl()) {
                return Err(SearchError::RepeatedLetters { word: *word });
            }
        }

        Ok(Self {
            hidden,
            guesses,
            reference,
            mode,
        })
    }

    pub fn from_config(pools: &WordPools, config: &SearchConfig) -> Result<Self, SearchError> {
        let selection = config.resolve(pools);
        Self::new(
            selection.hidden,
            selection.guesses,
            selection.reference,
            config.filter,
        )
    }

    pub fn hidden(&self) -> &[Word] {
        &self.hidden
    }

    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    pub fn reference(&self) -> &[Word] {
        &self.reference
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Remaining reference words if `guess` is played and `hidden` is the answer.
    pub fn count_remaining(&self, hidden: &Word, guess: &Word) -> usize {
        let feedback = Feedback::calculate(guess, hidden);
        Constraint::new(*guess, feedback).count_in(&self.reference, self.mode)
    }

    pub fn score(&self, guess: &Word) -> GuessScore {
        let mut remaining: [Option<usize>; Feedback::NUM_PATTERNS] =
            [None; Feedback::NUM_PATTERNS];
        let mut total = 0usize;
        let mut worst = 0usize;
        let mut samples = 0usize;
        let mut anomalies = Vec::new();

        for hidden in &self.hidden {
            let feedback = Feedback::calculate(guess, hidden);
            let count = *remaining[feedback.index()].get_or_insert_with(|| {
                Constraint::new(*guess, feedback).count_in(&self.reference, self.mode)
            });

            if count == 0 {
                warn!("0 remaining: hidden {hidden}, guess {guess} ({feedback})");
                anomalies.push(*hidden);
                continue;
            }

            total += count;
            worst = worst.max(count);
            samples += 1;
        }

        let average = if samples == 0 {
            f64::INFINITY
        } else {
            total as f64 / samples as f64
        };

        GuessScore {
            guess: *guess,
            average,
            worst,
            samples,
            anomalies,
        }
    }

    /// Score every guess in parallel and sort ascending, ties by word.
    pub fn rank(&self, metric: Metric) -> Ranking {
        let done = AtomicUsize::new(0);
        let tick = (self.guesses.len() / 10).max(1);

        info!(
            "ranking {} guesses against {} hidden words and {} reference words",
            self.guesses.len(),
            self.hidden.len(),
            self.reference.len()
        );

        let mut scores: Vec<GuessScore> = self
            .guesses
            .par_iter()
            .map(|guess| {
                let score = self.score(guess);
                let n = done.fetch_add(1, AtomicOrdering::Relaxed) + 1;
                if n % tick == 0 {
                    info!("scored {n}/{}", self.guesses.len());
                }
                score
            })
            .collect();

        scores.sort_by(|a, b| compare(a, b, metric));

        let ranking = Ranking { metric, scores };
        if ranking.anomaly_count() > 0 {
            warn!(
                "{} guess/hidden pairs left no candidates; the reference list is missing hidden words",
                ranking.anomaly_count()
            );
        }
        ranking
    }
}

fn compare(a: &GuessScore, b: &GuessScore, metric: Metric) -> Ordering {
    a.value(metric)
        .total_cmp(&b.value(metric))
        .then_with(|| a.average.total_cmp(&b.average))
        .then_with(|| a.guess.cmp(&b.guess))
}
