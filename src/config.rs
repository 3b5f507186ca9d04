//! Search configuration.
//!
//! Each knob is independent: which hidden words to sample, which guesses to
//! score, which list to measure reduction against, which filter to run and
//! which statistic to rank by.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::filter::FilterMode;
use crate::search::WordPools;
use crate::word::{remove_non_nrl, Word};

/// How the hidden-word sample is drawn from the common pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleStrategy {
    /// Every common word is treated as a possible hidden word.
    #[default]
    Full,
    /// `size` distinct common words drawn with a seeded generator.
    Random { size: usize, seed: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPool {
    #[default]
    Legal,
    NoRepeatedLetters,
}

/// The list whose shrinkage is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceList {
    #[default]
    Common,
    /// Legal words consistent with the moves played so far.
    Legal,
    /// Legal words without repeated letters.
    NoRepeatedLetters,
}

/// Statistic guesses are ranked by. Lower is better for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    Mean,
    WorstCase,
}

#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub sample: SampleStrategy,
    pub guesses: GuessPool,
    pub reference: ReferenceList,
    pub filter: FilterMode,
    pub metric: Metric,
}

/// The three word lists a search runs over.
#[derive(Debug, Clone)]
pub struct Selection {
    pub hidden: Vec<Word>,
    pub guesses: Vec<Word>,
    pub reference: Vec<Word>,
}

impl SampleStrategy {
    pub fn draw(&self, pool: &[Word]) -> Vec<Word> {
        match *self {
            SampleStrategy::Random { size, seed } if size < pool.len() => {
                let mut rng = StdRng::seed_from_u64(seed);
                pool.choose_multiple(&mut rng, size).copied().collect()
            }
            _ => pool.to_vec(),
        }
    }
}

impl SearchConfig {
    pub fn resolve(&self, pools: &WordPools) -> Selection {
        let hidden = self.sample.draw(pools.common());

        let guesses = match self.guesses {
            GuessPool::Legal => pools.legal().to_vec(),
            GuessPool::NoRepeatedLetters => remove_non_nrl(pools.legal()),
        };

        let reference = match self.reference {
            ReferenceList::Common => pools.common().to_vec(),
            ReferenceList::Legal => pools.candidates().to_vec(),
            ReferenceList::NoRepeatedLetters => remove_non_nrl(pools.candidates()),
        };

        debug!(
            "resolved {:?}: {} hidden, {} guesses, {} reference",
            self,
            hidden.len(),
            guesses.len(),
            reference.len()
        );

        Selection {
            hidden,
            guesses,
            reference,
        }
    }
}
