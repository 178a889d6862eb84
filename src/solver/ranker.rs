//! Ranking candidates to pick the next guess
//!
//! Candidates are ordered best-first by a composite key:
//! 1. diversity: distinct letters, minus already-used letters unless in hard mode
//! 2. placement: the configured [`PlacementStrategy`] score
//! 3. a random tie-break, drawn fresh for every candidate on every call

use super::placement::{PlacementScore, PlacementStrategy};
use crate::core::{Feedback, Word};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Scoring variant for the diversity key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Letters already guessed count against a word
    #[default]
    Normal,
    /// Raw distinct-letter count, no penalty for reuse
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn from_hard_flag(hard: bool) -> Self {
        if hard { Self::Hard } else { Self::Normal }
    }
}

/// A candidate together with its ranking key
#[derive(Debug, Clone, Copy)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    pub diversity: usize,
    pub placement: usize,
    pub tie_break: f64,
}

impl ScoredGuess<'_> {
    /// Ordering where the better guess compares greater
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.diversity
            .cmp(&other.diversity)
            .then(self.placement.cmp(&other.placement))
            .then(self.tie_break.total_cmp(&other.tie_break))
    }
}

/// Picks the best next guess from a candidate set
pub struct GuessRanker<R = StdRng> {
    difficulty: Difficulty,
    placement: PlacementStrategy,
    rng: R,
}

impl GuessRanker<StdRng> {
    /// Ranker with tie-breaks drawn from an OS-seeded generator
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Ranker with reproducible tie-breaks
    #[must_use]
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GuessRanker<R> {
    /// Ranker drawing tie-breaks from `rng`
    #[must_use]
    pub fn with_rng(difficulty: Difficulty, rng: R) -> Self {
        Self {
            difficulty,
            placement: PlacementStrategy::Disabled,
            rng,
        }
    }

    /// Replace the placement strategy
    #[must_use]
    pub fn with_placement(mut self, placement: PlacementStrategy) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn placement(&self) -> PlacementStrategy {
        self.placement
    }

    /// Number of distinct letters in `word`, less those in `used` unless hard
    #[must_use]
    pub fn diversity_score(&self, word: &Word, used: &FxHashSet<u8>) -> usize {
        diversity(self.difficulty, word, used)
    }

    /// Score every candidate and sort best-first
    ///
    /// Draws a new tie-break for each candidate, so two calls on the same
    /// input may order equal-scoring words differently.
    pub fn rank<'a>(
        &mut self,
        candidates: &'a [Word],
        used: &FxHashSet<u8>,
        feedback: &Feedback,
    ) -> Vec<ScoredGuess<'a>> {
        let placement = self.placement;
        let difficulty = self.difficulty;
        let placement_scores: Vec<usize> = if placement.is_enabled() {
            candidates
                .par_iter()
                .map(|word| placement.score(word, candidates, feedback))
                .collect()
        } else {
            vec![0; candidates.len()]
        };

        let mut scored: Vec<ScoredGuess<'a>> = candidates
            .iter()
            .zip(placement_scores)
            .map(|(word, placement)| ScoredGuess {
                word,
                diversity: diversity(difficulty, word, used),
                placement,
                tie_break: self.rng.random::<f64>(),
            })
            .collect();

        scored.sort_by(|a, b| b.key_cmp(a));
        scored
    }

    /// The top-ranked candidate, or `None` if there are no candidates
    pub fn best<'a>(
        &mut self,
        candidates: &'a [Word],
        used: &FxHashSet<u8>,
        feedback: &Feedback,
    ) -> Option<&'a Word> {
        let best = self.rank(candidates, used, feedback).first().map(|s| s.word);
        if let Some(word) = best {
            log::trace!(
                "ranked {} candidates, picked {word} ({:?})",
                candidates.len(),
                self.difficulty
            );
        }
        best
    }
}

fn diversity(difficulty: Difficulty, word: &Word, used: &FxHashSet<u8>) -> usize {
    let distinct = word.distinct_letters();
    match difficulty {
        Difficulty::Hard => distinct.len(),
        Difficulty::Normal => distinct.len() - distinct.intersection(used).count(),
    }
}
