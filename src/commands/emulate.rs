//! Self-play against a known secret word
//!
//! The oracle answers each guess and the filter narrows until the game ends.

use crate::core::{Feedback, FeedbackOracle, OracleRule, Word, WordError};
use crate::solver::{CandidateFilter, FilterState, GuesserConfig};
use rand::Rng;

/// Guess limit when none is given; well past a real game's six so slow
/// convergence still shows up in the results
pub const DEFAULT_MAX_GUESSES: usize = 32;

/// Configuration for emulating one game
pub struct EmulateConfig {
    pub secret: String,
    pub max_guesses: usize,
    pub rule: OracleRule,
}

impl EmulateConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: DEFAULT_MAX_GUESSES,
            rule: OracleRule::Simple,
        }
    }
}

/// How an emulated game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every position came back correct
    Solved,
    /// The candidate list ran dry first
    Exhausted,
    /// Hit the guess limit
    GaveUp,
}

/// A single guess step in the game
#[derive(Debug, Clone)]
pub struct EmulationStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of emulating a game
#[derive(Debug, Clone)]
pub struct EmulationResult {
    pub secret: Word,
    pub steps: Vec<EmulationStep>,
    pub outcome: Outcome,
}

impl EmulationResult {
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }
}

/// Emulate a game for the configured secret over `words`
///
/// # Errors
///
/// Returns `WordError` if the secret is not a valid five-letter word.
pub fn emulate_word(
    config: &EmulateConfig,
    words: Vec<Word>,
    guesser: &GuesserConfig,
) -> Result<EmulationResult, WordError> {
    let secret = Word::new(config.secret.trim())?;
    let oracle = FeedbackOracle::with_rule(secret, config.rule);
    let mut filter = CandidateFilter::from_config(words, guesser);

    Ok(run_emulation(&mut filter, &oracle, config.max_guesses))
}

/// Play `filter` against `oracle` until the game ends or `max_guesses` is reached
pub fn run_emulation<R: Rng>(
    filter: &mut CandidateFilter<R>,
    oracle: &FeedbackOracle,
    max_guesses: usize,
) -> EmulationResult {
    let mut steps = Vec::new();

    let outcome = loop {
        if steps.len() >= max_guesses {
            break Outcome::GaveUp;
        }

        let candidates_before = filter.len();
        let Some(guess) = filter.next_guess() else {
            break Outcome::Exhausted;
        };

        let feedback = oracle.evaluate(&guess);
        filter.apply_feedback(feedback);

        steps.push(EmulationStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: filter.len(),
        });

        match filter.state() {
            FilterState::Resolved => break Outcome::Solved,
            FilterState::Exhausted => break Outcome::Exhausted,
            FilterState::AwaitingGuess | FilterState::AwaitingFeedback => {}
        }
    };

    log::debug!(
        "emulated {}: {outcome:?} after {} guesses",
        oracle.secret(),
        steps.len()
    );

    EmulationResult {
        secret: oracle.secret().clone(),
        steps,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Difficulty, GuessRanker};
    use crate::wordlists::{WORDS, words_from_slice};

    fn seeded(difficulty: Difficulty) -> GuesserConfig {
        GuesserConfig::new(difficulty).with_seed(Some(2024))
    }

    #[test]
    fn emulate_solves_word_in_list() {
        let config = EmulateConfig::new("crane".to_string());
        let result = emulate_word(&config, words_from_slice(WORDS), &seeded(Difficulty::Normal))
            .unwrap();

        assert_eq!(result.outcome, Outcome::Solved);
        assert!(result.solved());
        let last = result.steps.last().unwrap();
        assert_eq!(last.guess.text(), "crane");
        assert!(last.feedback.is_solved());
    }

    #[test]
    fn emulate_records_monotonic_history() {
        let config = EmulateConfig::new("slate".to_string());
        let result =
            emulate_word(&config, words_from_slice(WORDS), &seeded(Difficulty::Hard)).unwrap();

        assert!(!result.steps.is_empty());
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(result.guesses(), result.steps.len());
    }

    #[test]
    fn emulate_invalid_secret_is_error() {
        let config = EmulateConfig::new("cranes".to_string());
        let result = emulate_word(&config, words_from_slice(WORDS), &GuesserConfig::default());
        assert!(matches!(result, Err(WordError::InvalidLength(6))));
    }

    #[test]
    fn secret_missing_from_list_exhausts() {
        let words = words_from_slice(&["crane", "slate", "irate"]);
        let config = EmulateConfig::new("zzzzz".to_string());
        let result = emulate_word(&config, words, &seeded(Difficulty::Normal)).unwrap();

        assert_eq!(result.outcome, Outcome::Exhausted);
    }

    #[test]
    fn guess_limit_gives_up() {
        let words = words_from_slice(&["crane", "slate", "irate", "grate", "crate"]);
        let mut config = EmulateConfig::new("grate".to_string());
        config.max_guesses = 0;

        let result = emulate_word(&config, words, &seeded(Difficulty::Normal)).unwrap();
        assert_eq!(result.outcome, Outcome::GaveUp);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn strict_rule_also_solves() {
        let mut config = EmulateConfig::new("geese".to_string());
        config.rule = OracleRule::Strict;
        let words = words_from_slice(&["geese", "eerie", "crane", "sheep", "slate"]);

        let result = emulate_word(&config, words, &seeded(Difficulty::Normal)).unwrap();
        assert_eq!(result.outcome, Outcome::Solved);
    }

    #[test]
    fn run_emulation_with_custom_ranker() {
        let words = words_from_slice(&["crane", "build"]);
        let mut filter = CandidateFilter::with_ranker(words, GuessRanker::seeded(Difficulty::Hard, 1));
        let oracle = FeedbackOracle::new(Word::new("build").unwrap());

        let result = run_emulation(&mut filter, &oracle, 6);
        assert!(result.solved());
        assert!(result.guesses() <= 2);
    }
}
