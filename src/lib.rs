//! Wordle Guesser
//!
//! A guessing assistant for five-letter word games: it keeps the candidate words
//! consistent with the feedback so far and proposes the next guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guesser::core::{FeedbackOracle, Word};
//! use wordle_guesser::solver::{CandidateFilter, Difficulty, GuessRanker};
//! use wordle_guesser::wordlists::{WORDS, words_from_slice};
//!
//! let oracle = FeedbackOracle::new(Word::new("crane").unwrap());
//! let ranker = GuessRanker::seeded(Difficulty::Normal, 7);
//! let mut filter = CandidateFilter::with_ranker(words_from_slice(WORDS), ranker);
//!
//! while let Some(guess) = filter.next_guess() {
//!     let feedback = oracle.evaluate(&guess);
//!     filter.apply_feedback(feedback);
//!     if feedback.is_solved() {
//!         break;
//!     }
//! }
//! assert_eq!(filter.last_guess().unwrap().text(), "crane");
//! ```

// Core domain types
pub mod core;

// Candidate filtering and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
