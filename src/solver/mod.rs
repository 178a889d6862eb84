//! Guessing engine
//!
//! Candidate filtering and guess ranking.

mod config;
mod filter;
pub mod placement;
mod ranker;

pub use config::GuesserConfig;
pub use filter::{CandidateFilter, FilterState, is_consistent};
pub use placement::{CommonPlacement, Disabled, PlacementScore, PlacementStrategy};
pub use ranker::{Difficulty, GuessRanker, ScoredGuess};
