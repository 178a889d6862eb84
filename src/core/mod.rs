//! Core domain types for the guessing game
//!
//! Words, per-letter feedback, and the oracle that produces feedback for a known secret.
//! Nothing here depends on the solver or on I/O.

mod feedback;
mod oracle;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterStatus};
pub use oracle::{FeedbackOracle, OracleRule};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LEN: usize = 5;
