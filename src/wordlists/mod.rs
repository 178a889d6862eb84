//! Word lists for the guesser
//!
//! Provides the embedded default list and loaders for word list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{WordListError, load_from_file, words_from_slice};
