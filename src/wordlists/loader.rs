//! Word list loading utilities
//!
//! Word lists come either as a JSON array of strings (`*.json`) or as plain
//! text with one word per line.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for unreadable word list files
#[derive(Debug)]
pub enum WordListError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read word list: {e}"),
            Self::Json(e) => write!(f, "word list is not a JSON array of strings: {e}"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for WordListError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Load words from a file
///
/// Files ending in `.json` are parsed as a JSON array of strings; anything
/// else is read line by line. Invalid entries are skipped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Json` if a `.json` file is malformed.
///
/// # Examples
/// ```no_run
/// use wordle_guesser::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        words_from_json(&content)?
    } else {
        words_from_lines(&content)
    };

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a JSON array of strings into words
///
/// # Errors
///
/// Returns a `serde_json::Error` if `content` is not an array of strings.
pub fn words_from_json(content: &str) -> Result<Vec<Word>, serde_json::Error> {
    let entries: Vec<String> = serde_json::from_str(content)?;
    Ok(collect_words(entries.iter().map(String::as_str)))
}

/// Parse newline-delimited text into words, ignoring blank lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    collect_words(content.lines().map(str::trim).filter(|line| !line.is_empty()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_guesser::wordlists::loader::words_from_slice;
/// use wordle_guesser::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    collect_words(slice.iter().copied())
}

/// Validate entries, dropping invalid ones and repeats while keeping order
fn collect_words<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        match Word::new(entry) {
            Ok(word) => {
                if seen.insert(word.clone()) {
                    words.push(word);
                }
            }
            Err(e) => {
                log::debug!("skipping {entry:?}: {e}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::warn!("skipped {skipped} invalid word list entries");
    }
    words
}
