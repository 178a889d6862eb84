//! Per-position feedback for a guess
//!
//! Feedback is written as one symbol per letter:
//! - ' ' = unset (no information)
//! - 'v' = correct letter in this position
//! - '-' = wrong letter for this position
//! - '+' = letter occurs in the word
//!
//! The symbols double as the text format for interactive entry.

use super::WORD_LEN;
use std::fmt;

/// Status of a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Unset,
    Correct,
    Wrong,
    Contains,
}

impl LetterStatus {
    /// Text symbol for this status
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Unset => ' ',
            Self::Correct => 'v',
            Self::Wrong => '-',
            Self::Contains => '+',
        }
    }

    /// Parse a status from its text symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Self::Unset),
            'v' => Some(Self::Correct),
            '-' => Some(Self::Wrong),
            '+' => Some(Self::Contains),
            _ => None,
        }
    }

    const fn emoji(self) -> char {
        match self {
            Self::Unset => '⬛',
            Self::Correct => '🟩',
            Self::Wrong => '⬜',
            Self::Contains => '🟨',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error for feedback text that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    UnknownSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LEN} symbols, got {len}")
            }
            Self::UnknownSymbol(c) => {
                write!(f, "Unknown feedback symbol {c:?} (use 'v', '-', '+' or space)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for every position of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback([LetterStatus; WORD_LEN]);

impl Feedback {
    /// Every position correct
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LEN]) -> Self {
        Self(statuses)
    }

    /// Feedback carrying no information, the state before the first guess
    #[must_use]
    pub const fn unset() -> Self {
        Self([LetterStatus::Unset; WORD_LEN])
    }

    /// Build feedback from a slice of statuses
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` unless the slice holds exactly 5 statuses.
    pub fn from_statuses(statuses: &[LetterStatus]) -> Result<Self, FeedbackError> {
        statuses
            .try_into()
            .map(Self)
            .map_err(|_| FeedbackError::InvalidLength(statuses.len()))
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }

    /// True when every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Render as colored squares, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{status}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse a symbol string such as "vv+--"
    ///
    /// Spaces are meaningful (unset), so the input is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_LEN {
            return Err(FeedbackError::InvalidLength(len));
        }

        let mut statuses = [LetterStatus::Unset; WORD_LEN];
        for (slot, c) in statuses.iter_mut().zip(s.chars()) {
            *slot = LetterStatus::from_symbol(c).ok_or(FeedbackError::UnknownSymbol(c))?;
        }
        Ok(Self(statuses))
    }
}

impl From<[LetterStatus; WORD_LEN]> for Feedback {
    fn from(statuses: [LetterStatus; WORD_LEN]) -> Self {
        Self(statuses)
    }
}
