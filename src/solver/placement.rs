//! Placement scoring strategies
//!
//! The placement score is the second key when ranking candidates. It rewards
//! letters that sit in the same position as in many other candidates.

use crate::core::{Feedback, LetterStatus, WORD_LEN, Word};

/// A secondary score for a candidate, given the rest of the candidate set
pub trait PlacementScore {
    /// Score `word` against `candidates` (which normally contains `word` itself)
    ///
    /// `feedback` is the most recent feedback; positions it marks correct
    /// carry no information and are skipped.
    fn score(&self, word: &Word, candidates: &[Word], feedback: &Feedback) -> usize;
}

/// Enum wrapper for all placement strategies
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementStrategy {
    /// Always zero (default)
    #[default]
    Disabled,
    /// Count positional agreements with the other candidates
    Common,
}

impl PlacementScore for PlacementStrategy {
    fn score(&self, word: &Word, candidates: &[Word], feedback: &Feedback) -> usize {
        match self {
            Self::Disabled => Disabled.score(word, candidates, feedback),
            Self::Common => CommonPlacement.score(word, candidates, feedback),
        }
    }
}

impl PlacementStrategy {
    /// Create a strategy from its name
    ///
    /// Supported names: "none", "off", "disabled", "common".
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" | "off" | "disabled" => Some(Self::Disabled),
            "common" => Some(Self::Common),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disabled => "none",
            Self::Common => "common",
        }
    }

    /// Whether the strategy can ever return a non-zero score
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Placement scoring switched off
pub struct Disabled;

impl PlacementScore for Disabled {
    fn score(&self, _word: &Word, _candidates: &[Word], _feedback: &Feedback) -> usize {
        0
    }
}

/// Positional commonality across the candidate set
///
/// For each other candidate and each position not already known correct,
/// adds one when both words hold the same letter there.
pub struct CommonPlacement;

impl PlacementScore for CommonPlacement {
    fn score(&self, word: &Word, candidates: &[Word], feedback: &Feedback) -> usize {
        let open: Vec<usize> = (0..WORD_LEN)
            .filter(|&i| feedback.status_at(i) != LetterStatus::Correct)
            .collect();

        candidates
            .iter()
            .filter(|other| *other != word)
            .map(|other| {
                open.iter()
                    .filter(|&&i| other.char_at(i) == word.char_at(i))
                    .count()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn disabled_is_always_zero() {
        let candidates = words(&["crane", "crate", "grate"]);
        for word in &candidates {
            assert_eq!(
                PlacementStrategy::Disabled.score(word, &candidates, &Feedback::unset()),
                0
            );
        }
    }

    #[test]
    fn common_counts_shared_positions() {
        let candidates = words(&["crane", "crate", "grate"]);
        let feedback = Feedback::unset();

        // crate shares c,r,a,e with crane and r,a,t,e with grate
        assert_eq!(CommonPlacement.score(&candidates[1], &candidates, &feedback), 8);
        // crane shares c,r,a,e with crate and r,a,e with grate
        assert_eq!(CommonPlacement.score(&candidates[0], &candidates, &feedback), 7);
    }

    #[test]
    fn common_skips_known_correct_positions() {
        let candidates = words(&["crane", "crate", "grate"]);
        let feedback: Feedback = " vv v".parse().unwrap();

        // Only positions 0 and 3 count: crate-crane share c, crate-grate share t
        assert_eq!(CommonPlacement.score(&candidates[1], &candidates, &feedback), 2);
    }

    #[test]
    fn common_ignores_the_word_itself() {
        let candidates = words(&["crane"]);
        assert_eq!(
            CommonPlacement.score(&candidates[0], &candidates, &Feedback::unset()),
            0
        );
    }

    #[test]
    fn from_name_round_trips() {
        assert_eq!(
            PlacementStrategy::from_name("common"),
            Some(PlacementStrategy::Common)
        );
        assert_eq!(
            PlacementStrategy::from_name("none"),
            Some(PlacementStrategy::Disabled)
        );
        assert_eq!(PlacementStrategy::from_name("entropy"), None);
        assert_eq!(PlacementStrategy::Common.name(), "common");
        assert!(!PlacementStrategy::default().is_enabled());
    }
}
