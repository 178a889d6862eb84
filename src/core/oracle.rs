//! Feedback generation for a known secret word
//!
//! Used for self-play: the oracle answers a guess the way a game would.

use super::{Feedback, LetterStatus, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// How the oracle treats repeated letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OracleRule {
    /// A misplaced letter is reported whenever it occurs anywhere in the
    /// secret, however many copies the guess holds.
    #[default]
    Simple,
    /// Standard duplicate accounting: each secret letter backs at most one
    /// correct or contains mark.
    Strict,
}

/// Computes feedback against a fixed secret word
#[derive(Debug, Clone)]
pub struct FeedbackOracle {
    secret: Word,
    rule: OracleRule,
}

impl FeedbackOracle {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self::with_rule(secret, OracleRule::Simple)
    }

    #[must_use]
    pub const fn strict(secret: Word) -> Self {
        Self::with_rule(secret, OracleRule::Strict)
    }

    #[must_use]
    pub const fn with_rule(secret: Word, rule: OracleRule) -> Self {
        Self { secret, rule }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn rule(&self) -> OracleRule {
        self.rule
    }

    /// Feedback a game would give for `guess`
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{FeedbackOracle, Word};
    ///
    /// let oracle = FeedbackOracle::new(Word::new("crane").unwrap());
    /// let feedback = oracle.evaluate(&Word::new("crabs").unwrap());
    /// assert_eq!(feedback.to_string(), "vvv--");
    /// ```
    #[must_use]
    pub fn evaluate(&self, guess: &Word) -> Feedback {
        match self.rule {
            OracleRule::Simple => self.evaluate_simple(guess),
            OracleRule::Strict => self.evaluate_strict(guess),
        }
    }

    fn evaluate_simple(&self, guess: &Word) -> Feedback {
        let mut result = [LetterStatus::Wrong; WORD_LEN];

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if self.secret.char_at(i) == letter {
                *slot = LetterStatus::Correct;
            } else if self.secret.has_letter(letter) {
                *slot = LetterStatus::Contains;
            }
        }

        Feedback::new(result)
    }

    fn evaluate_strict(&self, guess: &Word) -> Feedback {
        let mut result = [LetterStatus::Wrong; WORD_LEN];
        let mut available: FxHashMap<u8, u8> = FxHashMap::default();
        for &ch in self.secret.chars() {
            *available.entry(ch).or_insert(0) += 1;
        }

        // Exact matches claim their letters first
        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if self.secret.char_at(i) == letter {
                *slot = LetterStatus::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *slot = LetterStatus::Contains;
                *count -= 1;
            }
        }

        Feedback::new(result)
    }
}
