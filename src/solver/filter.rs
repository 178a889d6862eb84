//! Candidate filtering
//!
//! Keeps the set of words consistent with every feedback received so far and
//! hands out the next guess.

use super::config::GuesserConfig;
use super::ranker::{Difficulty, GuessRanker, ScoredGuess};
use crate::core::{Feedback, LetterStatus, Word};
use rand::Rng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// Ready to emit the next guess
    AwaitingGuess,
    /// A guess was emitted; its feedback has not been applied yet
    AwaitingFeedback,
    /// The last feedback marked every position correct
    Resolved,
    /// No word in the list is consistent with the feedback
    Exhausted,
}

impl FilterState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Exhausted)
    }
}

/// The guesser's state for one game
///
/// Owns the candidate list, the last emitted guess, the most recent feedback
/// and the letters used by earlier guesses.
pub struct CandidateFilter<R = StdRng> {
    candidates: Vec<Word>,
    last_guess: Option<Word>,
    feedback: Feedback,
    used_letters: FxHashSet<u8>,
    state: FilterState,
    ranker: GuessRanker<R>,
}

impl CandidateFilter<StdRng> {
    /// Create a filter over `words` with an OS-seeded tie-break
    #[must_use]
    pub fn new(words: Vec<Word>, difficulty: Difficulty) -> Self {
        Self::with_ranker(words, GuessRanker::new(difficulty))
    }

    /// Create a filter from a [`GuesserConfig`]
    #[must_use]
    pub fn from_config(words: Vec<Word>, config: &GuesserConfig) -> Self {
        Self::with_ranker(words, config.ranker())
    }
}

impl<R: Rng> CandidateFilter<R> {
    /// Create a filter over `words` that ranks with `ranker`
    #[must_use]
    pub fn with_ranker(words: Vec<Word>, ranker: GuessRanker<R>) -> Self {
        Self {
            candidates: words,
            last_guess: None,
            feedback: Feedback::unset(),
            used_letters: FxHashSet::default(),
            state: FilterState::AwaitingGuess,
            ranker,
        }
    }

    /// Words still consistent with all feedback
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub const fn state(&self) -> FilterState {
        self.state
    }

    #[must_use]
    pub const fn last_guess(&self) -> Option<&Word> {
        self.last_guess.as_ref()
    }

    /// Most recently applied feedback (all unset before the first)
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Letters of every guess emitted so far
    #[must_use]
    pub const fn used_letters(&self) -> &FxHashSet<u8> {
        &self.used_letters
    }

    #[must_use]
    pub const fn ranker(&self) -> &GuessRanker<R> {
        &self.ranker
    }

    /// Pick the next guess and record it
    ///
    /// Returns `None` once no candidate remains (the filter is then exhausted)
    /// or after the game has resolved.
    pub fn next_guess(&mut self) -> Option<Word> {
        let guess = self.suggest_guess()?;
        self.record_guess(guess.clone());
        Some(guess)
    }

    /// Best guess for the current state without recording it
    ///
    /// Pair with [`record_guess`](Self::record_guess) when the word actually
    /// played may differ from the suggestion.
    pub fn suggest_guess(&mut self) -> Option<Word> {
        if self.state.is_terminal() {
            return None;
        }

        let guess = self
            .ranker
            .best(&self.candidates, &self.used_letters, &self.feedback)
            .cloned();
        if guess.is_none() {
            self.state = FilterState::Exhausted;
        }
        guess
    }

    /// Current ranking without recording a guess
    ///
    /// Still consumes tie-break randomness.
    pub fn ranked_guesses(&mut self) -> Vec<ScoredGuess<'_>> {
        self.ranker
            .rank(&self.candidates, &self.used_letters, &self.feedback)
    }

    /// Record `guess` as the word the next feedback refers to
    ///
    /// Used when the player enters a different word than the one suggested.
    /// Ignored once the game has resolved or run out of candidates.
    pub fn record_guess(&mut self, guess: Word) {
        if self.state.is_terminal() {
            log::warn!("guess {guess} recorded after the game ended ({:?})", self.state);
            return;
        }
        self.used_letters.extend(guess.chars().iter().copied());
        self.last_guess = Some(guess);
        self.state = FilterState::AwaitingFeedback;
    }

    /// Narrow the candidates with feedback for the last guess
    ///
    /// # Panics
    /// Panics if no guess has been emitted or recorded yet; feedback without
    /// a guess to compare against is a caller bug.
    ///
    /// Once the game has resolved or been exhausted, further feedback is
    /// ignored.
    pub fn apply_feedback(&mut self, feedback: Feedback) {
        let guess = self
            .last_guess
            .as_ref()
            .unwrap_or_else(|| panic!("feedback {feedback:?} applied before any guess"));

        if self.state.is_terminal() {
            log::warn!("feedback [{feedback}] ignored: game already {:?}", self.state);
            return;
        }

        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| is_consistent(candidate, guess, &feedback));
        log::debug!(
            "{guess} [{feedback}] narrowed candidates {before} -> {}",
            self.candidates.len()
        );

        self.feedback = feedback;
        self.state = if feedback.is_solved() {
            FilterState::Resolved
        } else if self.candidates.is_empty() {
            FilterState::Exhausted
        } else {
            FilterState::AwaitingGuess
        };
    }
}

/// Whether `candidate` could be the secret given `feedback` for `guess`
///
/// A contains mark only requires the letter somewhere in the candidate,
/// including the guessed position itself.
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, feedback: &Feedback) -> bool {
    feedback.iter().enumerate().all(|(i, status)| {
        let letter = guess.char_at(i);
        match status {
            LetterStatus::Unset => true,
            LetterStatus::Correct => candidate.char_at(i) == letter,
            LetterStatus::Wrong => candidate.char_at(i) != letter,
            LetterStatus::Contains => candidate.has_letter(letter),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackOracle;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts<R: Rng>(filter: &CandidateFilter<R>) -> Vec<&str> {
        filter.candidates().iter().map(Word::text).collect()
    }

    fn filter(list: &[&str], difficulty: Difficulty) -> CandidateFilter {
        CandidateFilter::with_ranker(words(list), GuessRanker::seeded(difficulty, 9))
    }

    fn fb(s: &str) -> Feedback {
        s.parse().unwrap()
    }

    #[test]
    fn starts_awaiting_guess() {
        let f = filter(&["crane", "slate"], Difficulty::Normal);
        assert_eq!(f.state(), FilterState::AwaitingGuess);
        assert_eq!(f.feedback(), &Feedback::unset());
        assert!(f.last_guess().is_none());
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn next_guess_records_guess_and_letters() {
        let mut f = filter(&["crane"], Difficulty::Normal);
        let guess = f.next_guess().unwrap();

        assert_eq!(guess.text(), "crane");
        assert_eq!(f.last_guess(), Some(&guess));
        assert_eq!(f.state(), FilterState::AwaitingFeedback);
        assert_eq!(f.used_letters().len(), 5);
        assert!(f.used_letters().contains(&b'c'));
        // The candidate set itself is untouched
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn correct_keeps_matching_positions() {
        let mut f = filter(&["crane", "crabs", "cramp", "slate", "brace"], Difficulty::Normal);
        f.record_guess(Word::new("crabs").unwrap());
        f.apply_feedback(fb("vvv  "));

        assert_eq!(texts(&f), ["crane", "crabs", "cramp"]);
    }

    #[test]
    fn wrong_excludes_only_that_position() {
        let mut f = filter(&["crane", "bacon", "scrub", "tubby"], Difficulty::Normal);
        f.record_guess(Word::new("crabs").unwrap());
        // b wrong at position 3 only; words with b elsewhere survive
        f.apply_feedback(fb("   - "));

        assert_eq!(texts(&f), ["crane", "bacon", "scrub"]);
    }

    #[test]
    fn contains_is_plain_membership() {
        let mut f = filter(&["crane", "react", "toast"], Difficulty::Normal);
        f.record_guess(Word::new("crabs").unwrap());
        f.apply_feedback(fb("+    "));

        // crane keeps its c at the guessed position and still passes
        assert_eq!(texts(&f), ["crane", "react"]);
    }

    #[test]
    fn unset_imposes_nothing() {
        let mut f = filter(&["crane", "slate", "mamma"], Difficulty::Normal);
        f.record_guess(Word::new("crabs").unwrap());
        f.apply_feedback(Feedback::unset());

        assert_eq!(f.len(), 3);
        assert_eq!(f.state(), FilterState::AwaitingGuess);
    }

    #[test]
    fn crabs_against_crane_scenario() {
        let list = ["crane", "crabs", "cramp", "crass", "brace", "slate", "crate"];
        let mut f = filter(&list, Difficulty::Normal);
        let oracle = FeedbackOracle::new(Word::new("crane").unwrap());

        let guess = Word::new("crabs").unwrap();
        let feedback = oracle.evaluate(&guess);
        assert_eq!(feedback.to_string(), "vvv--");

        f.record_guess(guess);
        f.apply_feedback(feedback);

        // crabs and crass fall to the positional b/s exclusions
        assert_eq!(texts(&f), ["crane", "cramp", "crate"]);
        assert!(f.candidates().iter().all(|w| w.text().starts_with("cra")));
    }

    #[test]
    fn solved_feedback_resolves() {
        let mut f = filter(&["crane", "slate"], Difficulty::Normal);
        f.record_guess(Word::new("slate").unwrap());
        f.apply_feedback(Feedback::SOLVED);

        assert_eq!(f.state(), FilterState::Resolved);
        assert_eq!(texts(&f), ["slate"]);
        assert!(f.state().is_terminal());
    }

    #[test]
    fn next_guess_after_resolved_is_none() {
        let mut f = filter(&["crane", "slate"], Difficulty::Normal);
        f.record_guess(Word::new("slate").unwrap());
        f.apply_feedback(Feedback::SOLVED);

        assert!(f.next_guess().is_none());
        assert!(f.suggest_guess().is_none());
        assert_eq!(f.state(), FilterState::Resolved);
        assert_eq!(f.last_guess().map(Word::text), Some("slate"));
    }

    #[test]
    fn resolved_game_ignores_further_input() {
        let mut f = filter(&["crane", "slate"], Difficulty::Normal);
        f.record_guess(Word::new("slate").unwrap());
        f.apply_feedback(Feedback::SOLVED);

        f.record_guess(Word::new("crane").unwrap());
        f.apply_feedback(fb("-----"));

        assert_eq!(f.state(), FilterState::Resolved);
        assert_eq!(f.last_guess().map(Word::text), Some("slate"));
        assert_eq!(texts(&f), ["slate"]);
        assert_eq!(f.used_letters().len(), 5);
    }

    #[test]
    fn suggest_guess_does_not_record() {
        let mut f = filter(&["crane", "slate"], Difficulty::Normal);
        assert!(f.suggest_guess().is_some());

        assert!(f.last_guess().is_none());
        assert!(f.used_letters().is_empty());
        assert_eq!(f.state(), FilterState::AwaitingGuess);
    }

    #[test]
    fn empty_result_exhausts() {
        let mut f = filter(&["crane", "slate"], Difficulty::Normal);
        f.record_guess(Word::new("zzzzz").unwrap());
        f.apply_feedback(fb("v    "));

        assert!(f.is_empty());
        assert_eq!(f.state(), FilterState::Exhausted);
        assert!(f.next_guess().is_none());
        assert_eq!(f.state(), FilterState::Exhausted);
    }

    #[test]
    fn next_guess_on_empty_list_is_none() {
        let mut f = filter(&[], Difficulty::Hard);
        assert!(f.next_guess().is_none());
        assert_eq!(f.state(), FilterState::Exhausted);
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let list = ["crane", "crabs", "cramp", "slate", "react", "brace"];
        let mut once = filter(&list, Difficulty::Normal);
        let mut twice = filter(&list, Difficulty::Normal);
        let guess = Word::new("crate").unwrap();
        let feedback = fb("vv+-v");

        once.record_guess(guess.clone());
        once.apply_feedback(feedback);
        twice.record_guess(guess);
        twice.apply_feedback(feedback);
        twice.apply_feedback(feedback);

        assert_eq!(texts(&once), texts(&twice));
    }

    #[test]
    fn normal_mode_moves_away_from_used_letters() {
        // After "crane" is played, "build" shares nothing while "react" shares four letters
        let mut f = filter(&["crane", "react", "build"], Difficulty::Normal);
        f.record_guess(Word::new("crane").unwrap());
        f.apply_feedback(Feedback::unset());

        assert_eq!(f.next_guess().unwrap().text(), "build");
    }

    #[test]
    #[should_panic(expected = "applied before any guess")]
    fn feedback_before_guess_panics() {
        let mut f = filter(&["crane"], Difficulty::Normal);
        f.apply_feedback(Feedback::SOLVED);
    }
}
