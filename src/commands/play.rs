//! Interactive play mode
//!
//! The guesser proposes a word, the player types the feedback the game gave.

use crate::core::{Feedback, WORD_LEN, Word};
use crate::solver::{CandidateFilter, FilterState};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Feedback marked every position correct
    Solved { word: Word, guesses: usize },
    /// No word in the list fits the feedback
    Exhausted,
    /// The player quit or input ran out
    Quit,
}

/// Something typed at the feedback prompt
enum Entry {
    Feedback(Feedback),
    Play(Word),
    Quit,
}

/// Run the interactive loop until the game is solved, exhausted or abandoned
///
/// Malformed feedback is reported and re-prompted; it never reaches the filter.
/// A guess is only recorded once its feedback is in, so a suggestion replaced
/// with `use <word>` leaves no letters behind.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn run_play<R: Rng, I: BufRead, O: Write>(
    filter: &mut CandidateFilter<R>,
    input: &mut I,
    output: &mut O,
) -> Result<PlayOutcome> {
    writeln!(output, "{} candidate words loaded.", filter.len())?;
    writeln!(
        output,
        "Enter feedback as {WORD_LEN} symbols: 'v' correct, '+' in word, '-' absent, ' ' unknown."
    )?;
    writeln!(output, "Type 'use <word>' if you played a different word, 'quit' to stop.")?;

    let mut guesses = 0;

    loop {
        let Some(mut guess) = filter.suggest_guess() else {
            writeln!(output, "I don't know the answer")?;
            return Ok(PlayOutcome::Exhausted);
        };
        guesses += 1;
        writeln!(output, "Guess:       {guess}")?;

        let feedback = loop {
            write!(output, "Enter state: ")?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                writeln!(output)?;
                return Ok(PlayOutcome::Quit);
            };

            match parse_entry(&line) {
                Ok(Entry::Feedback(feedback)) => break feedback,
                Ok(Entry::Play(word)) => {
                    writeln!(output, "Using {word} instead of {guess}")?;
                    guess = word;
                }
                Ok(Entry::Quit) => return Ok(PlayOutcome::Quit),
                Err(message) => writeln!(output, "{message}")?,
            }
        };

        filter.record_guess(guess.clone());
        filter.apply_feedback(feedback);

        match filter.state() {
            FilterState::Resolved => {
                writeln!(output, "Solved: {guess} in {guesses} guesses")?;
                return Ok(PlayOutcome::Solved {
                    word: guess,
                    guesses,
                });
            }
            FilterState::Exhausted => {
                writeln!(output, "I don't know the answer")?;
                return Ok(PlayOutcome::Exhausted);
            }
            FilterState::AwaitingGuess | FilterState::AwaitingFeedback => {
                writeln!(output, "{} candidates remain", filter.len())?;
            }
        }
    }
}

/// Read one line without its line ending; `None` at end of input
///
/// Only the line ending is stripped: spaces are feedback symbols.
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn parse_entry(line: &str) -> Result<Entry, String> {
    let command = line.trim();
    if command == "quit" || command == "exit" {
        return Ok(Entry::Quit);
    }
    if let Some(word) = command.strip_prefix("use ") {
        return Word::new(word.trim())
            .map(Entry::Play)
            .map_err(|e| e.to_string());
    }

    line.parse::<Feedback>()
        .map(Entry::Feedback)
        .map_err(|e| e.to_string())
}
