//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus};
use colored::{ColoredString, Colorize};

/// Format feedback as symbols followed by emoji, e.g. "vv+-- 🟩🟩🟨⬜⬜"
#[must_use]
pub fn feedback_line(feedback: &Feedback) -> String {
    format!("{feedback} {}", feedback.to_emoji())
}

/// Color each letter of `word` by its feedback status
#[must_use]
pub fn colored_guess(word: &str, feedback: &Feedback) -> String {
    word.chars()
        .zip(feedback.iter())
        .map(|(c, status)| colored_letter(c, status).to_string())
        .collect()
}

fn colored_letter(letter: char, status: LetterStatus) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Contains => text.black().on_yellow().bold(),
        LetterStatus::Wrong => text.white().on_bright_black(),
        LetterStatus::Unset => text.normal(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
