//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, feedback_line};
use crate::commands::{BenchmarkResult, EmulationResult, Outcome};
use colored::Colorize;

/// Print the result of an emulated game
pub fn print_emulation_result(result: &EmulationResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}",
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_guess(step.guess.text(), &step.feedback),
            feedback_line(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match result.outcome {
        Outcome::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses())
                .green()
                .bold()
        ),
        Outcome::Exhausted => println!(
            "{}",
            "❌ I don't know the answer: no word in the list fits"
                .red()
                .bold()
        ),
        Outcome::GaveUp => println!(
            "{}",
            format!("❌ Gave up after {} guesses", result.guesses())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let pct = |n: usize| {
        if result.total_words == 0 {
            0.0
        } else {
            n as f64 / result.total_words as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", pct(result.solved)).green()
    );
    if result.exhausted > 0 {
        println!(
            "   Exhausted:        {} {}",
            result.exhausted,
            format!("({:.1}%)", pct(result.exhausted)).red()
        );
    }
    if result.gave_up > 0 {
        println!(
            "   Gave up:          {} {}",
            result.gave_up,
            format!("({:.1}%)", pct(result.gave_up)).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!(
                "   {guess_count:2}: {} {count:4} ({:5.1}%)",
                bar.green(),
                pct(count)
            );
        }
    }

    if !result.failures.is_empty() {
        println!("\n😰 {}", "Unsolved:".yellow().bold());
        for (word, outcome) in result.failures.iter().take(10) {
            println!("   {} ({outcome:?})", word.to_uppercase().yellow());
        }
    }
}
