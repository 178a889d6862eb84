//! Benchmark command
//!
//! Emulates a game for every secret in a list and collects statistics.

use super::emulate::{EmulationResult, Outcome, run_emulation};
use crate::core::{FeedbackOracle, OracleRule, Word};
use crate::solver::{CandidateFilter, GuesserConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Settings for a benchmark run
pub struct BenchmarkConfig {
    pub guesser: GuesserConfig,
    pub rule: OracleRule,
    pub max_guesses: usize,
    /// Test only the first `limit` secrets
    pub limit: Option<usize>,
    pub show_progress: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub gave_up: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by guess count
    pub distribution: HashMap<usize, usize>,
    /// Secrets that were not solved
    pub failures: Vec<(String, Outcome)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run a self-play game for each secret, in parallel
///
/// Every game gets a fresh filter over `words`. With a seed configured, game
/// `i` uses `seed + i`, so results do not depend on thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(
    words: &[Word],
    secrets: &[Word],
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let secrets = &secrets[..config.limit.map_or(secrets.len(), |l| l.min(secrets.len()))];

    let pb = if config.show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results: Vec<EmulationResult> = secrets
        .par_iter()
        .enumerate()
        .map(|(i, secret)| {
            let guesser = config.guesser.for_game(i as u64);
            let mut filter = CandidateFilter::from_config(words.to_vec(), &guesser);
            let oracle = FeedbackOracle::with_rule(secret.clone(), config.rule);
            let result = run_emulation(&mut filter, &oracle, config.max_guesses);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(&results, duration)
}

fn summarize(results: &[EmulationResult], duration: Duration) -> BenchmarkResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();
    let mut exhausted = 0;
    let mut gave_up = 0;

    for result in results {
        match result.outcome {
            Outcome::Solved => *distribution.entry(result.guesses()).or_insert(0) += 1,
            Outcome::Exhausted => exhausted += 1,
            Outcome::GaveUp => gave_up += 1,
        }
        if !result.solved() {
            failures.push((result.secret.text().to_string(), result.outcome));
        }
    }

    let solved_counts: Vec<usize> = results
        .iter()
        .filter(|r| r.solved())
        .map(EmulationResult::guesses)
        .collect();
    let solved = solved_counts.len();
    let average_guesses = if solved > 0 {
        solved_counts.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let total_words = results.len();
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved,
        exhausted,
        gave_up,
        average_guesses,
        min_guesses: solved_counts.iter().copied().min().unwrap_or(0),
        max_guesses: solved_counts.iter().copied().max().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: if seconds > 0.0 {
            total_words as f64 / seconds
        } else {
            0.0
        },
    }
}
