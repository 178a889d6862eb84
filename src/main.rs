//! Wordle Guesser - CLI
//!
//! Interactive guessing assistant, self-play emulator and benchmark.

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use wordle_guesser::{
    commands::{
        BenchmarkConfig, DEFAULT_MAX_GUESSES, EmulateConfig, PlayOutcome, emulate_word,
        run_benchmark, run_play,
    },
    core::{OracleRule, Word},
    output::{print_benchmark_result, print_emulation_result},
    solver::{CandidateFilter, Difficulty, GuesserConfig, PlacementStrategy},
    wordlists::{WORDS, load_from_file, words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_guesser",
    about = "Suggests guesses for five-letter word games from per-letter feedback",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hard mode: do not penalize letters used in earlier guesses
    #[arg(long, global = true)]
    hard: bool,

    /// Word list: 'embedded' (default) or path to a .json array or newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Placement heuristic: none (default) or common
    #[arg(long, global = true, default_value = "none")]
    placement: String,

    /// Seed the tie-break randomness for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you enter the feedback the game shows (default)
    Play,

    /// Self-play against a secret word
    Emulate {
        /// The secret word (prompted for when omitted)
        secret: Option<String>,

        /// Use duplicate-aware feedback instead of the simple membership rule
        #[arg(long)]
        strict: bool,

        /// Stop after this many guesses
        #[arg(long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },

    /// Emulate a game for every word in the list
    Benchmark {
        /// Limit number of secrets to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Use duplicate-aware feedback instead of the simple membership rule
        #[arg(long)]
        strict: bool,

        /// Stop each game after this many guesses
        #[arg(long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("loading word list {path}")),
    }
}

const fn oracle_rule(strict: bool) -> OracleRule {
    if strict {
        OracleRule::Strict
    } else {
        OracleRule::Simple
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let placement = PlacementStrategy::from_name(&cli.placement)
        .ok_or_else(|| anyhow!("unknown placement heuristic '{}'", cli.placement))?;
    let guesser = GuesserConfig::new(Difficulty::from_hard_flag(cli.hard))
        .with_placement(placement)
        .with_seed(cli.seed);
    log::info!("guesser settings: {guesser:?}");

    let words = load_words(&cli.wordlist)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(words, &guesser),
        Commands::Emulate {
            secret,
            strict,
            max_guesses,
        } => run_emulate_command(secret, strict, max_guesses, words, &guesser),
        Commands::Benchmark {
            limit,
            strict,
            max_guesses,
        } => {
            run_benchmark_command(limit, strict, max_guesses, &words, guesser);
            Ok(())
        }
    }
}

fn run_play_command(words: Vec<Word>, guesser: &GuesserConfig) -> Result<()> {
    let mut filter = CandidateFilter::from_config(words, guesser);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let outcome = run_play(&mut filter, &mut input, &mut output)?;
    log::info!("play finished: {outcome:?}");
    if outcome == PlayOutcome::Quit {
        writeln!(output, "Bye.")?;
    }
    Ok(())
}

fn run_emulate_command(
    secret: Option<String>,
    strict: bool,
    max_guesses: usize,
    words: Vec<Word>,
    guesser: &GuesserConfig,
) -> Result<()> {
    let secret = match secret {
        Some(secret) => secret,
        None => prompt_secret()?,
    };

    let mut config = EmulateConfig::new(secret);
    config.max_guesses = max_guesses;
    config.rule = oracle_rule(strict);

    let result = emulate_word(&config, words, guesser)
        .with_context(|| format!("invalid secret word '{}'", config.secret.trim()))?;
    print_emulation_result(&result, log::log_enabled!(log::Level::Info));
    Ok(())
}

fn prompt_secret() -> Result<String> {
    println!("Enter a secret word:");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read secret word")?;
    Ok(line.trim().to_string())
}

fn run_benchmark_command(
    limit: Option<usize>,
    strict: bool,
    max_guesses: usize,
    words: &[Word],
    guesser: GuesserConfig,
) {
    let config = BenchmarkConfig {
        guesser,
        rule: oracle_rule(strict),
        max_guesses,
        limit,
        show_progress: true,
    };

    println!(
        "Running self-play on {} secrets...",
        limit.map_or(words.len(), |l| l.min(words.len()))
    );
    let result = run_benchmark(words, words, &config);
    print_benchmark_result(&result);
}
