//! Command implementations

pub mod benchmark;
pub mod emulate;
pub mod play;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use emulate::{
    DEFAULT_MAX_GUESSES, EmulateConfig, EmulationResult, EmulationStep, Outcome, emulate_word,
    run_emulation,
};
pub use play::{PlayOutcome, run_play};
