//! Terminal output formatting
//!
//! Display utilities for command results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_emulation_result};
