//! Command implementations

pub mod associate;
pub mod benchmark;
pub mod generate;
pub mod simple;

pub use associate::{AssociationResult, associate_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::{GenerateConfig, GenerateResult, generate_puzzle};
pub use simple::{SimpleCommand, apply_command, load_or_create, run_simple};
