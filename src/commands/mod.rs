//! Command implementations for mint.

pub mod bench;
pub mod generate;

pub use bench::{BenchCommand, BenchStats};
pub use generate::{GenerateCommand, GenerateStats};
