//! Generate synthetic integer datasets.
//!
//! Produces reproducible random sequences in a text shape the parser and
//! every chunk source accept, for benchmarking and for exercising the
//! streaming path against real files. Large counts are produced in
//! parallel with per-chunk seeds so the output is identical regardless of
//! thread scheduling.

use crate::classify::DEFAULT_CEILING;
use crate::error::Result;
use crate::output::ListWriter;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::io::Write;
use std::time::Instant;

/// Counts at or above this are generated in parallel.
const PARALLEL_THRESHOLD: usize = 1_000_000;

/// Values generated per parallel chunk.
const GEN_CHUNK: usize = 1_000_000;

/// Configuration for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    /// Number of values to produce.
    pub count: usize,
    /// Values are drawn uniformly from `0..=max_value`.
    pub max_value: i64,
    /// Sort the output ascending.
    pub sorted: bool,
    /// RNG seed; identical seeds produce identical output.
    pub seed: u64,
    /// Values per output line.
    pub per_line: usize,
}

impl Default for GenerateCommand {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// Statistics from a generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateStats {
    pub values_written: usize,
    pub elapsed_secs: f64,
}

impl std::fmt::Display for GenerateStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} values written ({:.1}s)",
            self.values_written, self.elapsed_secs
        )
    }
}

impl GenerateCommand {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_value: DEFAULT_CEILING,
            sorted: false,
            seed: 42,
            per_line: 1,
        }
    }

    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }

    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_per_line(mut self, per_line: usize) -> Self {
        self.per_line = per_line.max(1);
        self
    }

    /// Generate and write the dataset.
    pub fn run<W: Write>(&self, output: &mut W) -> Result<GenerateStats> {
        let start = Instant::now();

        let values = self.generate_values();

        let mut writer = ListWriter::new(output);
        writer.write_grouped(&values, self.per_line)?;
        writer.flush()?;

        Ok(GenerateStats {
            values_written: values.len(),
            elapsed_secs: start.elapsed().as_secs_f64(),
        })
    }

    /// Produce the values without writing them.
    pub fn generate_values(&self) -> Vec<i64> {
        let max_value = self.max_value.max(0);

        let mut values = if self.count >= PARALLEL_THRESHOLD {
            let num_chunks = self.count.div_ceil(GEN_CHUNK);
            (0..num_chunks)
                .into_par_iter()
                .flat_map_iter(|chunk_idx| {
                    // One seeded RNG per chunk keeps output independent of
                    // thread scheduling.
                    let mut rng =
                        SmallRng::seed_from_u64(self.seed.wrapping_add(chunk_idx as u64));
                    let chunk_start = chunk_idx * GEN_CHUNK;
                    let chunk_len = GEN_CHUNK.min(self.count - chunk_start);
                    (0..chunk_len)
                        .map(|_| rng.gen_range(0..=max_value))
                        .collect::<Vec<i64>>()
                })
                .collect()
        } else {
            let mut rng = SmallRng::seed_from_u64(self.seed);
            (0..self.count)
                .map(|_| rng.gen_range(0..=max_value))
                .collect::<Vec<i64>>()
        };

        if self.sorted {
            if values.len() >= PARALLEL_THRESHOLD {
                values.par_sort_unstable();
            } else {
                values.sort_unstable();
            }
        }

        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as IoWrite;
    use tempfile::NamedTempFile;

    #[test]
    fn test_generate_deterministic() {
        let cmd = GenerateCommand::new(500).with_seed(7);
        assert_eq!(cmd.generate_values(), cmd.generate_values());

        let other_seed = GenerateCommand::new(500).with_seed(8);
        assert_ne!(cmd.generate_values(), other_seed.generate_values());
    }

    #[test]
    fn test_generate_respects_range() {
        let cmd = GenerateCommand::new(1000).with_max_value(10);
        let values = cmd.generate_values();
        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|&v| (0..=10).contains(&v)));
    }

    #[test]
    fn test_generate_sorted_output() {
        let cmd = GenerateCommand::new(1000).with_sorted(true);
        let values = cmd.generate_values();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_run_writes_one_per_line() {
        let cmd = GenerateCommand::new(5).with_seed(1);
        let mut output = Vec::new();
        let stats = cmd.run(&mut output).unwrap();
        assert_eq!(stats.values_written, 5);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 5);
        for line in text.lines() {
            line.parse::<i64>().unwrap();
        }
    }

    #[test]
    fn test_run_grouped_lines() {
        let cmd = GenerateCommand::new(7).with_per_line(3);
        let mut output = Vec::new();
        cmd.run(&mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3); // 3 + 3 + 1
        assert_eq!(lines[0].split(' ').count(), 3);
        assert_eq!(lines[2].split(' ').count(), 1);
    }

    #[test]
    fn test_generated_file_feeds_parser() {
        let cmd = GenerateCommand::new(100).with_seed(3);
        let mut file = NamedTempFile::new().unwrap();
        let stats = {
            let handle = file.as_file_mut();
            let s = cmd.run(handle).unwrap();
            handle.flush().unwrap();
            s
        };

        let content = std::fs::read_to_string(file.path()).unwrap();
        let parsed = crate::parse::parse_sequence(&content);
        assert_eq!(parsed.len(), stats.values_written);
        assert_eq!(parsed, cmd.generate_values());
    }
}
