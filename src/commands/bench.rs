//! Benchmark harness comparing the intersection algorithms.
//!
//! Generates a reproducible random input pair, times every algorithm
//! eligible for that data, checks that all timed algorithms agree on the
//! result multiset, and writes one TSV row per method.

use crate::classify::{DEFAULT_CEILING, MAX_CEILING};
use crate::error::{MintError, Result};
use crate::methods::{intersect_hashed, intersect_two_pointer, CountingIntersect};
use crate::output::ListWriter;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::time::Instant;

/// Benchmark configuration.
#[derive(Debug, Clone)]
pub struct BenchCommand {
    /// Length of the first generated sequence.
    pub size_a: usize,
    /// Length of the second generated sequence.
    pub size_b: usize,
    /// Values are drawn uniformly from `0..=max_value`.
    pub max_value: i64,
    /// Sort both sequences before timing.
    pub sorted: bool,
    /// RNG seed; identical seeds produce identical inputs.
    pub seed: u64,
    /// Trials per method; the best time is reported.
    pub trials: usize,
    /// Counting is timed only when `max_value` fits this ceiling.
    pub ceiling: i64,
}

impl Default for BenchCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics from a bench run.
#[derive(Debug, Clone, Default)]
pub struct BenchStats {
    pub methods_timed: usize,
    pub result_len: usize,
    pub elapsed_secs: f64,
}

impl std::fmt::Display for BenchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} methods timed, intersection length {} ({:.1}s)",
            self.methods_timed, self.result_len, self.elapsed_secs
        )
    }
}

impl BenchCommand {
    pub fn new() -> Self {
        Self {
            size_a: 20_000,
            size_b: 25_000,
            max_value: DEFAULT_CEILING,
            sorted: false,
            seed: 42,
            trials: 3,
            ceiling: DEFAULT_CEILING,
        }
    }

    pub fn with_sizes(mut self, size_a: usize, size_b: usize) -> Self {
        self.size_a = size_a;
        self.size_b = size_b;
        self
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

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials.max(1);
        self
    }

    /// Run the benchmark, writing one TSV row per timed method.
    pub fn run<W: Write>(&self, output: &mut W) -> Result<BenchStats> {
        let start = Instant::now();

        let a = generate_values(self.seed, self.size_a, self.max_value, self.sorted);
        let b = generate_values(
            self.seed.wrapping_add(1),
            self.size_b,
            self.max_value,
            self.sorted,
        );

        let mut rows: Vec<(&'static str, f64, String)> = Vec::new();
        let mut results: Vec<Vec<i64>> = Vec::new();

        // Counting is eligible only when the generated domain fits a
        // buildable table. Values are drawn from 0..=max_value, so the
        // check is on the configured maximum alone.
        if self.max_value <= self.ceiling && self.ceiling <= MAX_CEILING {
            let counting = CountingIntersect::with_ceiling(self.ceiling);
            let (millis, result) = self.time_best(|| counting.intersect(&a, &b));
            rows.push((
                "counting",
                millis,
                format!("values 0..={}", self.max_value),
            ));
            results.push(result);
        }

        let (millis, result) = self.time_best(|| intersect_hashed(&a, &b));
        rows.push(("hash-map", millis, "wide or unknown domain".to_string()));
        results.push(result);

        if self.sorted {
            let (millis, result) = self.time_best(|| intersect_two_pointer(&a, &b, true));
            rows.push((
                "two-pointer-presorted",
                millis,
                "inputs generated sorted".to_string(),
            ));
            results.push(result);
        } else {
            let (millis, result) = self.time_best(|| intersect_two_pointer(&a, &b, false));
            rows.push((
                "two-pointer-sort-first",
                millis,
                "unsorted: sort cost included".to_string(),
            ));
            results.push(result);
        }

        let result_len = verify_agreement(&results)?;

        let mut writer = ListWriter::new(output);
        writer.write_bytes(b"method\tmillis\tnote\n")?;
        for (method, millis, note) in &rows {
            writer.write_bytes(method.as_bytes())?;
            writer.write_tab()?;
            writer.write_float(round_millis(*millis))?;
            writer.write_tab()?;
            writer.write_bytes(note.as_bytes())?;
            writer.write_newline()?;
        }
        writer.flush()?;

        Ok(BenchStats {
            methods_timed: rows.len(),
            result_len,
            elapsed_secs: start.elapsed().as_secs_f64(),
        })
    }

    /// Run a method `trials` times and keep the best wall time in
    /// milliseconds, along with the final result.
    fn time_best<F: FnMut() -> Vec<i64>>(&self, mut run: F) -> (f64, Vec<i64>) {
        let mut best = f64::MAX;
        let mut result = Vec::new();
        for _ in 0..self.trials.max(1) {
            let t0 = Instant::now();
            result = run();
            let millis = t0.elapsed().as_secs_f64() * 1000.0;
            if millis < best {
                best = millis;
            }
        }
        (best, result)
    }
}

/// Deterministic uniform values in `0..=max_value`.
fn generate_values(seed: u64, count: usize, max_value: i64, sorted: bool) -> Vec<i64> {
    let max_value = max_value.max(0);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut values: Vec<i64> = (0..count).map(|_| rng.gen_range(0..=max_value)).collect();
    if sorted {
        values.sort_unstable();
    }
    values
}

/// All timed methods must produce the same multiset. Disagreement can
/// only come from a defect in an algorithm.
fn verify_agreement(results: &[Vec<i64>]) -> Result<usize> {
    let mut canonical: Option<Vec<i64>> = None;
    for result in results {
        let mut sorted_result = result.clone();
        sorted_result.sort_unstable();
        match &canonical {
            None => canonical = Some(sorted_result),
            Some(expected) => {
                if *expected != sorted_result {
                    return Err(MintError::Unknown(
                        "benchmarked methods disagree on the intersection multiset".to_string(),
                    ));
                }
            }
        }
    }
    Ok(canonical.map(|c| c.len()).unwrap_or(0))
}

/// Two decimal places is plenty for a report row.
fn round_millis(millis: f64) -> f64 {
    (millis * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_writes_header_and_rows() {
        let cmd = BenchCommand::new().with_sizes(500, 600).with_trials(1);
        let mut output = Vec::new();
        let stats = cmd.run(&mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "method\tmillis\tnote");
        assert_eq!(lines.len(), 1 + stats.methods_timed);
        assert_eq!(stats.methods_timed, 3);
        assert!(text.contains("counting"));
        assert!(text.contains("hash-map"));
        assert!(text.contains("two-pointer-sort-first"));
    }

    #[test]
    fn test_bench_skips_counting_when_domain_too_wide() {
        let cmd = BenchCommand::new()
            .with_sizes(200, 200)
            .with_max_value(1_000_000)
            .with_trials(1);
        let mut output = Vec::new();
        let stats = cmd.run(&mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(stats.methods_timed, 2);
        assert!(!text.contains("counting"));
    }

    #[test]
    fn test_bench_sorted_times_presorted_path() {
        let cmd = BenchCommand::new()
            .with_sizes(300, 300)
            .with_sorted(true)
            .with_trials(1);
        let mut output = Vec::new();
        cmd.run(&mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("two-pointer-presorted"));
        assert!(!text.contains("sort-first"));
    }

    #[test]
    fn test_generated_values_deterministic() {
        let first = generate_values(7, 100, 50, false);
        let second = generate_values(7, 100, 50, false);
        assert_eq!(first, second);
        assert!(first.iter().all(|&v| (0..=50).contains(&v)));

        let different = generate_values(8, 100, 50, false);
        assert_ne!(first, different);
    }

    #[test]
    fn test_generated_values_sorted_flag() {
        let values = generate_values(7, 100, 50, true);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_verify_agreement_catches_mismatch() {
        let ok = verify_agreement(&[vec![1, 2], vec![2, 1]]).unwrap();
        assert_eq!(ok, 2);

        let err = verify_agreement(&[vec![1, 2], vec![1, 3]]).unwrap_err();
        assert_eq!(err.kind(), "UnknownError");
    }

    #[test]
    fn test_round_millis() {
        assert_eq!(round_millis(1.2345), 1.23);
        assert_eq!(round_millis(1.678), 1.68);
        assert_eq!(round_millis(0.0), 0.0);
    }
}
