//! Orchestration: parse, classify, select, execute.
//!
//! The engine is the single entry point callers use. Given two inputs and
//! a mode it runs the full pipeline (raw text → parsed integers →
//! classification → algorithm choice → result) and returns either an
//! [`Intersection`] carrying the values plus a human-readable explanation,
//! or a structured error. The engine holds no state between calls; its
//! only configuration is the bounded-range ceiling.

use crate::classify::{
    classify_with_ceiling, in_bounded_range, is_non_decreasing, DEFAULT_CEILING, MAX_CEILING,
};
use crate::error::{MintError, Result};
use crate::methods::{
    intersect_hashed, intersect_two_pointer, CountingIntersect, StreamingIntersect,
};
use crate::parse::parse_sequence;
use crate::select::{select_method, Method};
use crate::stream::ChunkSource;

/// Requested execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Classify the inputs and let the policy pick.
    Auto,
    /// Force the counting algorithm; fails if any value leaves the range.
    Counting,
    /// Force the hash-map algorithm; no preconditions.
    Hashed,
    /// Force two-pointer; sortedness is detected, unsorted input is sorted
    /// defensively rather than rejected.
    TwoPointer,
}

impl Mode {
    /// Parse a mode token.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "counting" => Some(Self::Counting),
            "hash-map" | "hash_map" | "map" => Some(Self::Hashed),
            "two-pointer" | "two_pointer" => Some(Self::TwoPointer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Counting => "counting",
            Self::Hashed => "hash-map",
            Self::TwoPointer => "two-pointer",
        }
    }
}

/// Successful outcome: the intersection values plus how and why they were
/// computed. `values` carries no ordering guarantee; any permutation with
/// the correct multiset content is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection {
    pub values: Vec<i64>,
    pub method: Method,
    pub explanation: String,
}

impl Intersection {
    fn new(values: Vec<i64>, method: Method, explanation: String) -> Self {
        Self {
            values,
            method,
            explanation,
        }
    }
}

/// The orchestrating engine.
#[derive(Debug, Clone)]
pub struct IntersectEngine {
    ceiling: i64,
}

impl Default for IntersectEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IntersectEngine {
    /// Engine with the default bounded-range ceiling.
    pub fn new() -> Self {
        Self {
            ceiling: DEFAULT_CEILING,
        }
    }

    /// Engine with an explicit bounded-range ceiling, used by
    /// classification, the counting algorithm, and bounded streaming.
    pub fn with_ceiling(ceiling: i64) -> Self {
        Self { ceiling }
    }

    pub fn ceiling(&self) -> i64 {
        self.ceiling
    }

    /// Parse both inputs permissively, then run.
    pub fn run_text(&self, a: &str, b: &str, mode: Mode) -> Result<Intersection> {
        let a = parse_sequence(a);
        let b = parse_sequence(b);
        self.run(&a, &b, mode)
    }

    /// Run over pre-parsed sequences.
    pub fn run(&self, a: &[i64], b: &[i64], mode: Mode) -> Result<Intersection> {
        match mode {
            Mode::Auto => Ok(self.run_auto(a, b)),
            Mode::Counting => self.run_forced_counting(a, b),
            Mode::Hashed => Ok(self.run_forced_hashed(a, b)),
            Mode::TwoPointer => Ok(self.run_forced_two_pointer(a, b)),
        }
    }

    /// A ceiling past [`MAX_CEILING`] means no counting table can be
    /// built; table-building paths reject it as a precondition.
    fn ensure_table_ceiling(&self) -> Result<()> {
        if self.ceiling > MAX_CEILING {
            return Err(MintError::PreconditionViolation {
                message: format!(
                    "counting table ceiling {} exceeds the supported maximum {}; \
                     use hash-map or two-pointer instead",
                    self.ceiling, MAX_CEILING
                ),
            });
        }
        Ok(())
    }

    /// Classify, select, execute; the selector's rationale becomes the
    /// explanation.
    fn run_auto(&self, a: &[i64], b: &[i64]) -> Intersection {
        let mut classification = classify_with_ceiling(a, b, self.ceiling);
        // A range whose table cannot be allocated is not bounded for
        // selection purposes.
        classification.both_in_bounded_range &= self.ceiling <= MAX_CEILING;
        let choice = select_method(&classification);

        let values = match choice.method {
            Method::Counting => CountingIntersect::with_ceiling(self.ceiling).intersect(a, b),
            Method::Hashed => intersect_hashed(a, b),
            Method::TwoPointerPresorted => intersect_two_pointer(a, b, true),
            Method::TwoPointerSortFirst => intersect_two_pointer(a, b, false),
        };

        Intersection::new(
            values,
            choice.method,
            format!("auto selected {}: {}", choice.method, choice.rationale),
        )
    }

    /// Forced counting re-validates the range and ceiling preconditions;
    /// there is no silent fallback to another algorithm.
    fn run_forced_counting(&self, a: &[i64], b: &[i64]) -> Result<Intersection> {
        self.ensure_table_ceiling()?;
        if !in_bounded_range(a, self.ceiling) || !in_bounded_range(b, self.ceiling) {
            return Err(MintError::PreconditionViolation {
                message: format!(
                    "counting requires every value in [0, {}]; use hash-map or two-pointer instead",
                    self.ceiling
                ),
            });
        }

        let values = CountingIntersect::with_ceiling(self.ceiling).intersect(a, b);
        Ok(Intersection::new(
            values,
            Method::Counting,
            format!(
                "forced counting: values verified within [0, {}]",
                self.ceiling
            ),
        ))
    }

    fn run_forced_hashed(&self, a: &[i64], b: &[i64]) -> Intersection {
        Intersection::new(
            intersect_hashed(a, b),
            Method::Hashed,
            "forced hash-map: no range or ordering assumptions required".to_string(),
        )
    }

    /// Forced two-pointer detects sortedness itself and reports which path
    /// ran; unsorted input is sorted on defensive copies, never rejected.
    fn run_forced_two_pointer(&self, a: &[i64], b: &[i64]) -> Intersection {
        let already_sorted = is_non_decreasing(a) && is_non_decreasing(b);
        let values = intersect_two_pointer(a, b, already_sorted);

        if already_sorted {
            Intersection::new(
                values,
                Method::TwoPointerPresorted,
                "forced two-pointer: inputs already sorted, linear merge".to_string(),
            )
        } else {
            Intersection::new(
                values,
                Method::TwoPointerSortFirst,
                "forced two-pointer: inputs unsorted, sorted defensive copies first".to_string(),
            )
        }
    }

    /// Streaming run: the first sequence in memory, the second consumed
    /// through a chunk source.
    ///
    /// The mode picks the frequency backing. `Auto` uses the counting
    /// table when the first sequence fits `[0, ceiling]` (chunk values
    /// outside the range cannot match in that case) and the ceiling does
    /// not exceed [`MAX_CEILING`]; otherwise the frequency map. Forced
    /// `Counting` keeps its range and ceiling preconditions on the
    /// in-memory sequence. `TwoPointer` has no streaming form since it
    /// would need the whole second sequence materialized for sorting.
    pub fn run_streaming<S: ChunkSource>(
        &self,
        first: &[i64],
        chunks: &mut S,
        mode: Mode,
    ) -> Result<Intersection> {
        let first_in_range = in_bounded_range(first, self.ceiling);

        let (backing, method, explanation) = match mode {
            Mode::Auto => {
                if first_in_range && self.ceiling <= MAX_CEILING {
                    (
                        StreamingIntersect::bounded(self.ceiling),
                        Method::Counting,
                        format!(
                            "streaming auto: first sequence fits [0, {}], counting table backing",
                            self.ceiling
                        ),
                    )
                } else if first_in_range {
                    (
                        StreamingIntersect::unbounded(),
                        Method::Hashed,
                        format!(
                            "streaming auto: ceiling {} exceeds the counting table maximum, \
                             frequency map backing",
                            self.ceiling
                        ),
                    )
                } else {
                    (
                        StreamingIntersect::unbounded(),
                        Method::Hashed,
                        format!(
                            "streaming auto: values outside [0, {}], frequency map backing",
                            self.ceiling
                        ),
                    )
                }
            }
            Mode::Counting => {
                self.ensure_table_ceiling()?;
                if !first_in_range {
                    return Err(MintError::PreconditionViolation {
                        message: format!(
                            "counting requires every value in [0, {}]; use hash-map or two-pointer instead",
                            self.ceiling
                        ),
                    });
                }
                (
                    StreamingIntersect::bounded(self.ceiling),
                    Method::Counting,
                    format!(
                        "forced counting (streaming): first sequence verified within [0, {}]",
                        self.ceiling
                    ),
                )
            }
            Mode::Hashed => (
                StreamingIntersect::unbounded(),
                Method::Hashed,
                "forced hash-map (streaming): frequency map backing".to_string(),
            ),
            Mode::TwoPointer => {
                return Err(MintError::PreconditionViolation {
                    message: "two-pointer requires both sequences in memory; \
                              use counting or hash-map for chunked input"
                        .to_string(),
                });
            }
        };

        let values = backing.intersect(first, chunks)?;
        Ok(Intersection::new(values, method, explanation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::SliceChunkSource;

    fn sorted(mut values: Vec<i64>) -> Vec<i64> {
        values.sort_unstable();
        values
    }

    #[test]
    fn test_mode_tokens() {
        assert_eq!(Mode::from_str("auto"), Some(Mode::Auto));
        assert_eq!(Mode::from_str("counting"), Some(Mode::Counting));
        assert_eq!(Mode::from_str("hash-map"), Some(Mode::Hashed));
        assert_eq!(Mode::from_str("two-pointer"), Some(Mode::TwoPointer));
        assert_eq!(Mode::from_str("TWO-POINTER"), Some(Mode::TwoPointer));
        assert_eq!(Mode::from_str("bogus"), None);
        assert_eq!(Mode::Hashed.as_str(), "hash-map");
    }

    #[test]
    fn test_auto_picks_counting_for_unsorted_in_range() {
        let engine = IntersectEngine::new();
        let outcome = engine.run(&[1, 2, 2, 1], &[2, 2], Mode::Auto).unwrap();
        assert_eq!(outcome.method, Method::Counting);
        assert_eq!(outcome.values, vec![2, 2]);
        assert!(outcome.explanation.contains("counting"));
    }

    #[test]
    fn test_auto_picks_two_pointer_for_sorted() {
        let engine = IntersectEngine::new();
        let outcome = engine.run(&[1, 2, 3], &[2, 3, 4], Mode::Auto).unwrap();
        assert_eq!(outcome.method, Method::TwoPointerPresorted);
        assert_eq!(outcome.values, vec![2, 3]);
    }

    #[test]
    fn test_auto_picks_hashed_for_wide_unsorted() {
        let engine = IntersectEngine::new();
        let outcome = engine
            .run(&[2_000_000, 7], &[7, 2_000_000], Mode::Auto)
            .unwrap();
        assert_eq!(outcome.method, Method::Hashed);
        assert_eq!(sorted(outcome.values), vec![7, 2_000_000]);
    }

    #[test]
    fn test_forced_counting_precondition_violation() {
        let engine = IntersectEngine::new();
        let err = engine.run(&[1001], &[0], Mode::Counting).unwrap_err();
        assert_eq!(err.kind(), "PreconditionViolation");
        let message = err.to_string();
        assert!(message.contains("[0, 1000]"));
        assert!(message.contains("hash-map"));
        assert!(message.contains("two-pointer"));
    }

    #[test]
    fn test_forced_counting_in_range_succeeds() {
        let engine = IntersectEngine::new();
        let outcome = engine.run(&[1, 2, 2, 1], &[2, 2], Mode::Counting).unwrap();
        assert_eq!(outcome.method, Method::Counting);
        assert_eq!(outcome.values, vec![2, 2]);
    }

    #[test]
    fn test_forced_hashed_has_no_range_check() {
        let engine = IntersectEngine::new();
        let outcome = engine
            .run(&[2_000_000, 2_000_000], &[2_000_000], Mode::Hashed)
            .unwrap();
        assert_eq!(outcome.values, vec![2_000_000]);
    }

    #[test]
    fn test_forced_two_pointer_reports_presorted_path() {
        let engine = IntersectEngine::new();
        let outcome = engine.run(&[1, 2, 3], &[2, 3], Mode::TwoPointer).unwrap();
        assert_eq!(outcome.method, Method::TwoPointerPresorted);
        assert!(outcome.explanation.contains("already sorted"));
    }

    #[test]
    fn test_forced_two_pointer_reports_sort_first_path() {
        let engine = IntersectEngine::new();
        let outcome = engine
            .run(&[3, 1, 2], &[2, 1], Mode::TwoPointer)
            .unwrap();
        assert_eq!(outcome.method, Method::TwoPointerSortFirst);
        assert!(outcome.explanation.contains("unsorted"));
        assert_eq!(sorted(outcome.values), vec![1, 2]);
    }

    #[test]
    fn test_run_text_parses_permissively() {
        let engine = IntersectEngine::new();
        let outcome = engine.run_text("[1, 2, 2, 1]", "2, 2", Mode::Auto).unwrap();
        assert_eq!(outcome.values, vec![2, 2]);

        // Whitespace-only input intersects empty without error.
        let outcome = engine.run_text("   ", "1, 2", Mode::Auto).unwrap();
        assert!(outcome.values.is_empty());
    }

    #[test]
    fn test_custom_ceiling_changes_classification() {
        let engine = IntersectEngine::with_ceiling(100);

        // 500 is out of range for this engine, so auto falls through to
        // hash-map for unsorted input.
        let outcome = engine.run(&[500, 2], &[2, 500], Mode::Auto).unwrap();
        assert_eq!(outcome.method, Method::Hashed);

        let err = engine.run(&[500], &[2], Mode::Counting).unwrap_err();
        assert!(err.to_string().contains("[0, 100]"));
    }

    #[test]
    fn test_oversized_ceiling_forced_counting_is_structured_error() {
        let engine = IntersectEngine::with_ceiling(i64::MAX);
        let err = engine.run(&[1, 2], &[2], Mode::Counting).unwrap_err();
        assert_eq!(err.kind(), "PreconditionViolation");
        let message = err.to_string();
        assert!(message.contains("maximum"));
        assert!(message.contains("hash-map"));
    }

    #[test]
    fn test_oversized_ceiling_auto_avoids_counting() {
        let engine = IntersectEngine::with_ceiling(i64::MAX);
        let outcome = engine.run(&[2, 1], &[1, 2], Mode::Auto).unwrap();
        assert_eq!(outcome.method, Method::Hashed);
        assert_eq!(sorted(outcome.values), vec![1, 2]);
    }

    #[test]
    fn test_streaming_auto_bounded() {
        let engine = IntersectEngine::new();
        let second = vec![2, 2, 9];
        let mut source = SliceChunkSource::new(&second, 2);
        let outcome = engine
            .run_streaming(&[1, 2, 2, 1], &mut source, Mode::Auto)
            .unwrap();
        assert_eq!(outcome.method, Method::Counting);
        assert_eq!(outcome.values, vec![2, 2]);
        assert!(outcome.explanation.contains("counting table"));
    }

    #[test]
    fn test_streaming_auto_unbounded() {
        let engine = IntersectEngine::new();
        let second = vec![2_000_000];
        let mut source = SliceChunkSource::new(&second, 2);
        let outcome = engine
            .run_streaming(&[2_000_000, 1], &mut source, Mode::Auto)
            .unwrap();
        assert_eq!(outcome.method, Method::Hashed);
        assert_eq!(outcome.values, vec![2_000_000]);
    }

    #[test]
    fn test_oversized_ceiling_streaming_uses_map_backing() {
        let engine = IntersectEngine::with_ceiling(i64::MAX);
        let second = vec![3, 1];

        let mut source = SliceChunkSource::new(&second, 1);
        let outcome = engine
            .run_streaming(&[1, 3], &mut source, Mode::Auto)
            .unwrap();
        assert_eq!(outcome.method, Method::Hashed);
        assert_eq!(sorted(outcome.values), vec![1, 3]);

        let mut source = SliceChunkSource::new(&second, 1);
        let err = engine
            .run_streaming(&[1, 3], &mut source, Mode::Counting)
            .unwrap_err();
        assert_eq!(err.kind(), "PreconditionViolation");
    }

    #[test]
    fn test_streaming_forced_counting_checks_first_sequence() {
        let engine = IntersectEngine::new();
        let second = vec![1];
        let mut source = SliceChunkSource::new(&second, 1);
        let err = engine
            .run_streaming(&[1001], &mut source, Mode::Counting)
            .unwrap_err();
        assert_eq!(err.kind(), "PreconditionViolation");
    }

    #[test]
    fn test_streaming_rejects_two_pointer() {
        let engine = IntersectEngine::new();
        let second = vec![1, 2];
        let mut source = SliceChunkSource::new(&second, 1);
        let err = engine
            .run_streaming(&[1, 2], &mut source, Mode::TwoPointer)
            .unwrap_err();
        assert_eq!(err.kind(), "PreconditionViolation");
        assert!(err.to_string().contains("two-pointer"));
    }
}
