//! Input classification for method selection.
//!
//! Inspects two integer sequences and reports the two facts the selection
//! policy cares about: are both non-decreasing, and do all values fit the
//! bounded range `[0, ceiling]`. Classification is a pure function of the
//! inputs; nothing is cached between calls.

/// Default bounded-range ceiling. A counting table sized for this ceiling
/// covers the nominal problem constraint (values in 0..=1000).
pub const DEFAULT_CEILING: i64 = 1000;

/// Largest ceiling a counting table will be built for. The table
/// allocates `ceiling + 1` u32 slots, so this caps the allocation at
/// roughly 400 MB; the engine refuses to build tables past it and auto
/// selection treats such a range as unbounded.
pub const MAX_CEILING: i64 = 100_000_000;

/// Observed characteristics of a pair of input sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Both sequences are non-decreasing left to right.
    pub both_non_decreasing: bool,
    /// Every value of both sequences lies in `[0, ceiling]`.
    pub both_in_bounded_range: bool,
}

/// Classify a pair of sequences against [`DEFAULT_CEILING`].
pub fn classify(a: &[i64], b: &[i64]) -> Classification {
    classify_with_ceiling(a, b, DEFAULT_CEILING)
}

/// Classify a pair of sequences against an explicit ceiling.
pub fn classify_with_ceiling(a: &[i64], b: &[i64], ceiling: i64) -> Classification {
    Classification {
        both_non_decreasing: is_non_decreasing(a) && is_non_decreasing(b),
        both_in_bounded_range: in_bounded_range(a, ceiling) && in_bounded_range(b, ceiling),
    }
}

/// Single left-to-right scan. Empty and one-element sequences are
/// non-decreasing.
#[inline]
pub fn is_non_decreasing(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// True when every value lies in `[0, ceiling]`. Vacuously true for an
/// empty sequence.
#[inline]
pub fn in_bounded_range(values: &[i64], ceiling: i64) -> bool {
    values.iter().all(|&v| (0..=ceiling).contains(&v))
}
