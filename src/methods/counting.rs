//! Counting-array intersection for bounded value domains.

use crate::classify::DEFAULT_CEILING;
use crate::table::CountTable;

/// Counting-array intersection.
///
/// Builds a frequency table of size ceiling+1 from the first input in
/// O(n), then scans the second in O(m), emitting and decrementing matches.
/// Time O(n+m), space O(ceiling).
///
/// Every value must lie in `[0, ceiling]`. Out-of-range values are simply
/// invisible to the table, so calling this directly on data that violates
/// the range returns a silently incomplete result; the engine checks the
/// range before forcing this algorithm, and the auto policy never selects
/// it when the range check fails.
#[derive(Debug, Clone)]
pub struct CountingIntersect {
    ceiling: i64,
}

impl Default for CountingIntersect {
    fn default() -> Self {
        Self::new()
    }
}

impl CountingIntersect {
    /// Counting intersection over `[0, DEFAULT_CEILING]`.
    pub fn new() -> Self {
        Self {
            ceiling: DEFAULT_CEILING,
        }
    }

    /// Counting intersection over an explicit `[0, ceiling]`.
    pub fn with_ceiling(ceiling: i64) -> Self {
        Self { ceiling }
    }

    pub fn ceiling(&self) -> i64 {
        self.ceiling
    }

    /// Compute the multiset intersection of `a` and `b`.
    pub fn intersect(&self, a: &[i64], b: &[i64]) -> Vec<i64> {
        let mut table = CountTable::from_values(a, self.ceiling);
        let mut result = Vec::with_capacity(a.len().min(b.len()));
        for &y in b {
            if table.take(y) {
                result.push(y);
            }
        }
        result
    }
}

/// Counting intersection with the default ceiling.
pub fn intersect_counting(a: &[i64], b: &[i64]) -> Vec<i64> {
    CountingIntersect::new().intersect(a, b)
}
