//! Deterministic method selection policy.
//!
//! A total function from [`Classification`] to a concrete algorithm plus a
//! fixed rationale string. Pure decision logic; no parsing, no execution,
//! no state, which keeps the policy unit-testable on its own.

use crate::classify::Classification;
use std::fmt;

/// Intersection algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Frequency table over a bounded value range.
    Counting,
    /// Frequency map built from the shorter input.
    Hashed,
    /// Linear merge over inputs that are already sorted.
    TwoPointerPresorted,
    /// Defensive sort of both inputs, then the linear merge.
    TwoPointerSortFirst,
}

impl Method {
    /// Canonical token used in explanations and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Counting => "counting",
            Method::Hashed => "hash-map",
            Method::TwoPointerPresorted => "two-pointer-presorted",
            Method::TwoPointerSortFirst => "two-pointer-sort-first",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rationale attached when the sortedness rule fires.
pub const RATIONALE_PRESORTED: &str =
    "both inputs are already sorted; two-pointer merge runs in O(n+m) with no auxiliary structure";

/// Rationale attached when the bounded-range rule fires.
pub const RATIONALE_BOUNDED: &str =
    "all values lie in the bounded range; counting array runs in O(n+m) with a fixed-size table";

/// Rationale attached by the fallback rule.
pub const RATIONALE_UNBOUNDED: &str =
    "value domain is wide or unknown; hash map runs in O(n+m) average with O(min(n,m)) memory";

/// An algorithm choice plus the fixed rationale for the rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodChoice {
    pub method: Method,
    pub rationale: &'static str,
}

/// Select the algorithm for a classified input pair.
///
/// Decision tree (first matching rule wins):
/// 1. Both non-decreasing → two-pointer over the existing order
/// 2. Both within `[0, ceiling]` → counting table
/// 3. Otherwise → hash map
///
/// Sortedness outranks range-boundedness because it eliminates the
/// auxiliary structure entirely. The sort-first two-pointer variant is
/// never auto-selected; it is reachable only by forcing two-pointer mode
/// on unsorted input.
pub fn select_method(classification: &Classification) -> MethodChoice {
    if classification.both_non_decreasing {
        return MethodChoice {
            method: Method::TwoPointerPresorted,
            rationale: RATIONALE_PRESORTED,
        };
    }

    if classification.both_in_bounded_range {
        return MethodChoice {
            method: Method::Counting,
            rationale: RATIONALE_BOUNDED,
        };
    }

    MethodChoice {
        method: Method::Hashed,
        rationale: RATIONALE_UNBOUNDED,
    }
}
