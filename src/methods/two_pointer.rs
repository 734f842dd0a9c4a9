//! Two-pointer merge intersection for sorted inputs.

use std::cmp::Ordering;

/// Two-pointer intersection.
///
/// With `assume_sorted` the linear merge runs directly over the borrowed
/// inputs in O(n+m). Without it, both inputs are copied and sorted first
/// (O(n log n + m log m)); the originals are never reordered in place.
///
/// Asserting `assume_sorted` on inputs that are not actually sorted yields
/// an incomplete result, not an error; callers that cannot guarantee
/// ordering pass `false` or go through the engine, which detects
/// sortedness itself.
pub fn intersect_two_pointer(a: &[i64], b: &[i64], assume_sorted: bool) -> Vec<i64> {
    if assume_sorted {
        return merge_sorted(a, b);
    }

    let mut a_sorted = a.to_vec();
    let mut b_sorted = b.to_vec();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    merge_sorted(&a_sorted, &b_sorted)
}

/// Linear merge over two sorted slices: equal values are emitted and both
/// cursors advance, otherwise the cursor behind the smaller value advances.
/// Terminates when either cursor exhausts its slice.
#[inline]
fn merge_sorted(a: &[i64], b: &[i64]) -> Vec<i64> {
    let mut result = Vec::with_capacity(a.len().min(b.len()));
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }

    result
}
