//! Hash-map intersection for unbounded value domains.

use crate::table::FreqMap;

/// Hash-map intersection. No range restriction.
///
/// The frequency map is built from the shorter input, so auxiliary space
/// is O(min(n, m)); the longer input is scanned, emitting and decrementing
/// matches. Average time O(n+m).
pub fn intersect_hashed(a: &[i64], b: &[i64]) -> Vec<i64> {
    // Build from the shorter side to keep the map small.
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut map = FreqMap::from_values(short);
    let mut result = Vec::with_capacity(short.len());
    for &y in long {
        if map.take(y) {
            result.push(y);
        }
    }
    result
}
