//! Frequency tables backing the counting, hash-map, and streaming
//! algorithms.
//!
//! Two structures share one small surface (`add`, `take`, `count`):
//! a fixed-size counting table for bounded value domains and an
//! FxHashMap-backed frequency map for everything else. The [`Table`] enum
//! puts both behind a single dispatch point so the streaming drain loop is
//! written once.

use rustc_hash::FxHashMap;

/// Fixed-size frequency table over values in `[0, ceiling]`.
///
/// Out-of-range values are ignored by both [`add`](CountTable::add) and
/// [`take`](CountTable::take), so building from data that violates the
/// range silently under-counts. Callers that cannot guarantee the range
/// must use [`FreqMap`]; the engine enforces the range before forcing the
/// counting algorithm.
#[derive(Debug, Clone)]
pub struct CountTable {
    counts: Vec<u32>,
    ceiling: i64,
}

impl CountTable {
    /// Create an empty table covering `[0, ceiling]`. Allocates
    /// `ceiling + 1` slots; the engine rejects ceilings past
    /// [`MAX_CEILING`](crate::classify::MAX_CEILING) before building one.
    pub fn with_ceiling(ceiling: i64) -> Self {
        let ceiling = ceiling.max(0);
        Self {
            counts: vec![0; ceiling as usize + 1],
            ceiling,
        }
    }

    /// Build a table from a sequence, ignoring out-of-range values.
    pub fn from_values(values: &[i64], ceiling: i64) -> Self {
        let mut table = Self::with_ceiling(ceiling);
        for &v in values {
            table.add(v);
        }
        table
    }

    /// Record one occurrence of `value`. Out-of-range values are ignored.
    #[inline]
    pub fn add(&mut self, value: i64) {
        if (0..=self.ceiling).contains(&value) {
            self.counts[value as usize] += 1;
        }
    }

    /// Consume one occurrence of `value` if any remain; returns whether one
    /// was consumed. Out-of-range values never match.
    #[inline]
    pub fn take(&mut self, value: i64) -> bool {
        if !(0..=self.ceiling).contains(&value) {
            return false;
        }
        let slot = &mut self.counts[value as usize];
        if *slot > 0 {
            *slot -= 1;
            true
        } else {
            false
        }
    }

    /// Remaining count for `value`; 0 for out-of-range values.
    #[inline]
    pub fn count(&self, value: i64) -> u32 {
        if (0..=self.ceiling).contains(&value) {
            self.counts[value as usize]
        } else {
            0
        }
    }

    pub fn ceiling(&self) -> i64 {
        self.ceiling
    }
}

/// Frequency map for unbounded value domains.
#[derive(Debug, Clone, Default)]
pub struct FreqMap {
    counts: FxHashMap<i64, u32>,
}

impl FreqMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a sequence.
    pub fn from_values(values: &[i64]) -> Self {
        let mut counts = FxHashMap::with_capacity_and_hasher(values.len(), Default::default());
        for &v in values {
            *counts.entry(v).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Record one occurrence of `value`.
    #[inline]
    pub fn add(&mut self, value: i64) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// Consume one occurrence of `value` if any remain; returns whether one
    /// was consumed.
    #[inline]
    pub fn take(&mut self, value: i64) -> bool {
        match self.counts.get_mut(&value) {
            Some(slot) if *slot > 0 => {
                *slot -= 1;
                true
            }
            _ => false,
        }
    }

    /// Remaining count for `value`.
    #[inline]
    pub fn count(&self, value: i64) -> u32 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Number of distinct values tracked (including exhausted ones).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Either frequency structure behind one dispatch surface.
#[derive(Debug, Clone)]
pub enum Table {
    Bounded(CountTable),
    Unbounded(FreqMap),
}

impl Table {
    /// Empty bounded table covering `[0, ceiling]`.
    pub fn bounded(ceiling: i64) -> Self {
        Table::Bounded(CountTable::with_ceiling(ceiling))
    }

    /// Empty unbounded frequency map.
    pub fn unbounded() -> Self {
        Table::Unbounded(FreqMap::new())
    }

    /// Record every value of a sequence.
    pub fn add_all(&mut self, values: &[i64]) {
        for &v in values {
            self.add(v);
        }
    }

    #[inline]
    pub fn add(&mut self, value: i64) {
        match self {
            Table::Bounded(table) => table.add(value),
            Table::Unbounded(map) => map.add(value),
        }
    }

    #[inline]
    pub fn take(&mut self, value: i64) -> bool {
        match self {
            Table::Bounded(table) => table.take(value),
            Table::Unbounded(map) => map.take(value),
        }
    }

    #[inline]
    pub fn count(&self, value: i64) -> u32 {
        match self {
            Table::Bounded(table) => table.count(value),
            Table::Unbounded(map) => map.count(value),
        }
    }
}
