//! Bounded-memory streaming intersection.
//!
//! For the case where the second sequence cannot fit in memory: the
//! frequency structure is built eagerly from the first sequence, then the
//! second is drained batch by batch through a [`ChunkSource`]. Per-element
//! behavior is identical to the in-memory variants; the only pause point
//! is the chunk boundary while the source produces the next batch.

use crate::classify::DEFAULT_CEILING;
use crate::error::Result;
use crate::stream::ChunkSource;
use crate::table::Table;

/// Streaming intersection configuration.
///
/// `bounded(ceiling)` backs the frequency structure with a fixed-size
/// counting table; chunk values outside `[0, ceiling]` can never match and
/// are skipped. `unbounded()` uses a frequency map and accepts any value.
#[derive(Debug, Clone)]
pub struct StreamingIntersect {
    ceiling: Option<i64>,
}

impl Default for StreamingIntersect {
    fn default() -> Self {
        Self::bounded(DEFAULT_CEILING)
    }
}

impl StreamingIntersect {
    /// Counting-table backing for a value domain known to fit `[0, ceiling]`.
    pub fn bounded(ceiling: i64) -> Self {
        Self {
            ceiling: Some(ceiling),
        }
    }

    /// Frequency-map backing for wide or unknown value domains.
    pub fn unbounded() -> Self {
        Self { ceiling: None }
    }

    /// True when the counting-table backing is configured.
    pub fn is_bounded(&self) -> bool {
        self.ceiling.is_some()
    }

    /// Intersect an in-memory first sequence against a chunked second
    /// sequence, draining the source to completion.
    ///
    /// Source exhaustion is normal termination. Only source I/O failures
    /// propagate; the values themselves never cause an error.
    pub fn intersect<S: ChunkSource>(&self, first: &[i64], chunks: &mut S) -> Result<Vec<i64>> {
        let mut table = match self.ceiling {
            Some(ceiling) => Table::bounded(ceiling),
            None => Table::unbounded(),
        };
        table.add_all(first);

        let mut result = Vec::new();
        while let Some(chunk) = chunks.next_chunk()? {
            for &y in &chunk {
                if table.take(y) {
                    result.push(y);
                }
            }
        }
        Ok(result)
    }
}
