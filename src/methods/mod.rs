//! The four multiset intersection algorithms.
//!
//! All four share one contract: given sequences A and B, the result carries
//! `min(count(v, A), count(v, B))` occurrences of every value v. Result
//! order is unspecified and differs between algorithms; inputs are never
//! mutated (algorithms that reorder work on defensive copies).

pub mod counting;
pub mod hashed;
pub mod streaming;
pub mod two_pointer;

pub use counting::{intersect_counting, CountingIntersect};
pub use hashed::intersect_hashed;
pub use streaming::StreamingIntersect;
pub use two_pointer::intersect_two_pointer;
