//! Chunked consumption of sequences too large to materialize.
//!
//! The streaming algorithm never sees the second sequence as a whole; it
//! pulls finite batches from a [`ChunkSource`] until the source reports
//! exhaustion. Sources exist for in-memory slices (test double), buffered
//! readers, memory-mapped files, and crossbeam channels.

pub mod scan;
pub mod source;

pub use source::{
    channel_source, ChannelChunkSource, ChunkSource, FileChunkSource, ReaderChunkSource,
    SliceChunkSource, DEFAULT_CHUNK_LEN,
};
