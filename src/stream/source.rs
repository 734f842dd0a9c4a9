//! Chunk sources: on-demand producers of finite integer batches.
//!
//! The streaming algorithm is written against the [`ChunkSource`] trait
//! alone, so any backend that can hand over batches of integers plugs in:
//! an in-memory slice for tests, a buffered reader, a memory-mapped file,
//! or a channel fed by another thread. No backend is coupled to an async
//! runtime; a blocking channel stands in where a producer runs elsewhere.

use crate::error::Result;
use crate::stream::scan::scan_integers;
use crossbeam_channel::{bounded, Receiver, Sender};
use memchr::memchr;
use memmap2::Mmap;
use std::fs::File;
use std::io::BufRead;
use std::path::Path;

/// Default number of integers per chunk for the built-in sources.
pub const DEFAULT_CHUNK_LEN: usize = 4096;

/// A finite, on-demand producer of integer batches.
///
/// `Ok(None)` means the source is exhausted, which is normal termination
/// for every consumer in this crate. Errors are I/O failures only; a
/// source never fails because of the values it carries.
pub trait ChunkSource {
    fn next_chunk(&mut self) -> Result<Option<Vec<i64>>>;
}

/// In-memory source over a borrowed slice, yielding fixed-length chunks.
/// The test double for the streaming algorithm.
pub struct SliceChunkSource<'a> {
    values: &'a [i64],
    pos: usize,
    chunk_len: usize,
}

impl<'a> SliceChunkSource<'a> {
    pub fn new(values: &'a [i64], chunk_len: usize) -> Self {
        Self {
            values,
            pos: 0,
            chunk_len: chunk_len.max(1),
        }
    }
}

impl ChunkSource for SliceChunkSource<'_> {
    fn next_chunk(&mut self) -> Result<Option<Vec<i64>>> {
        if self.pos >= self.values.len() {
            return Ok(None);
        }
        let end = (self.pos + self.chunk_len).min(self.values.len());
        let chunk = self.values[self.pos..end].to_vec();
        self.pos = end;
        Ok(Some(chunk))
    }
}

/// Line-oriented source over any buffered reader.
///
/// Lines are read as raw bytes (input need not be valid UTF-8), scanned
/// permissively (same noise policy as the text parser) and accumulated
/// until the chunk holds at least `chunk_len` integers. A chunk may run
/// past `chunk_len` to finish its final line.
pub struct ReaderChunkSource<R> {
    reader: R,
    chunk_len: usize,
    line: Vec<u8>,
    done: bool,
}

impl<R: BufRead> ReaderChunkSource<R> {
    pub fn new(reader: R, chunk_len: usize) -> Self {
        Self {
            reader,
            chunk_len: chunk_len.max(1),
            line: Vec::with_capacity(1024),
            done: false,
        }
    }
}

impl<R: BufRead> ChunkSource for ReaderChunkSource<R> {
    fn next_chunk(&mut self) -> Result<Option<Vec<i64>>> {
        if self.done {
            return Ok(None);
        }

        let mut chunk = Vec::with_capacity(self.chunk_len);
        while chunk.len() < self.chunk_len {
            self.line.clear();
            let bytes_read = self.reader.read_until(b'\n', &mut self.line)?;
            if bytes_read == 0 {
                self.done = true;
                break;
            }
            scan_integers(&self.line, &mut chunk);
        }

        if chunk.is_empty() {
            Ok(None)
        } else {
            Ok(Some(chunk))
        }
    }
}

/// Memory-mapped file source.
///
/// The file is mapped once and scanned line by line on demand; only the
/// current chunk is ever materialized as values. Memory is bounded by the
/// chunk length plus the densest single line.
#[derive(Debug)]
pub struct FileChunkSource {
    mmap: Mmap,
    pos: usize,
    chunk_len: usize,
}

impl FileChunkSource {
    pub fn open<P: AsRef<Path>>(path: P, chunk_len: usize) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self {
            mmap,
            pos: 0,
            chunk_len: chunk_len.max(1),
        })
    }
}

impl ChunkSource for FileChunkSource {
    fn next_chunk(&mut self) -> Result<Option<Vec<i64>>> {
        let data = &self.mmap[..];
        if self.pos >= data.len() {
            return Ok(None);
        }

        let mut chunk = Vec::with_capacity(self.chunk_len);
        while chunk.len() < self.chunk_len && self.pos < data.len() {
            let line_end = match memchr(b'\n', &data[self.pos..]) {
                Some(offset) => self.pos + offset,
                None => data.len(),
            };
            scan_integers(&data[self.pos..line_end], &mut chunk);
            self.pos = line_end + 1;
        }

        if chunk.is_empty() {
            Ok(None)
        } else {
            Ok(Some(chunk))
        }
    }
}

/// Channel-fed source for producers running on another thread.
///
/// Receiving blocks until a batch arrives; a disconnected channel (all
/// senders dropped) is exhaustion, not an error.
pub struct ChannelChunkSource {
    receiver: Receiver<Vec<i64>>,
}

impl ChannelChunkSource {
    pub fn new(receiver: Receiver<Vec<i64>>) -> Self {
        Self { receiver }
    }
}

impl ChunkSource for ChannelChunkSource {
    fn next_chunk(&mut self) -> Result<Option<Vec<i64>>> {
        match self.receiver.recv() {
            Ok(chunk) => Ok(Some(chunk)),
            Err(_) => Ok(None),
        }
    }
}

/// Create a bounded channel plus the source wrapping its receiving end.
/// The producer side applies backpressure once `capacity` batches queue up.
pub fn channel_source(capacity: usize) -> (Sender<Vec<i64>>, ChannelChunkSource) {
    let (sender, receiver) = bounded(capacity);
    (sender, ChannelChunkSource::new(receiver))
}
