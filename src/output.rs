//! Efficient output formatting for value lists and reports.
//!
//! Uses itoa for integer formatting and ryu for float formatting to avoid
//! allocation in the hot path.

use crate::error::Result;
use std::io::{BufWriter, Write};

/// Buffer size for ListWriter (256KB default).
const DEFAULT_BUFFER_SIZE: usize = 256 * 1024;

/// Buffered writer for integer lists and report rows.
pub struct ListWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
    ryu_buf: ryu::Buffer,
}

impl<W: Write> ListWriter<W> {
    /// Create a new ListWriter with the default buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, output)
    }

    /// Create a new ListWriter with a specific buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
            ryu_buf: ryu::Buffer::new(),
        }
    }

    /// Write an integer using itoa.
    #[inline]
    pub fn write_int<I: itoa::Integer>(&mut self, n: I) -> Result<()> {
        self.writer.write_all(self.itoa_buf.format(n).as_bytes())?;
        Ok(())
    }

    /// Write a float using ryu.
    #[inline]
    pub fn write_float(&mut self, f: f64) -> Result<()> {
        self.writer.write_all(self.ryu_buf.format(f).as_bytes())?;
        Ok(())
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        Ok(())
    }

    /// Write a tab character.
    #[inline]
    pub fn write_tab(&mut self) -> Result<()> {
        self.writer.write_all(b"\t")?;
        Ok(())
    }

    /// Write a newline character.
    #[inline]
    pub fn write_newline(&mut self) -> Result<()> {
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write a whole sequence on one line, values separated by `sep`.
    pub fn write_values(&mut self, values: &[i64], sep: u8) -> Result<()> {
        for (i, &v) in values.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(&[sep])?;
            }
            self.write_int(v)?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write values in fixed-size groups, one group per line.
    pub fn write_grouped(&mut self, values: &[i64], per_line: usize) -> Result<()> {
        for group in values.chunks(per_line.max(1)) {
            for (i, &v) in group.iter().enumerate() {
                if i > 0 {
                    self.writer.write_all(b" ")?;
                }
                self.write_int(v)?;
            }
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Get mutable access to the underlying buffered writer.
    pub fn inner_mut(&mut self) -> &mut BufWriter<W> {
        &mut self.writer
    }
}
