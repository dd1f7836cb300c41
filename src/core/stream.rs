//! Block copy loop and byte-counting handle wrappers.

use crate::domain::model::BlockCopy;
use crate::utils::error::{GzipError, Result};
use std::io::{self, ErrorKind, Read, Write};

/// Copies `reader` into `writer` one block at a time until a read returns 0.
///
/// Each non-empty block is written in full before the next read. Interrupted
/// reads are reissued; every other error ends the copy.
pub fn copy_blocks<R, W>(reader: &mut R, writer: &mut W, block_size: usize) -> Result<BlockCopy>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    if block_size == 0 {
        return Err(GzipError::InvalidConfigValueError {
            field: "block_size".to_string(),
            value: "0".to_string(),
            reason: "Block size must be positive".to_string(),
        });
    }

    let mut buffer = vec![0u8; block_size];
    let mut copied = BlockCopy::default();

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        writer.write_all(&buffer[..n])?;
        copied.blocks += 1;
        copied.bytes += n as u64;
        tracing::trace!(block = copied.blocks, len = n, "block copied");
    }

    Ok(copied)
}

pub struct CountingReader<R> {
    inner: R,
    count: u64,
}

impl<R: Read> CountingReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, count: 0 }
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}

pub struct CountingWriter<W> {
    inner: W,
    count: u64,
}

impl<W: Write> CountingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
