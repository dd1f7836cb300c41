use std::ffi::OsStr;
use std::fmt;
use std::time::Duration;

/// Direction of the transform applied between source and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl Mode {
    pub const DECOMPRESS_FLAG: &'static str = "-d";

    /// Only an exact `-d` in first position selects decompression.
    /// Arguments are compared as raw OS strings, so non-UTF-8 input is just "not `-d`".
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        match args.into_iter().next() {
            Some(first) if first.as_ref() == OsStr::new(Self::DECOMPRESS_FLAG) => Mode::Decompress,
            _ => Mode::Compress,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Compress => f.write_str("compress"),
            Mode::Decompress => f.write_str("decompress"),
        }
    }
}

/// Result of one block copy loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockCopy {
    pub blocks: u64,
    pub bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub mode: Mode,
    pub blocks: u64,
    /// Bytes consumed from the source handle.
    pub bytes_in: u64,
    /// Bytes emitted to the destination handle.
    pub bytes_out: u64,
    pub elapsed: Duration,
}

impl CopyStats {
    /// Compressed size over uncompressed size, whichever direction ran.
    pub fn ratio(&self) -> Option<f64> {
        let (packed, raw) = match self.mode {
            Mode::Compress => (self.bytes_out, self.bytes_in),
            Mode::Decompress => (self.bytes_in, self.bytes_out),
        };
        if raw == 0 {
            None
        } else {
            Some(packed as f64 / raw as f64)
        }
    }
}
