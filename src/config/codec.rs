use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use flate2::Compression;

/// Size of one read/write block in the copy loop.
pub const DEFAULT_BLOCK_SIZE: usize = 8 * 1024 * 1024;
/// Read buffer in front of the gzip decoder.
pub const DEFAULT_DECODER_BUFFER: usize = 8 * 1024;
pub const MAX_BLOCK_SIZE: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    Fast,
    #[default]
    Default,
    Level(u32),
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::Fast => Compression::fast(),
            CompressionLevel::Default => Compression::default(),
            CompressionLevel::Level(n) => Compression::new(n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    pub block_size: usize,
    pub decoder_buffer: usize,
    pub level: CompressionLevel,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            decoder_buffer: DEFAULT_DECODER_BUFFER,
            level: CompressionLevel::Default,
        }
    }
}

impl CodecConfig {
    pub fn with_level(mut self, level: CompressionLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }
}

impl Validate for CodecConfig {
    fn validate(&self) -> Result<()> {
        validate_range("block_size", self.block_size, 1, MAX_BLOCK_SIZE)?;
        validate_range("decoder_buffer", self.decoder_buffer, 1, MAX_BLOCK_SIZE)?;
        if let CompressionLevel::Level(n) = self.level {
            validate_range("level", n, 0, 9)?;
        }
        Ok(())
    }
}
