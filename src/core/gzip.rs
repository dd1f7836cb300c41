//! Gzip transforms over arbitrary `Read`/`Write` handles, via flate2.

use crate::config::codec::CodecConfig;
use crate::core::stream::{copy_blocks, CountingReader, CountingWriter};
use crate::domain::model::{BlockCopy, CopyStats, Mode};
use crate::domain::ports::StreamTransform;
use crate::utils::error::Result;
use flate2::bufread::GzDecoder;
use flate2::{Compression, GzBuilder};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::time::Instant;

pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// True when `prefix` starts with the gzip magic header.
pub fn is_gzip(prefix: &[u8]) -> bool {
    prefix.starts_with(&GZIP_MAGIC)
}

/// Consumes up to two bytes and returns them; fewer only at end of input.
fn take_magic<B: BufRead>(reader: &mut B) -> io::Result<Vec<u8>> {
    let mut prefix = Vec::with_capacity(GZIP_MAGIC.len());
    while prefix.len() < GZIP_MAGIC.len() {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }
        let take = (GZIP_MAGIC.len() - prefix.len()).min(available.len());
        prefix.extend_from_slice(&available[..take]);
        reader.consume(take);
    }
    Ok(prefix)
}

#[derive(Debug, Clone, Default)]
pub struct GzipEncode {
    config: CodecConfig,
}

impl GzipEncode {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl StreamTransform for GzipEncode {
    fn mode(&self) -> Mode {
        Mode::Compress
    }

    fn apply<R: Read, W: Write>(&self, mut input: R, output: W) -> Result<CopyStats> {
        let started = Instant::now();
        let mut sink = CountingWriter::new(output);

        // mtime 0 and no file name keep the header reproducible
        let mut encoder = GzBuilder::new()
            .mtime(0)
            .write(&mut sink, Compression::from(self.config.level));
        let copied = copy_blocks(&mut input, &mut encoder, self.config.block_size)?;
        encoder.finish()?;
        sink.flush()?;

        Ok(CopyStats {
            mode: Mode::Compress,
            blocks: copied.blocks,
            bytes_in: copied.bytes,
            bytes_out: sink.count(),
            elapsed: started.elapsed(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct GzipDecode {
    config: CodecConfig,
}

impl GzipDecode {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }
}

impl StreamTransform for GzipDecode {
    fn mode(&self) -> Mode {
        Mode::Decompress
    }

    fn apply<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<CopyStats> {
        let started = Instant::now();
        let mut source = CountingReader::new(input);

        let mut copied = BlockCopy::default();
        {
            let mut buffered = BufReader::with_capacity(self.config.decoder_buffer, &mut source);
            let mut members = 0u64;
            loop {
                let prefix = take_magic(&mut buffered)?;
                // After the first member, anything that is not another member is ignored.
                if members > 0 && !is_gzip(&prefix) {
                    if !prefix.is_empty() {
                        tracing::debug!("Ignoring trailing data after {} gzip member(s)", members);
                    }
                    break;
                }

                let mut decoder = GzDecoder::new(prefix.as_slice().chain(&mut buffered));
                let part = copy_blocks(&mut decoder, &mut output, self.config.block_size)?;
                copied.blocks += part.blocks;
                copied.bytes += part.bytes;
                members += 1;
            }
        }
        output.flush()?;

        Ok(CopyStats {
            mode: Mode::Decompress,
            blocks: copied.blocks,
            bytes_in: source.count(),
            bytes_out: copied.bytes,
            elapsed: started.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ErrorCategory, GzipError};
    use flate2::read::GzDecoder;
    use flate2::write::GzEncoder;

    fn compress(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzipEncode::default().apply(data, &mut out).unwrap();
        out
    }

    fn decompress(data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        GzipDecode::default().apply(data, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_hello_world_round_trip() {
        let packed = compress(b"hello world");
        assert!(is_gzip(&packed));
        assert_eq!(decompress(&packed).unwrap(), b"hello world");
    }

    #[test]
    fn test_empty_round_trip() {
        let packed = compress(b"");
        assert!(is_gzip(&packed));
        // header (10) + empty deflate block + trailer (8)
        assert!(packed.len() >= 18);
        assert!(decompress(&packed).unwrap().is_empty());
    }

    #[test]
    fn test_trailer_carries_crc_and_size() {
        let data = b"hello world";
        let packed = compress(data);
        let trailer = &packed[packed.len() - 8..];

        let isize = u32::from_le_bytes([trailer[4], trailer[5], trailer[6], trailer[7]]);
        assert_eq!(isize, data.len() as u32);

        let mut crc = flate2::Crc::new();
        crc.update(data);
        let stored = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
        assert_eq!(stored, crc.sum());
    }

    #[test]
    fn test_output_readable_by_plain_decoder() {
        let data = b"layer contents ".repeat(1000);
        let packed = compress(&data);

        let mut decoded = Vec::new();
        GzDecoder::new(packed.as_slice())
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_accepts_foreign_encoder_output() {
        let mut encoder = GzBuilder::new()
            .filename("layer.tar")
            .comment("built elsewhere")
            .write(Vec::new(), Compression::best());
        encoder.write_all(b"foreign payload").unwrap();
        let packed = encoder.finish().unwrap();

        assert_eq!(decompress(&packed).unwrap(), b"foreign payload");
    }

    #[test]
    fn test_multi_member_stream() {
        let mut packed = compress(b"first,");
        let mut second = GzEncoder::new(Vec::new(), Compression::fast());
        second.write_all(b"second").unwrap();
        packed.extend(second.finish().unwrap());

        assert_eq!(decompress(&packed).unwrap(), b"first,second");
    }

    #[test]
    fn test_garbage_input_fails() {
        let garbage: Vec<u8> = (0..4096u32).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect();
        assert!(!is_gzip(&garbage));

        let err = decompress(&garbage).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Format);
    }

    #[test]
    fn test_truncated_stream_fails() {
        let packed = compress(&b"truncate me please ".repeat(64));
        let cut = &packed[..packed.len() - 6];

        let err = decompress(cut).unwrap_err();
        assert!(matches!(err, GzipError::IoError(_)));
    }

    #[test]
    fn test_checksum_mismatch_fails() {
        let mut packed = compress(b"checksummed payload");
        let crc_at = packed.len() - 8;
        packed[crc_at] ^= 0xff;

        assert!(decompress(&packed).is_err());
    }

    #[test]
    fn test_stats() {
        let data = vec![b'a'; 100_000];
        let mut packed = Vec::new();
        let config = CodecConfig::default().with_block_size(30_000);
        let stats = GzipEncode::new(config).apply(data.as_slice(), &mut packed).unwrap();

        assert_eq!(stats.mode, Mode::Compress);
        assert_eq!(stats.blocks, 4);
        assert_eq!(stats.bytes_in, 100_000);
        assert_eq!(stats.bytes_out, packed.len() as u64);

        let mut unpacked = Vec::new();
        let stats = GzipDecode::new(config).apply(packed.as_slice(), &mut unpacked).unwrap();
        assert_eq!(stats.bytes_in, packed.len() as u64);
        assert_eq!(stats.bytes_out, 100_000);
        assert_eq!(unpacked, data);
    }

    #[test]
    fn test_block_size_does_not_change_output() {
        let data: Vec<u8> = (0..50_000u32).map(|i| (i % 97) as u8).collect();
        let packed = compress(&data);

        let mut small = Vec::new();
        GzipDecode::new(CodecConfig::default().with_block_size(7))
            .apply(packed.as_slice(), &mut small)
            .unwrap();
        let mut large = Vec::new();
        GzipDecode::default().apply(packed.as_slice(), &mut large).unwrap();
        assert_eq!(small, large);

        let repacked = {
            let mut out = Vec::new();
            GzipEncode::new(CodecConfig::default().with_block_size(13))
                .apply(data.as_slice(), &mut out)
                .unwrap();
            out
        };
        assert_eq!(decompress(&repacked).unwrap(), data);
    }

    #[test]
    fn test_trailing_zero_padding_ignored() {
        let mut packed = compress(b"hello world");
        packed.extend_from_slice(&[0u8; 512]);

        assert_eq!(decompress(&packed).unwrap(), b"hello world");
    }

    #[test]
    fn test_trailing_non_member_bytes_ignored() {
        let mut packed = compress(b"first,");
        packed.extend(compress(b"second"));
        packed.extend_from_slice(b"\x1f not another member");

        assert_eq!(decompress(&packed).unwrap(), b"first,second");
    }

    #[test]
    fn test_member_boundary_with_tiny_read_buffer() {
        let mut packed = compress(b"one,");
        packed.extend(compress(b"two"));
        packed.push(0x1f);
        let config = CodecConfig {
            decoder_buffer: 1,
            ..CodecConfig::default()
        };

        let mut out = Vec::new();
        GzipDecode::new(config).apply(packed.as_slice(), &mut out).unwrap();
        assert_eq!(out, b"one,two");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_encode_surfaces_closed_output() {
        let err = GzipEncode::default()
            .apply(&b"hello world"[..], ClosedPipe)
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_decode_surfaces_closed_output() {
        let packed = compress(b"hello world");
        let err = GzipDecode::default()
            .apply(packed.as_slice(), ClosedPipe)
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Output);
    }
}
