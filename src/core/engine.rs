use crate::domain::model::CopyStats;
use crate::domain::ports::StreamTransform;
use crate::utils::error::Result;
use std::io::{Read, Write};

pub struct StreamEngine<T: StreamTransform> {
    transform: T,
}

impl<T: StreamTransform> StreamEngine<T> {
    pub fn new(transform: T) -> Self {
        Self { transform }
    }

    /// Runs the transform once; both handles are consumed and dropped before returning.
    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<CopyStats> {
        let mode = self.transform.mode();
        tracing::debug!("Starting {}", mode);

        match self.transform.apply(input, output) {
            Ok(stats) => {
                tracing::debug!(
                    "Finished {}: {} blocks, {} bytes in, {} bytes out, ratio {}, {:?}",
                    mode,
                    stats.blocks,
                    stats.bytes_in,
                    stats.bytes_out,
                    stats
                        .ratio()
                        .map(|r| format!("{:.3}", r))
                        .unwrap_or_else(|| "n/a".to_string()),
                    stats.elapsed
                );
                Ok(stats)
            }
            Err(e) => {
                tracing::error!(
                    "{} failed: {} (Category: {:?}, Severity: {:?})",
                    mode,
                    e,
                    e.category(),
                    e.severity()
                );
                Err(e)
            }
        }
    }
}
