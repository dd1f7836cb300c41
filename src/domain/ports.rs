use crate::domain::model::{CopyStats, Mode};
use crate::utils::error::Result;
use std::io::{Read, Write};

/// A byte-stream transform run once over a source and destination pair.
///
/// Implementations must finalize the destination (trailer written, flushed)
/// before returning `Ok`. On error the handles are dropped; no partial-output
/// guarantee is made.
pub trait StreamTransform {
    fn mode(&self) -> Mode;

    fn apply<R: Read, W: Write>(&self, input: R, output: W) -> Result<CopyStats>;
}
