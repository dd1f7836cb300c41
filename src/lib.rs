pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{zipper::ZipperConfig, CliConfig};

pub use config::{CodecConfig, CompressionLevel};
pub use self::core::{
    engine::StreamEngine,
    gzip::{is_gzip, GzipDecode, GzipEncode},
    stream::copy_blocks,
};
pub use domain::model::{CopyStats, Mode};
pub use domain::ports::StreamTransform;
pub use utils::error::{GzipError, Result};
