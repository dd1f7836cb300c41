pub mod engine;
pub mod gzip;
pub mod stream;

pub use crate::domain::model::{BlockCopy, CopyStats, Mode};
pub use crate::domain::ports::StreamTransform;
pub use crate::utils::error::Result;
