use crate::config::codec::{CodecConfig, CompressionLevel};
use crate::domain::model::Mode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "zipper")]
#[command(about = "Gzip or gunzip one file into another")]
pub struct ZipperConfig {
    /// The source location of the file to zip/unzip
    #[arg(long)]
    pub src: Option<PathBuf>,

    /// The destination location of the file, after zip/unzip
    #[arg(long)]
    pub dst: Option<PathBuf>,

    /// Perform gunzip instead of gzip
    #[arg(long)]
    pub decompress: bool,

    /// Use the fastest compression level
    #[arg(long)]
    pub fast: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ZipperConfig {
    pub fn mode(&self) -> Mode {
        if self.decompress {
            Mode::Decompress
        } else {
            Mode::Compress
        }
    }

    pub fn codec(&self) -> CodecConfig {
        let level = if self.fast {
            CompressionLevel::Fast
        } else {
            CompressionLevel::Default
        };
        CodecConfig::default().with_level(level)
    }

    pub fn src(&self) -> Result<&PathBuf> {
        validate_required_field("src", &self.src)
    }

    pub fn dst(&self) -> Result<&PathBuf> {
        validate_required_field("dst", &self.dst)
    }
}

impl Validate for ZipperConfig {
    fn validate(&self) -> Result<()> {
        validate_path("src", self.src()?)?;
        validate_path("dst", self.dst()?)?;
        self.codec().validate()
    }
}
