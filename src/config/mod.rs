pub mod codec;
#[cfg(feature = "cli")]
pub mod zipper;

pub use codec::{CodecConfig, CompressionLevel};

#[cfg(feature = "cli")]
use crate::domain::model::Mode;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::ffi::OsString;

/// Arguments of the stdin/stdout tool.
///
/// The clap definition only describes the command. The runtime list comes from
/// [`CliConfig::from_args_os`], because clap would swallow a leading `--`.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "gzstream")]
#[command(about = "Gzip standard input to standard output, or gunzip it with -d")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Takes a full argv, program name first, without interpreting anything.
    pub fn from_args_os<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            args: argv.into_iter().skip(1).map(Into::into).collect(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_args_os(std::env::args_os())
    }

    pub fn mode(&self) -> Mode {
        Mode::from_args(&self.args)
    }
}
