use clap::Parser;
use gzstream::utils::{logger, validation::Validate};
use gzstream::{
    CopyStats, GzipDecode, GzipEncode, GzipError, Mode, Result, StreamEngine, ZipperConfig,
};
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = ZipperConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("zipper: {}", e.user_friendly_message());
        return ExitCode::from(e.exit_code() as u8);
    }

    match run(&config) {
        Ok(stats) => {
            tracing::info!(
                "{} complete: {} bytes in, {} bytes out",
                stats.mode,
                stats.bytes_in,
                stats.bytes_out
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("zipper: {}", e.user_friendly_message());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(config: &ZipperConfig) -> Result<CopyStats> {
    let src = config.src()?;
    let dst = config.dst()?;
    tracing::info!("{} {} -> {}", config.mode(), src.display(), dst.display());

    let input = open(src, |p| File::open(p))?;
    let output = open(dst, |p| File::create(p))?;
    let codec = config.codec();

    match config.mode() {
        Mode::Compress => StreamEngine::new(GzipEncode::new(codec)).run(input, output),
        Mode::Decompress => StreamEngine::new(GzipDecode::new(codec)).run(input, output),
    }
}

fn open(path: &Path, how: fn(&Path) -> std::io::Result<File>) -> Result<File> {
    how(path).map_err(|source| GzipError::FileError {
        path: path.to_path_buf(),
        source,
    })
}
