use clap::CommandFactory;
use gzstream::utils::logger;
use gzstream::{
    CliConfig, CodecConfig, CopyStats, GzipDecode, GzipEncode, Mode, Result, StreamEngine,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::from_env();

    logger::init_cli_logger(false);

    let mode = config.mode();
    tracing::debug!("CLI args: {:?}, mode: {}", config.args, mode);

    match run(mode, CodecConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!(
                "{}: {}",
                CliConfig::command().get_name(),
                e.user_friendly_message()
            );
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Both standard handles are locked here and released when the engine returns.
fn run(mode: Mode, codec: CodecConfig) -> Result<CopyStats> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match mode {
        Mode::Compress => StreamEngine::new(GzipEncode::new(codec)).run(stdin, stdout),
        Mode::Decompress => StreamEngine::new(GzipDecode::new(codec)).run(stdin, stdout),
    }
}
