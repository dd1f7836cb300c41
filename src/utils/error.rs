use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GzipError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot access {}: {source}", .path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input is not a valid gzip stream (bad magic, truncated, checksum mismatch).
    Format,
    /// The destination stopped accepting bytes.
    Output,
    Io,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl GzipError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GzipError::IoError(e) | GzipError::FileError { source: e, .. } => match e.kind() {
                ErrorKind::InvalidData | ErrorKind::InvalidInput | ErrorKind::UnexpectedEof => {
                    ErrorCategory::Format
                }
                ErrorKind::BrokenPipe | ErrorKind::WriteZero => ErrorCategory::Output,
                _ => ErrorCategory::Io,
            },
            GzipError::InvalidConfigValueError { .. } | GzipError::MissingConfigError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit status for this error. Never 0.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Format => format!("input is not valid gzip data ({})", self),
            ErrorCategory::Output => format!("output closed before all data was written ({})", self),
            ErrorCategory::Io => self.to_string(),
            ErrorCategory::Config => format!("invalid arguments: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Format => "check that the input was produced by a gzip encoder and is complete",
            ErrorCategory::Output => "make sure the consumer reads the whole output stream",
            ErrorCategory::Io => "check file permissions and available disk space",
            ErrorCategory::Config => "run with --help to see the accepted options",
        }
    }
}

pub type Result<T> = std::result::Result<T, GzipError>;
