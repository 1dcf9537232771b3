//! Top-level error type. Every variant ends the process with status 1.

use crate::ascii::DecodeError;
use crate::cli::UsageError;
use crate::config::ConfigError;
use crate::feed::FeedError;

/// Exit status for every failure, including explicit `help`.
pub const EXIT_FAILURE: i32 = 1;

/// Broad failure category, used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Config,
    Network,
    Data,
    Decode,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Usage(_) => ErrorKind::Usage,
            AppError::Config(_) => ErrorKind::Config,
            AppError::Feed(e) if e.is_network() => ErrorKind::Network,
            AppError::Feed(_) => ErrorKind::Data,
            AppError::Decode(_) => ErrorKind::Decode,
        }
    }

    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}
