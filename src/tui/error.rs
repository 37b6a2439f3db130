use std::io;

use thiserror::Error;
use tokio::sync::mpsc::error::TrySendError;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("Failed to send refresh signal")]
    RefreshSignalFailed(#[from] TrySendError<()>),
}

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;
