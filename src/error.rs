use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutomationError {
    #[error("Run cancelled by operator")]
    Cancelled,

    #[error("Input error: {0}")]
    Input(String),

    #[error("Desktop input failed: {0}")]
    Desktop(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("COM automation error: {0}")]
    Com(String),

    #[error("File error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Gave up waiting for {label} after {waited_secs}s")]
    PollTimeout { label: String, waited_secs: u64 },

    #[error("Rainfall data error: {0}")]
    Rainfall(String),

    #[error("Unsupported platform: {0}")]
    Unsupported(String),
}

impl AutomationError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AutomationError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AutomationError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, AutomationError>;
