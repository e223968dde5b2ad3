use thiserror::Error;

/// Error type for myprobe operations
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not load configuration: {0}")]
    Config(String),

    #[error("Failed to close connection: {0}")]
    CloseFailed(String),
}

/// Result type alias for myprobe operations
pub type Result<T> = std::result::Result<T, ProbeError>;
