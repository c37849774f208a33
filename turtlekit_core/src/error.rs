//! Error types shared across the turtlekit crates.

use thiserror::Error;

/// Result alias used throughout turtlekit
pub type TurtlekitResult<T> = Result<T, TurtlekitError>;

/// Unified error type for bag and broker operations
#[derive(Error, Debug)]
pub enum TurtlekitError {
    /// Filesystem failures while creating, writing, or reading bags
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Message or bag payloads that failed to encode or decode
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Structural problems with a bag file
    #[error("bag error: {0}")]
    Bag(String),

    /// Broker connection or subscription failures
    #[error("communication error: {0}")]
    Communication(String),

    /// Invalid user-supplied settings
    #[error("configuration error: {0}")]
    Config(String),
}

impl TurtlekitError {
    pub fn bag(msg: impl Into<String>) -> Self {
        Self::Bag(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn communication(msg: impl Into<String>) -> Self {
        Self::Communication(msg.into())
    }
}

impl From<bincode::Error> for TurtlekitError {
    fn from(err: bincode::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<serde_json::Error> for TurtlekitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
