//! Error types for the test channel
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ChannelError
pub type Result<T> = std::result::Result<T, ChannelError>;

/// Unified error type for test channel operations
#[derive(Debug, Error)]
pub enum ChannelError {
    // -------------------------------------------------------------------------
    // Local Errors (command rejected before anything hits the wire)
    // -------------------------------------------------------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// Local stream I/O (terminal, in-memory readers)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// Socket-level connect or send failure
    #[error("Transport error: {0}")]
    Transport(#[source] std::io::Error),

    #[error("Channel is closed")]
    ChannelClosed,

    // -------------------------------------------------------------------------
    // Decoding Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl ChannelError {
    /// Whether an interactive session can keep going after this error.
    ///
    /// Transport failures, use-after-close and a broken terminal end the session.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ChannelError::Validation(_) | ChannelError::Protocol(_) => true,
            ChannelError::Io(_) | ChannelError::Transport(_) | ChannelError::ChannelClosed => {
                false
            }
        }
    }
}
