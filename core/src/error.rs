//! Error types for the character-list client.
//!
//! # Design
//! The variants follow the failure taxonomy of a fetch attempt: transport
//! (the request never completed), protocol (non-2xx status), and data shape
//! (a 2xx body that does not parse). The lifecycle controller collapses all
//! three into one fixed display string for the user; the variants keep the
//! underlying cause available for diagnostics.

use std::fmt;

/// Errors produced while executing or interpreting a list fetch.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be executed at all: connection refused, DNS
    /// failure, transport-level timeout.
    Transport(String),

    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected shape.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
