//! Error types for the client boundary.

use thiserror::Error;

/// Failures surfaced by [`RequestClient`](crate::client::RequestClient).
///
/// Every failure path resolves to one of these variants; nothing panics
/// past the client boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a 4xx/5xx status.
    #[error("{status} {reason}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Reason phrase for the status
        reason: String,
        /// Raw response body text
        body: String,
    },
    /// Network, DNS, or timeout failure below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(String),
    /// Request body could not be serialized for the wire.
    #[error("body encoding error: {0}")]
    Body(String),
}

impl Error {
    /// True for HTTP-level failures (a response was received).
    pub fn is_status(&self) -> bool {
        matches!(self, Error::Status { .. })
    }

    /// The HTTP status code, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Transport(format!("request timeout: {}", err))
        } else if err.is_connect() {
            Error::Transport(format!("connection error: {}", err))
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::Body(err.to_string())
    }
}
