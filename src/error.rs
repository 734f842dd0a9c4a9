//! Error types shared across the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while running an intersection operation.
///
/// The parser never fails (malformed tokens are dropped, not reported), and
/// the algorithms never fail on in-memory input. Errors arise only from
/// forced-mode precondition checks at the engine boundary and from I/O in
/// chunk sources.
#[derive(Error, Debug)]
pub enum MintError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Precondition violation: {message}")]
    PreconditionViolation { message: String },

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl MintError {
    /// Stable error-kind token for callers that surface outcomes
    /// structurally rather than through `Display`.
    pub fn kind(&self) -> &'static str {
        match self {
            MintError::Io(_) => "Io",
            MintError::PreconditionViolation { .. } => "PreconditionViolation",
            MintError::Unknown(_) => "UnknownError",
        }
    }
}

pub type Result<T> = std::result::Result<T, MintError>;
