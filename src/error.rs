//! Error types shared by the three state holders.

use thiserror::Error;

/// Broad category of an [`Error`], for callers that only care about the class
/// of contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    PreconditionViolation,
    EnvironmentMismatch,
}

/// Contract violations surfaced synchronously to the caller. None of these
/// are transient and none are retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The caller passed a disallowed value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs state that is not present yet.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// The operation needs a live viewport (or a runtime to watch it) and the
    /// current execution context has none.
    #[error("{operation} can only be called in a browser-capable context: {reason}")]
    EnvironmentMismatch {
        operation: &'static str,
        reason: &'static str,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::PreconditionViolation(_) => ErrorKind::PreconditionViolation,
            Error::EnvironmentMismatch { .. } => ErrorKind::EnvironmentMismatch,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
