//! Domain-level errors.

use thiserror::Error;

/// Validation failures when constructing value objects from wire input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("user id is not a valid UUID: '{0}'")]
    InvalidUserId(String),

    #[error("display name must be 1-20 UTF-16 units after trimming (got {0})")]
    InvalidUserName(usize),

    #[error("message text must be 1-500 UTF-16 units (got {0})")]
    InvalidMessageText(usize),
}

/// Failures when pushing a frame to a client connection.
#[derive(Debug, Error)]
pub enum MessagePushError {
    #[error("client '{0}' is not registered")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}
