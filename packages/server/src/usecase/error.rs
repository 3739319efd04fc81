//! Per-usecase error types.
//!
//! None of these is fatal: the WebSocket handler logs them at the
//! per-message boundary and keeps the connection alive.

use thiserror::Error;

use crate::domain::MessagePushError;

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("failed to encode welcome event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to deliver welcome event: {0}")]
    Welcome(#[from] MessagePushError),
}

#[derive(Debug, Error)]
pub enum JoinError {
    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to deliver state sync: {0}")]
    StateSync(#[from] MessagePushError),
}

#[derive(Debug, Error)]
pub enum AuthenticateError {
    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to deliver session event: {0}")]
    Push(#[from] MessagePushError),
}

#[derive(Debug, Error)]
pub enum ToggleSeatError {
    #[error("failed to encode seat_changed event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to broadcast seat_changed event: {0}")]
    Broadcast(#[from] MessagePushError),
}

#[derive(Debug, Error)]
pub enum SendMessageError {
    #[error("failed to encode message event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to broadcast message event: {0}")]
    Broadcast(#[from] MessagePushError),
}

#[derive(Debug, Error)]
pub enum DisconnectError {
    #[error("failed to encode user_left event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to broadcast user_left event: {0}")]
    Broadcast(#[from] MessagePushError),
}
