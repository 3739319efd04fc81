//! Use case layer: one use case per protocol operation, plus the
//! closing sweep. The WebSocket handler validates and dispatches;
//! the use cases mutate the stores and compute the broadcasts.

pub mod authenticate;
pub mod close_bar;
pub mod connect;
pub mod disconnect;
pub mod error;
pub mod join;
pub mod send_message;
pub mod toggle_seat;

pub use authenticate::AuthenticateUseCase;
pub use close_bar::CloseBarUseCase;
pub use connect::ConnectUseCase;
pub use disconnect::DisconnectUseCase;
pub use error::{
    AuthenticateError, ConnectError, DisconnectError, JoinError, SendMessageError,
    ToggleSeatError,
};
pub use join::JoinUseCase;
pub use send_message::SendMessageUseCase;
pub use toggle_seat::ToggleSeatUseCase;
