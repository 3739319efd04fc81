//! UI layer: axum router, WebSocket handlers, lifecycle sweeper.

mod handler;
mod server;
mod signal;
pub mod state;
pub mod sweeper;

pub use server::{Server, app};
