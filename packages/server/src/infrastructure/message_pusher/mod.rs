//! Concrete `MessagePusher` implementations.
//!
//! Only the WebSocket variant exists today; the trait boundary is what
//! lets use case tests swap in a mock.

pub mod websocket;

pub use websocket::WebSocketMessagePusher;
