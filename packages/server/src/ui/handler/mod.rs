pub mod http;
pub mod websocket;

pub use http::{bar_status, health_check};
pub use websocket::websocket_handler;
