//! Data Transfer Objects (DTOs) for the bar backend.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket event DTOs (one JSON object per frame)
//! - `http`: HTTP API response DTOs

pub mod conversion;
pub mod http;
pub mod websocket;
