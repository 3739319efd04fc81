//! Realtime backend for the meimei-tei virtual bar.
//!
//! A WebSocket hub lets connected clients join the bar, toggle a seated
//! status, and exchange chat messages; all state lives in process
//! memory and is cleared by a periodic sweep once the bar closes.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
