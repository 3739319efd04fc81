//! Infrastructure layer: concrete implementations of the domain ports
//! plus the DTOs spoken on the wire.

pub mod dto;
pub mod message_pusher;
pub mod repository;
