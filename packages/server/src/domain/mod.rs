//! Domain layer: value objects, entities, and the port traits the
//! use cases depend on. Concrete implementations live in the
//! infrastructure layer (dependency inversion).

pub mod entity;
pub mod error;
pub mod pusher;
pub mod registry;
pub mod session;
pub mod value_object;

pub use entity::{ChatMessage, Session, User};
pub use error::{DomainError, MessagePushError};
pub use pusher::{MessagePusher, PusherChannel};
pub use registry::UserRegistry;
pub use session::SessionStore;
pub use value_object::{ConnectionId, MessageText, SocketId, Timestamp, UserId, UserName};
