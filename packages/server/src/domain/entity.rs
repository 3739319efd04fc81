//! Domain entities.

use super::value_object::{ConnectionId, MessageText, SocketId, Timestamp, UserId, UserName};

/// A participant currently present in the bar.
///
/// One entry per open connection that has joined; removed on
/// disconnect or by the closing sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: ConnectionId,
    pub name: UserName,
    pub seated: bool,
}

impl User {
    /// A freshly joined user is standing.
    pub fn new(id: ConnectionId, name: UserName) -> Self {
        Self {
            id,
            name,
            seated: false,
        }
    }
}

/// A chat message as broadcast to the bar and buffered in sessions.
///
/// Immutable once constructed; `user_id` is the sender's connection id
/// and `timestamp` is server-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub user_id: ConnectionId,
    pub name: UserName,
    pub text: MessageText,
    pub timestamp: Timestamp,
}

/// A user session, keyed by the client-supplied UUID.
///
/// Outlives any single connection: closing the socket leaves the
/// session (and its message history) intact so that a reloading client
/// can reattach and recover it. Only `delete` or the closing sweep
/// destroys it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub name: UserName,
    /// Short random id regenerated on every reattach (debugging aid).
    pub socket_id: SocketId,
    /// The connection currently carrying this session.
    pub connection_id: ConnectionId,
    pub connected_at: Timestamp,
    pub last_activity_at: Timestamp,
    /// Buffered history in append order. Bounded only by the
    /// business-hours window: the closing sweep is the sole expiry.
    pub messages: Vec<ChatMessage>,
}

impl Session {
    pub fn new(
        user_id: UserId,
        name: UserName,
        connection_id: ConnectionId,
        now: Timestamp,
    ) -> Self {
        Self {
            user_id,
            name,
            socket_id: SocketId::generate(),
            connection_id,
            connected_at: now,
            last_activity_at: now,
            messages: Vec::new(),
        }
    }

    /// Attach this session to a new connection (browser reload).
    /// History is untouched.
    pub fn reattach(&mut self, connection_id: ConnectionId, now: Timestamp) {
        self.connection_id = connection_id;
        self.socket_id = SocketId::generate();
        self.last_activity_at = now;
    }
}
