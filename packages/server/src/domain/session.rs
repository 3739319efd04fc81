//! Session store trait: longer-lived identity and chat history.

use async_trait::async_trait;

use super::entity::{ChatMessage, Session};
use super::value_object::{ConnectionId, Timestamp, UserId};

/// Store of user sessions, keyed by the client-supplied UUID.
///
/// A session survives the close of its underlying connection; that is
/// the point of the design. Mutators targeting a missing userId are
/// no-ops by contract and never raise.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a session, overwriting any existing one for the same
    /// userId (prior history is lost). Callers must check for an
    /// existing session first when a reattach is desired.
    async fn create(&self, session: Session);

    async fn get(&self, user_id: &UserId) -> Option<Session>;

    /// Attach an existing session to a new connection: replaces the
    /// connection id, regenerates the socket id, bumps
    /// `last_activity_at`. Messages are untouched. No-op if absent.
    async fn reattach(&self, user_id: &UserId, connection_id: ConnectionId, now: Timestamp);

    /// Append a message to the session's history in call order.
    /// No-op if absent.
    async fn append_message(&self, user_id: &UserId, message: ChatMessage);

    /// Idempotent removal.
    async fn delete(&self, user_id: &UserId);

    async fn count(&self) -> usize;

    /// Empty the store. Used by the closing sweep.
    async fn clear(&self);
}
