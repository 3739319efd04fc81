//! In-memory `SessionStore` implementation.
//!
//! Sessions live for the business-hours window only: nothing here
//! expires individual entries, the closing sweep clears the whole map.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, ConnectionId, Session, SessionStore, Timestamp, UserId};

/// In-memory session store, keyed by the client-supplied UUID.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<UserId, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: Session) {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session.user_id.clone(), session);
    }

    async fn get(&self, user_id: &UserId) -> Option<Session> {
        let sessions = self.sessions.lock().await;
        sessions.get(user_id).cloned()
    }

    async fn reattach(&self, user_id: &UserId, connection_id: ConnectionId, now: Timestamp) {
        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions.get_mut(user_id) {
            session.reattach(connection_id, now);
        }
    }

    async fn append_message(&self, user_id: &UserId, message: ChatMessage) {
        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions.get_mut(user_id) {
            session.messages.push(message);
        }
    }

    async fn delete(&self, user_id: &UserId) {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(user_id);
    }

    async fn count(&self) -> usize {
        let sessions = self.sessions.lock().await;
        sessions.len()
    }

    async fn clear(&self) {
        let mut sessions = self.sessions.lock().await;
        sessions.clear();
    }
}
