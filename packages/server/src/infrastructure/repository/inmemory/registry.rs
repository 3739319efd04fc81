//! In-memory `UserRegistry` implementation.
//!
//! A `HashMap` behind a `tokio::sync::Mutex`. Every operation holds
//! the lock for the duration of a single map access, so mutations are
//! fully serialized and no partial update is ever visible to a
//! concurrent broadcast.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, User, UserRegistry};

/// In-memory registry of present users, keyed by connection id.
#[derive(Default)]
pub struct InMemoryUserRegistry {
    users: Mutex<HashMap<ConnectionId, User>>,
}

impl InMemoryUserRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRegistry for InMemoryUserRegistry {
    async fn add(&self, user: User) {
        let mut users = self.users.lock().await;
        users.insert(user.id.clone(), user);
    }

    async fn get(&self, id: &ConnectionId) -> Option<User> {
        let users = self.users.lock().await;
        users.get(id).cloned()
    }

    async fn remove(&self, id: &ConnectionId) {
        let mut users = self.users.lock().await;
        users.remove(id);
    }

    async fn list(&self) -> Vec<User> {
        let users = self.users.lock().await;
        users.values().cloned().collect()
    }

    async fn set_seated(&self, id: &ConnectionId, seated: bool) {
        let mut users = self.users.lock().await;
        if let Some(user) = users.get_mut(id) {
            user.seated = seated;
        }
    }

    async fn count(&self) -> usize {
        let users = self.users.lock().await;
        users.len()
    }

    async fn clear(&self) {
        let mut users = self.users.lock().await;
        users.clear();
    }
}
