//! UseCase: closing time.
//!
//! Unconditionally empties both the user registry and the session
//! store. Open sockets are NOT closed here: a client that stays
//! connected past closing keeps its socket but is desynchronized from
//! the now-empty server state. That is accepted behavior, not a bug.

use std::sync::Arc;

use crate::domain::{SessionStore, UserRegistry};

pub struct CloseBarUseCase {
    registry: Arc<dyn UserRegistry>,
    sessions: Arc<dyn SessionStore>,
}

impl CloseBarUseCase {
    pub fn new(registry: Arc<dyn UserRegistry>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { registry, sessions }
    }

    pub async fn execute(&self) {
        let users = self.registry.count().await;
        let sessions = self.sessions.count().await;

        self.registry.clear().await;
        self.sessions.clear().await;

        tracing::info!(
            "Closing time: cleared {} users and {} sessions",
            users,
            sessions
        );
    }
}
