//! UseCase: join the bar (legacy presence path).
//!
//! Registers a participant under the connection's server-issued id,
//! replies with a `state_sync` of everyone present (including the
//! requester), and announces `user_joined` to everyone else. The
//! once-per-connection guard lives in the WebSocket handler.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, User, UserName, UserRegistry};
use crate::infrastructure::dto::websocket::ServerEvent;

use super::error::JoinError;

pub struct JoinUseCase {
    registry: Arc<dyn UserRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinUseCase {
    pub fn new(registry: Arc<dyn UserRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        name: UserName,
    ) -> Result<(), JoinError> {
        let user = User::new(connection_id.clone(), name.clone());
        self.registry.add(user).await;

        // Snapshot after the insert so the requester sees itself
        let users = self.registry.list().await;

        let state_sync = ServerEvent::StateSync {
            users: users.iter().cloned().map(Into::into).collect(),
        };
        let state_json = serde_json::to_string(&state_sync)?;
        self.message_pusher
            .push_to(connection_id, &state_json)
            .await?;

        let joined = ServerEvent::UserJoined {
            user_id: connection_id.as_str().to_string(),
            name: name.into_string(),
        };
        let joined_json = serde_json::to_string(&joined)?;
        let targets: Vec<ConnectionId> = users
            .into_iter()
            .map(|u| u.id)
            .filter(|id| id != connection_id)
            .collect();
        self.message_pusher.broadcast(targets, &joined_json).await?;

        tracing::info!("Connection '{}' joined the bar", connection_id);
        Ok(())
    }
}
