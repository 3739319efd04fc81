//! UseCase: broadcast a chat message.
//!
//! The sender must be present in the registry (for its display name);
//! the timestamp is server-assigned. When the connection is also
//! authenticated, the message is buffered into that userId's session
//! so a later `history_sync` can replay it.

use std::sync::Arc;

use meimei_shared::time::Clock;

use crate::domain::{
    ChatMessage, ConnectionId, MessagePusher, MessageText, SessionStore, Timestamp, UserId,
    UserRegistry,
};
use crate::infrastructure::dto::websocket::ServerEvent;

use super::error::SendMessageError;

pub struct SendMessageUseCase {
    registry: Arc<dyn UserRegistry>,
    sessions: Arc<dyn SessionStore>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(
        registry: Arc<dyn UserRegistry>,
        sessions: Arc<dyn SessionStore>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            sessions,
            message_pusher,
            clock,
        }
    }

    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        session_user: Option<&UserId>,
        text: MessageText,
    ) -> Result<(), SendMessageError> {
        // Absent participant is a no-op by contract
        let Some(user) = self.registry.get(connection_id).await else {
            return Ok(());
        };

        let message = ChatMessage {
            user_id: connection_id.clone(),
            name: user.name,
            text,
            timestamp: Timestamp::new(self.clock.now_jst_millis()),
        };

        // Buffer into the session for future history_sync, if this
        // connection is authenticated
        if let Some(user_id) = session_user {
            self.sessions.append_message(user_id, message.clone()).await;
        }

        let event = ServerEvent::Message(message.into());
        let json = serde_json::to_string(&event)?;
        let targets: Vec<ConnectionId> =
            self.registry.list().await.into_iter().map(|u| u.id).collect();
        self.message_pusher.broadcast(targets, &json).await?;

        Ok(())
    }
}
