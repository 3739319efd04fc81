//! UseCase: authenticate a connection against the session store.
//!
//! First authenticate for a userId creates a session; a later
//! authenticate with the same userId (browser reload) reattaches the
//! existing session to the new connection and replays its buffered
//! history as `history_sync`. Either way the connection receives an
//! `authenticated` acknowledgement.

use std::sync::Arc;

use meimei_shared::time::Clock;

use crate::domain::{
    ConnectionId, MessagePusher, Session, SessionStore, Timestamp, UserId, UserName,
};
use crate::infrastructure::dto::websocket::{ServerEvent, SessionInfoDto};

use super::error::AuthenticateError;

pub struct AuthenticateUseCase {
    sessions: Arc<dyn SessionStore>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl AuthenticateUseCase {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sessions,
            message_pusher,
            clock,
        }
    }

    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        user_id: UserId,
        name: UserName,
    ) -> Result<(), AuthenticateError> {
        let now = Timestamp::new(self.clock.now_jst_millis());

        let connected_at = match self.sessions.get(&user_id).await {
            Some(existing) => {
                self.sessions
                    .reattach(&user_id, connection_id.clone(), now)
                    .await;

                let history = ServerEvent::HistorySync {
                    messages: existing.messages.into_iter().map(Into::into).collect(),
                };
                let history_json = serde_json::to_string(&history)?;
                self.message_pusher
                    .push_to(connection_id, &history_json)
                    .await?;

                tracing::info!(
                    "Session '{}' reattached to connection '{}'",
                    user_id,
                    connection_id
                );
                existing.connected_at
            }
            None => {
                let session = Session::new(user_id.clone(), name, connection_id.clone(), now);
                self.sessions.create(session).await;

                tracing::info!(
                    "Session '{}' created for connection '{}'",
                    user_id,
                    connection_id
                );
                now
            }
        };

        let ack = ServerEvent::Authenticated {
            user_id: user_id.as_str().to_string(),
            session: SessionInfoDto {
                connected_at: connected_at.value(),
                server_time: now.value(),
            },
        };
        let ack_json = serde_json::to_string(&ack)?;
        self.message_pusher.push_to(connection_id, &ack_json).await?;

        Ok(())
    }
}
