//! UseCase: accept a new connection.
//!
//! Runs before any client frame: registers the connection's outbound
//! channel and delivers the `welcome` event carrying the server-issued
//! connection id. The connection is anonymous until it joins or
//! authenticates.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel};
use crate::infrastructure::dto::websocket::ServerEvent;

use super::error::ConnectError;

pub struct ConnectUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        sender: PusherChannel,
    ) -> Result<(), ConnectError> {
        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;

        let welcome = ServerEvent::Welcome {
            user_id: connection_id.as_str().to_string(),
        };
        let json = serde_json::to_string(&welcome)?;
        self.message_pusher.push_to(&connection_id, &json).await?;

        tracing::info!("Connection '{}' welcomed", connection_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pusher::MockMessagePusher;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_connect_registers_then_welcomes() {
        // given:
        let mut pusher = MockMessagePusher::new();
        let connection_id = ConnectionId::new("conn-1".to_string());

        pusher
            .expect_register_client()
            .withf(|id, _| id.as_str() == "conn-1")
            .times(1)
            .return_const(());
        pusher
            .expect_push_to()
            .withf(|id, content| {
                id.as_str() == "conn-1"
                    && content == r#"{"type":"welcome","userId":"conn-1"}"#
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let usecase = ConnectUseCase::new(Arc::new(pusher));
        let (tx, _rx) = mpsc::unbounded_channel();

        // when:
        let result = usecase.execute(connection_id, tx).await;

        // then:
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_connect_with_real_pusher_delivers_welcome() {
        // given:
        let pusher = Arc::new(crate::infrastructure::message_pusher::WebSocketMessagePusher::new());
        let usecase = ConnectUseCase::new(pusher);
        let connection_id = ConnectionId::new("conn-1".to_string());
        let (tx, mut rx) = mpsc::unbounded_channel();

        // when:
        usecase.execute(connection_id, tx).await.unwrap();

        // then:
        let frame = rx.recv().await.unwrap();
        assert_eq!(frame, r#"{"type":"welcome","userId":"conn-1"}"#);
    }
}
