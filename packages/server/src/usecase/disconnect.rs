//! UseCase: tear down a closed connection.
//!
//! Presence is removed and announced; the session (if any) is
//! deliberately left alone so a reloading client can reattach and
//! recover its history.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, UserRegistry};
use crate::infrastructure::dto::websocket::ServerEvent;

use super::error::DisconnectError;

pub struct DisconnectUseCase {
    registry: Arc<dyn UserRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectUseCase {
    pub fn new(registry: Arc<dyn UserRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        was_joined: bool,
    ) -> Result<(), DisconnectError> {
        self.message_pusher.unregister_client(connection_id).await;

        if !was_joined {
            return Ok(());
        }

        self.registry.remove(connection_id).await;

        let event = ServerEvent::UserLeft {
            user_id: connection_id.as_str().to_string(),
        };
        let json = serde_json::to_string(&event)?;
        let targets: Vec<ConnectionId> =
            self.registry.list().await.into_iter().map(|u| u.id).collect();
        self.message_pusher.broadcast(targets, &json).await?;

        tracing::info!("Connection '{}' left the bar", connection_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pusher::MockMessagePusher;
    use crate::domain::{User, UserName};
    use crate::infrastructure::message_pusher::WebSocketMessagePusher;
    use crate::infrastructure::repository::InMemoryUserRegistry;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_disconnect_of_joined_user_announces_user_left() {
        // given: Alice and Bob are present
        let registry = Arc::new(InMemoryUserRegistry::new());
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let usecase = DisconnectUseCase::new(registry.clone(), pusher.clone());

        let alice = ConnectionId::new("conn-a".to_string());
        let bob = ConnectionId::new("conn-b".to_string());
        let (alice_tx, _alice_rx) = mpsc::unbounded_channel();
        let (bob_tx, mut bob_rx) = mpsc::unbounded_channel();
        pusher.register_client(alice.clone(), alice_tx).await;
        pusher.register_client(bob.clone(), bob_tx).await;
        for (id, name) in [(&alice, "Alice"), (&bob, "Bob")] {
            registry
                .add(User::new(
                    id.clone(),
                    UserName::new(name.to_string()).unwrap(),
                ))
                .await;
        }

        // when: Alice's connection closes
        usecase.execute(&alice, true).await.unwrap();

        // then: she is gone from the registry and Bob is told
        assert!(registry.get(&alice).await.is_none());
        assert_eq!(
            bob_rx.recv().await.unwrap(),
            r#"{"type":"user_left","userId":"conn-a"}"#
        );
    }

    #[tokio::test]
    async fn test_disconnect_of_unjoined_connection_only_unregisters() {
        // given:
        let registry = Arc::new(InMemoryUserRegistry::new());
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_unregister_client()
            .withf(|id| id.as_str() == "conn-x")
            .times(1)
            .return_const(());
        pusher.expect_broadcast().never();
        let usecase = DisconnectUseCase::new(registry, Arc::new(pusher));

        // when: a connection that never joined goes away
        let result = usecase
            .execute(&ConnectionId::new("conn-x".to_string()), false)
            .await;

        // then: no user_left broadcast
        assert!(result.is_ok());
    }
}
