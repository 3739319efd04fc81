//! UseCase: flip a participant's seated status.
//!
//! The `seat_changed` broadcast goes to everyone including the
//! toggler, so every client reconciles from the same event.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, UserRegistry};
use crate::infrastructure::dto::websocket::ServerEvent;

use super::error::ToggleSeatError;

pub struct ToggleSeatUseCase {
    registry: Arc<dyn UserRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ToggleSeatUseCase {
    pub fn new(registry: Arc<dyn UserRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    pub async fn execute(&self, connection_id: &ConnectionId) -> Result<(), ToggleSeatError> {
        // Absent participant is a no-op by contract
        let Some(user) = self.registry.get(connection_id).await else {
            return Ok(());
        };

        let seated = !user.seated;
        self.registry.set_seated(connection_id, seated).await;

        let event = ServerEvent::SeatChanged {
            user_id: connection_id.as_str().to_string(),
            seated,
        };
        let json = serde_json::to_string(&event)?;
        let targets: Vec<ConnectionId> =
            self.registry.list().await.into_iter().map(|u| u.id).collect();
        self.message_pusher.broadcast(targets, &json).await?;

        Ok(())
    }
}
