//! Message pusher trait: unicast and fan-out over live connections.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::MessagePushError;
use super::value_object::ConnectionId;

/// Outbound channel for a single connection. The WebSocket sink side
/// lives in the UI layer; the pusher only ever sees the sender half.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Transport primitives for serialized server events.
///
/// Delivery is best-effort and at-most-once: a closed or missing
/// target during a broadcast is skipped, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register a connection's outbound channel. Called once per
    /// connection, before the `welcome` frame.
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// Drop a connection's outbound channel. Idempotent.
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// Send to a single connection. Errors if the connection is not
    /// registered or its channel is closed.
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError>;

    /// Fire-and-forget fan-out to the given targets. Per-target
    /// failures are logged and skipped; the call itself never fails.
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
