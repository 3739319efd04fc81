//! WebSocket connection handler: the per-connection protocol state
//! machine.
//!
//! A connection starts anonymous and may enter two orthogonal regimes:
//! JOINED (present in the bar, via `join`) and AUTHENTICATED (attached
//! to a session, via `authenticate`). Neither, either, or both can
//! hold at once. Every inbound frame is validated here; anything
//! malformed is logged and dropped without a reply, and no per-message
//! failure ever closes the connection.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::domain::{ConnectionId, MessageText, UserId, UserName};
use crate::infrastructure::dto::websocket::ClientEvent;

use super::super::state::AppState;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the outbound channel into the WebSocket
/// sink. Frames from the use cases arrive on `rx`; once the sink
/// errors the task ends and the connection is torn down.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // Server-issued, connection-scoped id; announced in `welcome` and
    // used as the registry key once this connection joins.
    let connection_id = ConnectionId::generate();

    let (sender, mut receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel();
    let mut send_task = pusher_loop(rx, sender);

    if let Err(e) = state
        .connect_usecase
        .execute(connection_id.clone(), tx)
        .await
    {
        tracing::error!("Failed to welcome connection '{}': {}", connection_id, e);
    }

    // Per-connection protocol state
    let mut joined = false;
    let mut session_user: Option<UserId> = None;

    loop {
        tokio::select! {
            maybe_msg = receiver.next() => {
                let msg = match maybe_msg {
                    Some(Ok(msg)) => msg,
                    Some(Err(e)) => {
                        tracing::error!("WebSocket error on '{}': {}", connection_id, e);
                        break;
                    }
                    None => break,
                };

                match msg {
                    Message::Text(text) => {
                        match serde_json::from_str::<ClientEvent>(&text) {
                            Ok(event) => {
                                handle_event(
                                    &state,
                                    &connection_id,
                                    event,
                                    &mut joined,
                                    &mut session_user,
                                )
                                .await;
                            }
                            Err(e) => {
                                // Dropped silently on the wire; the absence of a
                                // response is the only signal the client gets
                                tracing::warn!(
                                    "Dropping malformed frame from '{}': {}",
                                    connection_id,
                                    e
                                );
                            }
                        }
                    }
                    Message::Ping(_) => {
                        // Pong is handled by the protocol layer
                        tracing::debug!("Received ping from '{}'", connection_id);
                    }
                    Message::Close(_) => {
                        tracing::info!("Connection '{}' requested close", connection_id);
                        break;
                    }
                    _ => {}
                }
            }
            _ = &mut send_task => break,
        }
    }

    send_task.abort();

    // Presence is removed; the session deliberately survives so a
    // reload can reattach and recover history
    if let Err(e) = state
        .disconnect_usecase
        .execute(&connection_id, joined)
        .await
    {
        tracing::warn!("Disconnect cleanup failed for '{}': {}", connection_id, e);
    }
}

/// Dispatch one validated frame. Every failure is logged and swallowed
/// here; this is the per-message error boundary.
async fn handle_event(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    event: ClientEvent,
    joined: &mut bool,
    session_user: &mut Option<UserId>,
) {
    match event {
        ClientEvent::Join { name } => {
            // Idempotent guard: a second join is silently ignored
            if *joined {
                tracing::debug!("Ignoring repeat join from '{}'", connection_id);
                return;
            }
            let name = match UserName::new(name) {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!("Rejecting join from '{}': {}", connection_id, e);
                    return;
                }
            };
            if let Err(e) = state.join_usecase.execute(connection_id, name).await {
                tracing::warn!("Join delivery failed for '{}': {}", connection_id, e);
            }
            // The participant was registered either way
            *joined = true;
        }
        ClientEvent::Authenticate { user_id, name } => {
            let (user_id, name) = match (UserId::new(user_id), UserName::new(name)) {
                (Ok(user_id), Ok(name)) => (user_id, name),
                (Err(e), _) | (_, Err(e)) => {
                    tracing::warn!("Rejecting authenticate from '{}': {}", connection_id, e);
                    return;
                }
            };
            if let Err(e) = state
                .authenticate_usecase
                .execute(connection_id, user_id.clone(), name)
                .await
            {
                tracing::warn!("Authenticate delivery failed for '{}': {}", connection_id, e);
            }
            *session_user = Some(user_id);
        }
        ClientEvent::SeatToggle => {
            if !*joined {
                return;
            }
            if let Err(e) = state.toggle_seat_usecase.execute(connection_id).await {
                tracing::warn!("Seat toggle failed for '{}': {}", connection_id, e);
            }
        }
        ClientEvent::SendMessage { text } => {
            if !*joined {
                return;
            }
            let text = match MessageText::new(text) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Rejecting message from '{}': {}", connection_id, e);
                    return;
                }
            };
            if let Err(e) = state
                .send_message_usecase
                .execute(connection_id, session_user.as_ref(), text)
                .await
            {
                tracing::warn!("Message delivery failed for '{}': {}", connection_id, e);
            }
        }
    }
}
