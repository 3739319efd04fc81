//! WebSocket event DTOs.
//!
//! Frames are JSON objects discriminated by a `type` field, with
//! camelCase field names on the wire. A frame that fails to
//! deserialize is dropped by the handler (no error frame is sent).

use serde::{Deserialize, Serialize};

/// Client -> Server events.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Enter the bar with a display name (legacy presence path).
    Join { name: String },
    /// Establish or reattach a session keyed by a client-side UUID.
    #[serde(rename_all = "camelCase")]
    Authenticate { user_id: String, name: String },
    /// Flip the sender's seated status.
    SeatToggle,
    /// Say something to the whole bar.
    SendMessage { text: String },
}

/// Server -> Client events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// First frame on every connection; carries the server-issued
    /// connection-scoped id.
    #[serde(rename_all = "camelCase")]
    Welcome { user_id: String },
    /// Full participant list, sent to a client right after it joins.
    StateSync { users: Vec<UserDto> },
    /// A new participant entered (sent to everyone else).
    #[serde(rename_all = "camelCase")]
    UserJoined { user_id: String, name: String },
    /// A participant left.
    #[serde(rename_all = "camelCase")]
    UserLeft { user_id: String },
    /// A participant's seated status changed (sent to everyone,
    /// including the toggler).
    #[serde(rename_all = "camelCase")]
    SeatChanged { user_id: String, seated: bool },
    /// A chat message (sent to everyone, including the sender).
    Message(ChatMessageDto),
    /// Acknowledgement of an `authenticate` event.
    #[serde(rename_all = "camelCase")]
    Authenticated {
        user_id: String,
        session: SessionInfoDto,
    },
    /// Buffered history replayed to a reattaching client, in original
    /// append order.
    HistorySync { messages: Vec<ChatMessageDto> },
}

/// One participant in a `state_sync` frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub seated: bool,
}

/// A chat message on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDto {
    pub user_id: String,
    pub name: String,
    pub text: String,
    pub timestamp: i64,
}

/// Session metadata in an `authenticated` frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfoDto {
    pub connected_at: i64,
    pub server_time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_join_event() {
        // given:
        let raw = r#"{"type":"join","name":"Alice"}"#;

        // when:
        let event: ClientEvent = serde_json::from_str(raw).unwrap();

        // then:
        assert_eq!(
            event,
            ClientEvent::Join {
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn test_deserialize_authenticate_event_with_camel_case_user_id() {
        // given:
        let raw = r#"{"type":"authenticate","userId":"550e8400-e29b-41d4-a716-446655440000","name":"Alice"}"#;

        // when:
        let event: ClientEvent = serde_json::from_str(raw).unwrap();

        // then:
        assert_eq!(
            event,
            ClientEvent::Authenticate {
                user_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn test_deserialize_seat_toggle_event_without_fields() {
        // given:
        let raw = r#"{"type":"seat_toggle"}"#;

        // when:
        let event: ClientEvent = serde_json::from_str(raw).unwrap();

        // then:
        assert_eq!(event, ClientEvent::SeatToggle);
    }

    #[test]
    fn test_deserialize_rejects_unknown_event_type() {
        // given:
        let raw = r#"{"type":"dance"}"#;

        // when / then:
        assert!(serde_json::from_str::<ClientEvent>(raw).is_err());
    }

    #[test]
    fn test_serialize_welcome_event() {
        // given:
        let event = ServerEvent::Welcome {
            user_id: "abc".to_string(),
        };

        // when:
        let json = serde_json::to_string(&event).unwrap();

        // then:
        assert_eq!(json, r#"{"type":"welcome","userId":"abc"}"#);
    }

    #[test]
    fn test_serialize_message_event_flattens_payload() {
        // given:
        let event = ServerEvent::Message(ChatMessageDto {
            user_id: "abc".to_string(),
            name: "Alice".to_string(),
            text: "hi".to_string(),
            timestamp: 1000,
        });

        // when:
        let json = serde_json::to_string(&event).unwrap();

        // then: payload fields sit at the top level next to `type`
        assert_eq!(
            json,
            r#"{"type":"message","userId":"abc","name":"Alice","text":"hi","timestamp":1000}"#
        );
    }

    #[test]
    fn test_serialize_seat_changed_event() {
        // given:
        let event = ServerEvent::SeatChanged {
            user_id: "abc".to_string(),
            seated: true,
        };

        // when:
        let json = serde_json::to_string(&event).unwrap();

        // then:
        assert_eq!(
            json,
            r#"{"type":"seat_changed","userId":"abc","seated":true}"#
        );
    }

    #[test]
    fn test_serialize_authenticated_event_nests_session() {
        // given:
        let event = ServerEvent::Authenticated {
            user_id: "u1".to_string(),
            session: SessionInfoDto {
                connected_at: 1000,
                server_time: 2000,
            },
        };

        // when:
        let json = serde_json::to_string(&event).unwrap();

        // then:
        assert_eq!(
            json,
            r#"{"type":"authenticated","userId":"u1","session":{"connectedAt":1000,"serverTime":2000}}"#
        );
    }
}
