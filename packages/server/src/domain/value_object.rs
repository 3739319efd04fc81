//! Value objects for the virtual bar domain.
//!
//! Inbound strings cross into the domain only through these
//! constructors; a frame that fails validation here is dropped by the
//! handler without a reply.

use std::fmt;

use super::error::DomainError;

/// Server-generated identifier for a single WebSocket connection.
///
/// Assigned at connect time and announced to the client in the
/// `welcome` message. This is the key of the user registry and the
/// `userId` carried by presence and chat events; it is not stable
/// across reconnects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Generate a fresh connection id (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client-supplied identifier for a session (a UUID the browser
/// generates once and persists locally). Stable across reconnects;
/// keys the session store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if uuid::Uuid::parse_str(&value).is_err() {
            return Err(DomainError::InvalidUserId(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name: trimmed, 1-20 UTF-16 code units.
///
/// Length is counted in UTF-16 units because that is the wire
/// schema's unit: astral-plane characters count as two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(value: String) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        let len = trimmed.encode_utf16().count();
        if len == 0 || len > 20 {
            return Err(DomainError::InvalidUserName(len));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Chat message body: 1-500 UTF-16 code units, NOT trimmed.
///
/// The reference client trims before sending, but the wire contract is
/// deliberately permissive: whitespace-only text within the length
/// bound is accepted as-is. Length is counted in UTF-16 units, same as
/// [`UserName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: String) -> Result<Self, DomainError> {
        let len = value.encode_utf16().count();
        if len == 0 || len > 500 {
            return Err(DomainError::InvalidMessageText(len));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Short random string distinguishing successive attachments of the
/// same session. Debugging aid only, not a security token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketId(String);

impl SocketId {
    /// Generate a fresh 6-character socket id.
    pub fn generate() -> Self {
        let simple = uuid::Uuid::new_v4().simple().to_string();
        Self(simple[..6].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix timestamp in JST (milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_id_generate_is_unique() {
        // given / when:
        let a = ConnectionId::generate();
        let b = ConnectionId::generate();

        // then:
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_user_id_accepts_valid_uuid() {
        // given:
        let raw = "550e8400-e29b-41d4-a716-446655440000".to_string();

        // when:
        let user_id = UserId::new(raw.clone());

        // then:
        assert_eq!(user_id.unwrap().as_str(), raw);
    }

    #[test]
    fn test_user_id_rejects_non_uuid() {
        // given / when:
        let result = UserId::new("invalid-id".to_string());

        // then:
        assert_eq!(
            result,
            Err(DomainError::InvalidUserId("invalid-id".to_string()))
        );
    }

    #[test]
    fn test_user_name_trims_whitespace() {
        // given / when:
        let name = UserName::new("  Alice  ".to_string()).unwrap();

        // then:
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_user_name_rejects_empty_after_trim() {
        assert!(UserName::new("   ".to_string()).is_err());
        assert!(UserName::new("".to_string()).is_err());
    }

    #[test]
    fn test_user_name_length_boundary() {
        // given / when / then: 20 chars accepted, 21 rejected
        assert!(UserName::new("A".repeat(20)).is_ok());
        assert_eq!(
            UserName::new("A".repeat(21)),
            Err(DomainError::InvalidUserName(21))
        );
    }

    #[test]
    fn test_user_name_accepts_multibyte_characters() {
        // given / when:
        let name = UserName::new("😀Alice😁".to_string());

        // then:
        assert!(name.is_ok());
    }

    #[test]
    fn test_user_name_length_counts_utf16_units() {
        // given / when / then: an astral-plane char is two units, so
        // ten emoji fill the 20-unit budget and eleven overflow it
        assert!(UserName::new("😀".repeat(10)).is_ok());
        assert_eq!(
            UserName::new("😀".repeat(11)),
            Err(DomainError::InvalidUserName(22))
        );
    }

    #[test]
    fn test_message_text_length_boundary() {
        // given / when / then: 500 chars accepted, 501 rejected
        assert!(MessageText::new("a".repeat(500)).is_ok());
        assert_eq!(
            MessageText::new("a".repeat(501)),
            Err(DomainError::InvalidMessageText(501))
        );
        assert_eq!(
            MessageText::new(String::new()),
            Err(DomainError::InvalidMessageText(0))
        );
    }

    #[test]
    fn test_message_text_length_counts_utf16_units() {
        // given / when / then: 250 emoji are exactly 500 units, one
        // more overflows
        assert!(MessageText::new("😀".repeat(250)).is_ok());
        assert_eq!(
            MessageText::new("😀".repeat(251)),
            Err(DomainError::InvalidMessageText(502))
        );
    }

    #[test]
    fn test_message_text_is_not_trimmed() {
        // given / when: whitespace-only text within the length bound
        let text = MessageText::new("   ".to_string()).unwrap();

        // then: accepted verbatim
        assert_eq!(text.as_str(), "   ");
    }

    #[test]
    fn test_socket_id_is_short_and_fresh() {
        // given / when:
        let a = SocketId::generate();
        let b = SocketId::generate();

        // then:
        assert_eq!(a.as_str().len(), 6);
        assert_ne!(a, b);
    }
}
