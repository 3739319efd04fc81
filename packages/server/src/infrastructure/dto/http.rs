//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Response body for `GET /api/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDto {
    /// Whether the bar is currently inside business hours.
    pub open: bool,
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

impl HealthDto {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_dto_serializes_open_flag() {
        // given / when:
        let json = serde_json::to_string(&StatusDto { open: true }).unwrap();

        // then:
        assert_eq!(json, r#"{"open":true}"#);
    }

    #[test]
    fn test_health_dto_serializes_ok() {
        // given / when:
        let json = serde_json::to_string(&HealthDto::ok()).unwrap();

        // then:
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
