//! Conversion logic between DTOs and domain entities.

use crate::domain::entity;
use crate::infrastructure::dto::websocket as dto;

// ========================================
// Domain Entity -> DTO
// ========================================

impl From<entity::ChatMessage> for dto::ChatMessageDto {
    fn from(model: entity::ChatMessage) -> Self {
        Self {
            user_id: model.user_id.into_string(),
            name: model.name.into_string(),
            text: model.text.into_string(),
            timestamp: model.timestamp.value(),
        }
    }
}

impl From<entity::User> for dto::UserDto {
    fn from(model: entity::User) -> Self {
        Self {
            id: model.id.into_string(),
            name: model.name.into_string(),
            seated: model.seated,
        }
    }
}
